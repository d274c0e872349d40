//! The ROI engine — a single pure transformation.
//!
//! RULES:
//!   - No I/O, no clock, no randomness. The result is a deterministic
//!     function of the input, safe to recompute on every keystroke.
//!   - Percent fields are divided by 100 before use.
//!   - Ranges are validated at the boundary (input::validate); the engine
//!     re-checks only the time horizon, which it divides and multiplies by.

use crate::{
    error::{RoiError, RoiResult},
    input::CalculationInput,
};
use serde::{Deserialize, Serialize};

/// Months until accumulated monthly savings cover the one-time
/// implementation cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "months", rename_all = "snake_case")]
pub enum Payback {
    /// No upfront cost to recover.
    Immediate,
    /// Whole months, rounded up.
    Months(u64),
    /// Savings never accumulate, so the upfront cost is never recovered.
    Never,
}

/// Derived metrics for one calculation. All currency figures are monthly
/// unless named otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // Manual process
    pub manual_hours: f64,
    pub manual_labor_cost: f64,
    pub manual_errors: f64,
    pub manual_error_cost: f64,
    pub manual_total_monthly: f64,
    // Automated process
    pub automated_hours: f64,
    pub automated_labor_cost: f64,
    pub automated_errors: f64,
    pub automated_error_cost: f64,
    pub automated_total_monthly: f64,
    // Savings
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback: Payback,
    // Horizon view
    pub horizon_net_benefit: f64,
    pub cash_outlay_horizon: f64,
    pub roi_horizon_pct: f64,
}

/// Compute derived ROI metrics from a validated input.
///
/// Monthly savings are clamped at zero: automation that costs more than it
/// saves shows zero savings, never negative. Divisions in the payback and
/// ROI branches are guarded explicitly.
pub fn compute(input: &CalculationInput) -> RoiResult<CalculationResult> {
    if input.time_horizon_months < 1 {
        return Err(RoiError::InvalidInput {
            field: "time_horizon_months",
            message: format!("must be at least 1, got {}", input.time_horizon_months),
        });
    }

    let manual_hours = input.monthly_invoice_volume * input.avg_hours_per_invoice;
    let manual_labor_cost = manual_hours * input.hourly_wage;
    let manual_errors = input.monthly_invoice_volume * (input.error_rate_manual_pct / 100.0);
    let manual_error_cost = manual_errors * input.error_cost;
    let manual_total_monthly = manual_labor_cost + manual_error_cost;

    let automated_hours = manual_hours * (1.0 - input.time_reduction_pct / 100.0);
    let automated_labor_cost = automated_hours * input.hourly_wage;
    let automated_errors = manual_errors * (1.0 - input.error_reduction_pct / 100.0);
    let automated_error_cost = automated_errors * input.error_cost;
    let automated_total_monthly =
        automated_labor_cost + automated_error_cost + input.software_monthly_cost;

    let monthly_savings = (manual_total_monthly - automated_total_monthly).max(0.0);
    let annual_savings = monthly_savings * 12.0;

    let payback = if monthly_savings <= 0.0 {
        Payback::Never
    } else if input.one_time_implementation_cost == 0.0 {
        Payback::Immediate
    } else {
        Payback::Months((input.one_time_implementation_cost / monthly_savings).ceil() as u64)
    };

    let horizon = input.time_horizon_months as f64;
    let horizon_net_benefit = monthly_savings * horizon - input.one_time_implementation_cost;
    let cash_outlay_horizon =
        input.software_monthly_cost * horizon + input.one_time_implementation_cost;
    let roi_horizon_pct = if cash_outlay_horizon > 0.0 {
        horizon_net_benefit / cash_outlay_horizon * 100.0
    } else {
        0.0
    };

    Ok(CalculationResult {
        manual_hours,
        manual_labor_cost,
        manual_errors,
        manual_error_cost,
        manual_total_monthly,
        automated_hours,
        automated_labor_cost,
        automated_errors,
        automated_error_cost,
        automated_total_monthly,
        monthly_savings,
        annual_savings,
        payback,
        horizon_net_benefit,
        cash_outlay_horizon,
        roi_horizon_pct,
    })
}
