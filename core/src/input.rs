//! The canonical calculation input and its range validation.
//!
//! RULE: ranges are checked at the boundary, before the engine runs.
//! The engine assumes they hold and re-checks only the time horizon.

use crate::error::{RoiError, RoiResult};
use serde::{Deserialize, Serialize};

/// Operational assumptions for one ROI calculation. Immutable per
/// computation; percent fields are whole percentages (0–100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Free-text label for the scenario. Not used in any formula.
    #[serde(default)]
    pub scenario_name: String,
    pub monthly_invoice_volume: f64,
    /// Headcount context carried alongside the inputs. Not used in any formula.
    #[serde(default)]
    pub num_ap_staff: f64,
    pub avg_hours_per_invoice: f64,
    pub hourly_wage: f64,
    pub error_rate_manual_pct: f64,
    pub error_cost: f64,
    pub software_monthly_cost: f64,
    pub one_time_implementation_cost: f64,
    pub time_reduction_pct: f64,
    pub error_reduction_pct: f64,
    pub time_horizon_months: i64,
}

impl CalculationInput {
    /// Check every field against its documented range. Returns the first
    /// violation, naming the offending field.
    pub fn validate(&self) -> RoiResult<()> {
        non_negative("monthly_invoice_volume", self.monthly_invoice_volume)?;
        non_negative("num_ap_staff", self.num_ap_staff)?;
        non_negative("avg_hours_per_invoice", self.avg_hours_per_invoice)?;
        non_negative("hourly_wage", self.hourly_wage)?;
        percent("error_rate_manual_pct", self.error_rate_manual_pct)?;
        non_negative("error_cost", self.error_cost)?;
        non_negative("software_monthly_cost", self.software_monthly_cost)?;
        non_negative(
            "one_time_implementation_cost",
            self.one_time_implementation_cost,
        )?;
        percent("time_reduction_pct", self.time_reduction_pct)?;
        percent("error_reduction_pct", self.error_reduction_pct)?;
        if self.time_horizon_months < 1 {
            return Err(RoiError::InvalidInput {
                field: "time_horizon_months",
                message: format!("must be at least 1, got {}", self.time_horizon_months),
            });
        }
        Ok(())
    }

    /// Typical invoice-automation assumptions. Used as a seed scenario
    /// and throughout the test suites.
    pub fn example() -> Self {
        Self {
            scenario_name: "Q4_Pilot".to_string(),
            monthly_invoice_volume: 2000.0,
            num_ap_staff: 3.0,
            avg_hours_per_invoice: 0.17,
            hourly_wage: 30.0,
            error_rate_manual_pct: 0.5,
            error_cost: 100.0,
            software_monthly_cost: 299.0,
            one_time_implementation_cost: 50000.0,
            time_reduction_pct: 70.0,
            error_reduction_pct: 80.0,
            time_horizon_months: 36,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> RoiResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RoiError::InvalidInput {
            field,
            message: format!("must be a finite non-negative number, got {value}"),
        });
    }
    Ok(())
}

fn percent(field: &'static str, value: f64) -> RoiResult<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(RoiError::InvalidInput {
            field,
            message: format!("must be a percentage in [0, 100], got {value}"),
        });
    }
    Ok(())
}
