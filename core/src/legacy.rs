//! Compatibility adapter for the flat legacy calculation schema.
//!
//! The legacy entry point takes four camelCase fields and applies a cruder
//! formula set than the canonical engine (a flat 80% processing-cost cut, a
//! simple annual-savings / tool-cost ratio for ROI, fractional payback).
//! Both formula sets are preserved, named separately: existing callers get
//! byte-compatible numbers from [`estimate`], while [`LegacyCalculationInput::to_canonical`]
//! maps the crude fields onto [`CalculationInput`] so legacy submissions
//! persist as ordinary history records.

use crate::{
    error::{RoiError, RoiResult},
    input::CalculationInput,
};
use serde::{Deserialize, Serialize};

/// Share of manual processing cost that remains after automation under the
/// legacy formula.
const LEGACY_REMAINING_COST_FACTOR: f64 = 0.2;

/// The flat legacy request body: `{invoices, manualCost, toolCost, hourlyRate}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCalculationInput {
    /// Invoices processed per month.
    pub invoices: f64,
    /// Manual processing cost per invoice.
    pub manual_cost: f64,
    /// Automation tool cost per month.
    pub tool_cost: f64,
    /// Carried alongside the inputs; the legacy formulas never use it.
    pub hourly_rate: f64,
}

/// Legacy response payload, camelCase for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyEstimate {
    pub manual_total: f64,
    pub automated_total: f64,
    /// NOT clamped at zero — the legacy schema reports negative savings.
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub roi: f64,
    /// Fractional months, rounded to two decimals. `None` when savings are
    /// non-positive. Goes on the wire as a JSON number; older emitters of
    /// this schema sent a two-decimal string, so callers parse either.
    pub payback: Option<f64>,
}

impl LegacyCalculationInput {
    pub fn validate(&self) -> RoiResult<()> {
        non_negative("invoices", self.invoices)?;
        non_negative("manualCost", self.manual_cost)?;
        non_negative("toolCost", self.tool_cost)?;
        non_negative("hourlyRate", self.hourly_rate)?;
        Ok(())
    }

    /// Map the crude fields onto the canonical model so a legacy submission
    /// can be persisted as a regular history record.
    ///
    /// Labor totals are preserved: when the hourly rate is positive the
    /// per-invoice cost is backed out into hours at that rate, otherwise it
    /// is carried as one hour per invoice at a wage equal to the cost. The
    /// 0.2 remaining-cost factor becomes an 80% time reduction; the legacy
    /// schema has no error or upfront-cost dimensions.
    pub fn to_canonical(&self) -> CalculationInput {
        let (avg_hours_per_invoice, hourly_wage) = if self.hourly_rate > 0.0 {
            (self.manual_cost / self.hourly_rate, self.hourly_rate)
        } else {
            (1.0, self.manual_cost)
        };
        CalculationInput {
            scenario_name: "legacy".to_string(),
            monthly_invoice_volume: self.invoices,
            num_ap_staff: 0.0,
            avg_hours_per_invoice,
            hourly_wage,
            error_rate_manual_pct: 0.0,
            error_cost: 0.0,
            software_monthly_cost: self.tool_cost,
            one_time_implementation_cost: 0.0,
            time_reduction_pct: (1.0 - LEGACY_REMAINING_COST_FACTOR) * 100.0,
            error_reduction_pct: 0.0,
            time_horizon_months: 12,
        }
    }
}

/// The legacy formula set, preserved verbatim for existing callers.
pub fn estimate(input: &LegacyCalculationInput) -> LegacyEstimate {
    let manual_total = input.invoices * input.manual_cost;
    let automated_total =
        input.tool_cost + input.invoices * input.manual_cost * LEGACY_REMAINING_COST_FACTOR;
    let monthly_savings = manual_total - automated_total;
    let annual_savings = monthly_savings * 12.0;
    let roi = if input.tool_cost > 0.0 {
        annual_savings / (input.tool_cost * 12.0) * 100.0
    } else {
        0.0
    };
    let payback = if monthly_savings > 0.0 {
        Some(round2(input.tool_cost / monthly_savings))
    } else {
        None
    };

    LegacyEstimate {
        manual_total,
        automated_total,
        monthly_savings,
        annual_savings,
        roi,
        payback,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
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
