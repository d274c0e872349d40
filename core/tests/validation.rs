//! Boundary validation tests for the canonical input.

use roi_core::error::RoiError;
use roi_core::input::CalculationInput;

fn expect_invalid(input: CalculationInput, expected_field: &str) {
    match input.validate() {
        Err(RoiError::InvalidInput { field, .. }) => assert_eq!(
            field, expected_field,
            "wrong field reported for {input:?}"
        ),
        other => panic!("expected InvalidInput on {expected_field}, got {other:?}"),
    }
}

/// The seed scenario passes validation untouched.
#[test]
fn example_input_is_valid() {
    CalculationInput::example().validate().unwrap();
}

/// Zero is a legal value for every non-negative field; the horizon floor is 1.
#[test]
fn zeroed_input_with_unit_horizon_is_valid() {
    let input = CalculationInput {
        scenario_name: String::new(),
        monthly_invoice_volume: 0.0,
        num_ap_staff: 0.0,
        avg_hours_per_invoice: 0.0,
        hourly_wage: 0.0,
        error_rate_manual_pct: 0.0,
        error_cost: 0.0,
        software_monthly_cost: 0.0,
        one_time_implementation_cost: 0.0,
        time_reduction_pct: 0.0,
        error_reduction_pct: 0.0,
        time_horizon_months: 1,
    };
    input.validate().unwrap();
}

#[test]
fn negative_volume_rejected() {
    let input = CalculationInput {
        monthly_invoice_volume: -1.0,
        ..CalculationInput::example()
    };
    expect_invalid(input, "monthly_invoice_volume");
}

#[test]
fn percent_above_hundred_rejected() {
    let input = CalculationInput {
        time_reduction_pct: 100.5,
        ..CalculationInput::example()
    };
    expect_invalid(input, "time_reduction_pct");

    let input = CalculationInput {
        error_rate_manual_pct: 101.0,
        ..CalculationInput::example()
    };
    expect_invalid(input, "error_rate_manual_pct");
}

#[test]
fn non_finite_values_rejected() {
    let input = CalculationInput {
        hourly_wage: f64::NAN,
        ..CalculationInput::example()
    };
    expect_invalid(input, "hourly_wage");

    let input = CalculationInput {
        error_cost: f64::INFINITY,
        ..CalculationInput::example()
    };
    expect_invalid(input, "error_cost");
}

#[test]
fn zero_horizon_rejected() {
    let input = CalculationInput {
        time_horizon_months: 0,
        ..CalculationInput::example()
    };
    expect_invalid(input, "time_horizon_months");
}
