//! tests for configuration setters and validation
use holodiff::differentiation::config::{Abscissa, DEFAULT_ORDER};
use holodiff::differentiation::errors::DifferentiationError;
use holodiff::differentiation::holoborodko::{differentiate, HoloborodkoCfg};
use holodiff::differentiation::Boundary;

type TestResult = Result<(), DifferentiationError>;

#[test]
fn defaults() {
    let cfg = HoloborodkoCfg::new();
    assert_eq!(cfg.common().order(), DEFAULT_ORDER);
    assert_eq!(cfg.boundary(), Boundary::Recursive);
    assert!(cfg.common().y().is_empty());
    assert_eq!(cfg.common().x(), Abscissa::Points(&[]));
}

#[test]
fn set_x_then_mismatched_y() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 6];
    let err = HoloborodkoCfg::new().set_x(&x).unwrap().set_y(&y).unwrap_err();
    assert!(matches!(err, DifferentiationError::UnequalLength { x_len: 5, y_len: 6 }));
}

#[test]
fn set_y_then_mismatched_x() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 6];
    let err = HoloborodkoCfg::new().set_y(&y).unwrap().set_x(&x).unwrap_err();
    assert!(matches!(err, DifferentiationError::UnequalLength { x_len: 5, y_len: 6 }));
}

#[test]
fn step_never_mismatches() -> TestResult {
    let y = [0.0; 6];
    let cfg = HoloborodkoCfg::new().set_step(0.1).set_y(&y)?;
    assert_eq!(cfg.common().x(), Abscissa::Step(0.1));

    let y = [0.0; 11];
    let _ = HoloborodkoCfg::new().set_y(&y)?.set_step(0.1);
    Ok(())
}

#[test]
fn step_replaces_points() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 5];
    let cfg = HoloborodkoCfg::new().set_x(&x)?.set_y(&y)?.set_step(2.0);
    let rep = differentiate(cfg)?;
    assert_eq!(rep.n_provided, 5);
    Ok(())
}

#[test]
fn empty_inputs_rejected() {
    let err = HoloborodkoCfg::new().set_x(&[]).unwrap_err();
    assert!(matches!(err, DifferentiationError::EmptyInput));

    let err = HoloborodkoCfg::new().set_y(&[]).unwrap_err();
    assert!(matches!(err, DifferentiationError::EmptyInput));
}

#[test]
fn zero_order_rejected() {
    let err = HoloborodkoCfg::new().set_order(0).unwrap_err();
    assert!(matches!(err, DifferentiationError::InvalidOrder { got: 0 }));
}

#[test]
fn unset_y_rejected_at_run() {
    let cfg = HoloborodkoCfg::new().set_step(1.0);
    let err = differentiate(cfg).unwrap_err();
    assert!(matches!(err, DifferentiationError::EmptyInput));
}

#[test]
fn unset_x_rejected_at_run() -> TestResult {
    let y = [1.0; 7];
    let cfg = HoloborodkoCfg::new().set_y(&y)?;
    let err = differentiate(cfg).unwrap_err();
    assert!(matches!(err, DifferentiationError::UnequalLength { x_len: 0, y_len: 7 }));
    Ok(())
}

#[test]
fn too_few_samples_for_order() -> TestResult {
    let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let cfg = HoloborodkoCfg::new().set_step(1.0).set_y(&y)?.set_order(3)?;
    let err = differentiate(cfg).unwrap_err();
    assert!(matches!(err, DifferentiationError::InsufficientPoints { got: 6, need: 7 }));
    Ok(())
}

#[test]
fn error_messages_report_lengths() {
    let err = DifferentiationError::UnequalLength { x_len: 5, y_len: 6 };
    assert_eq!(err.to_string(), "unequal length: x has 5 elements, y has 6");

    let err = DifferentiationError::InsufficientPoints { got: 4, need: 5 };
    assert!(err.to_string().contains("got 4"));
}
