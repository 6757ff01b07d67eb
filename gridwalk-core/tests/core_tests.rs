use gridwalk_core::{
    count_exhaustive, count_tabulated, exhaustive::valid_paths, tabulation::count_rolling, validate, Field, FieldError,
    Move, PathCounter, Strategy, MAX_EXHAUSTIVE_STEPS,
};

fn both(rows: &[&str]) -> (Result<u128, FieldError>, Result<u128, FieldError>) {
    let field = validate(rows).expect("valid field");
    (count_exhaustive(&field), count_tabulated(&field))
}

#[test]
fn open_square() {
    assert_eq!(both(&["..", ".."]), (Ok(2), Ok(2)));
}

#[test]
fn blocked_top_right() {
    assert_eq!(both(&[".X", ".."]), (Ok(1), Ok(1)));
}

#[test]
fn blocked_start() {
    assert_eq!(both(&["X."]), (Ok(0), Ok(0)));
}

#[test]
fn blocked_target_single_column() {
    assert_eq!(both(&[".", "X"]), (Ok(0), Ok(0)));
}

#[test]
fn single_open_cell() {
    assert_eq!(both(&["."]), (Ok(1), Ok(1)));
}

#[test]
fn thirty_two_steps_only_tabulated() {
    let row = ".".repeat(17);
    let rows: Vec<&str> = std::iter::repeat(row.as_str()).take(17).collect();
    let field = Field::parse_rows(&rows).unwrap();
    assert_eq!(field.path_len(), 32);
    assert_eq!(count_exhaustive(&field), Err(FieldError::FieldTooLarge { steps: 32, max: MAX_EXHAUSTIVE_STEPS }));
    // C(32, 16)
    assert_eq!(count_tabulated(&field), Ok(601_080_390));
    assert_eq!(count_rolling(&field), Ok(601_080_390));
}

#[test]
fn validation_errors_from_both_counters() {
    for strategy in Strategy::ALL {
        let counter = strategy.counter();
        assert_eq!(counter.count_rows(&[]), Err(FieldError::EmptyField));
        assert_eq!(counter.count_rows(&[".", ".."]), Err(FieldError::MalformedField { row: 1, expected: 1, found: 2 }));
        assert_eq!(counter.count_rows(&["", ""]), Err(FieldError::MalformedField { row: 0, expected: 0, found: 0 }));
        assert_eq!(counter.count_rows(&["..", "o."]), Err(FieldError::InvalidCell { row: 1, col: 0, found: 'o' }));
    }
}

#[test]
fn snake_corridor() {
    let rows = ["....X", "XXX.X", "X....", "X.XX.", "X...."];
    let field = validate(&rows).unwrap();
    let paths = valid_paths(&field).unwrap();
    assert_eq!(paths.len() as u128, count_tabulated(&field).unwrap());
    for p in &paths {
        let downs = p.moves().iter().filter(|m| **m == Move::Down).count();
        assert_eq!(downs, field.rows() - 1);
        assert_eq!(p.moves().len() - downs, field.cols() - 1);
    }
}
