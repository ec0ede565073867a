use super::*;

#[test]
fn axis_max_prefers_fixed_limit() {
    assert!((axis_max(&[12.0, 40.0], Some(100.0)) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn axis_max_rounds_data_maximum() {
    assert!((axis_max(&[3.0, 17.0, f64::NAN], None) - 20.0).abs() < f64::EPSILON);
    assert!((axis_max(&[], None) - 1.0).abs() < f64::EPSILON);
    assert!((axis_max(&[4.0], Some(0.0)) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn plot_area_fits_inside_view_box() {
    assert!(PLOT_WIDTH > 0.0 && MARGIN_LEFT + PLOT_WIDTH <= VIEW_WIDTH);
    assert!(PLOT_HEIGHT > 0.0 && MARGIN_TOP + PLOT_HEIGHT + MARGIN_BOTTOM <= VIEW_HEIGHT);
}
