//! Tab edge scenarios on concrete edges

use approx::assert_abs_diff_eq;
use quickjoint_core::{Edge, PathCommand, Point};
use quickjoint_joints::{JointMaker, JointParameters};

fn assert_points(actual: &[Point], expected: &[(f64, f64)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "point count mismatch: {:?}",
        actual
    );
    for (p, &(x, y)) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
    }
}

#[test]
fn test_two_tabs_on_hundred_unit_edge() {
    let maker = JointMaker::new(JointParameters::new(2, 5.0, 0.0)).expect("valid parameters");
    let edge = Edge::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));

    let plan = maker.plan(&edge).expect("plan");
    assert_eq!(plan.segment_count, 5);
    assert_eq!(plan.segment_vector, Point::new(20.0, 0.0));

    let path = maker.tab_edge(&edge, true).expect("tabs");
    assert_points(
        &path.points(),
        &[
            (0.0, 0.0),
            (20.0, 0.0),
            (20.0, 5.0),
            (40.0, 5.0),
            (40.0, 0.0),
            (60.0, 0.0),
            (60.0, 5.0),
            (80.0, 5.0),
            (80.0, 0.0),
            (100.0, 0.0),
        ],
    );
}

#[test]
fn test_kerf_lengthens_tabs_and_shortens_spaces() {
    let maker = JointMaker::new(JointParameters::new(2, 5.0, 0.2)).expect("valid parameters");
    let edge = Edge::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
    let plan = maker.plan(&edge).expect("plan");
    let segment = plan.segment_length();

    let points = maker.tab_edge(&edge, true).expect("tabs").points();
    let steps: Vec<f64> = points.windows(2).map(|w| w[1].x - w[0].x).collect();
    let parallel: Vec<f64> = steps.into_iter().filter(|dx| dx.abs() > 1e-9).collect();

    assert_eq!(parallel.len(), 5);
    assert_abs_diff_eq!(parallel[0], segment, epsilon = 1e-9);
    assert_abs_diff_eq!(parallel[1], segment + 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(parallel[2], segment - 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(parallel[3], segment + 0.2, epsilon = 1e-9);
    assert_abs_diff_eq!(parallel[4], segment, epsilon = 1e-9);
    assert_abs_diff_eq!(parallel.iter().sum::<f64>(), 100.0, epsilon = 1e-9);
}

#[test]
fn test_single_feature_covering_whole_edge() {
    let params = JointParameters::new(1, 3.0, 0.0).with_edge_features(true);
    let maker = JointMaker::new(params).expect("valid parameters");
    let edge = Edge::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));

    assert_eq!(maker.plan(&edge).expect("plan").segment_count, 1);
    let path = maker.tab_edge(&edge, true).expect("tabs");
    assert_points(
        &path.points(),
        &[(0.0, 0.0), (0.0, 3.0), (40.0, 3.0), (40.0, 0.0)],
    );
}

#[test]
fn test_three_tabs_without_edge_features() {
    let maker = JointMaker::new(JointParameters::new(3, 2.0, 0.0)).expect("valid parameters");
    let edge = Edge::new(Point::new(0.0, 0.0), Point::new(70.0, 0.0));
    assert_eq!(maker.plan(&edge).expect("plan").segment_count, 7);

    // space, tab, space, tab, space, tab, space
    let path = maker.tab_edge(&edge, true).expect("tabs");
    assert_points(
        &path.points(),
        &[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 2.0),
            (20.0, 2.0),
            (20.0, 0.0),
            (30.0, 0.0),
            (30.0, 2.0),
            (40.0, 2.0),
            (40.0, 0.0),
            (50.0, 0.0),
            (50.0, 2.0),
            (60.0, 2.0),
            (60.0, 0.0),
            (70.0, 0.0),
        ],
    );
}

#[test]
fn test_feature_only_at_start() {
    let mut params = JointParameters::new(2, 1.0, 0.0);
    params.feature_at_start = true;
    let maker = JointMaker::new(params).expect("valid parameters");
    let edge = Edge::new(Point::new(0.0, 0.0), Point::new(40.0, 0.0));

    assert_eq!(maker.plan(&edge).expect("plan").segment_count, 4);
    let path = maker.tab_edge(&edge, true).expect("tabs");
    assert_points(
        &path.points(),
        &[
            (0.0, 0.0),
            (0.0, 1.0),
            (10.0, 1.0),
            (10.0, 0.0),
            (20.0, 0.0),
            (20.0, 1.0),
            (30.0, 1.0),
            (30.0, 0.0),
            (40.0, 0.0),
        ],
    );
}

#[test]
fn test_vertical_edge_tabs_point_left() {
    let maker = JointMaker::new(JointParameters::new(1, 3.0, 0.0)).expect("valid parameters");
    let edge = Edge::new(Point::new(10.0, 0.0), Point::new(10.0, 30.0));
    let path = maker.tab_edge(&edge, false).expect("tabs");
    assert!(matches!(path.commands()[0], PathCommand::LineTo(_)));
    assert_points(
        &path.points(),
        &[
            (10.0, 0.0),
            (10.0, 10.0),
            (7.0, 10.0),
            (7.0, 20.0),
            (10.0, 20.0),
            (10.0, 30.0),
        ],
    );
}

#[test]
fn test_svg_path_data() {
    let maker = JointMaker::new(JointParameters::new(1, 5.0, 0.0)).expect("valid parameters");
    let edge = Edge::closing(Point::new(0.0, 0.0), Point::new(30.0, 0.0));
    let data = maker.tab_edge(&edge, true).expect("tabs").to_string();
    assert!(data.starts_with("M 0 0 L 10 0 L "));
    assert!(data.ends_with("L 30 0 Z"));
}

#[test]
fn test_repeated_generation_is_identical() {
    let params = JointParameters::new(4, 3.0, 0.14).with_flip_side(true);
    let maker = JointMaker::new(params).expect("valid parameters");
    let edge = Edge::new(Point::new(12.5, -3.25), Point::new(-140.0, 77.7));
    let first = maker.tab_edge(&edge, true).expect("tabs");
    let second = maker.tab_edge(&edge, true).expect("tabs");
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
