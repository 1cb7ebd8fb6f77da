//! Property tests over random edges and parameter sets

use proptest::prelude::*;
use quickjoint_core::{Edge, Path, Point};
use quickjoint_joints::{segment_count, JointMaker, JointParameters};

fn edge_strategy() -> impl Strategy<Value = Edge> {
    (
        -500.0f64..500.0,
        -500.0f64..500.0,
        50.0f64..1000.0,
        0.0f64..std::f64::consts::TAU,
        any::<bool>(),
    )
        .prop_map(|(x, y, length, angle, closes_path)| {
            let start = Point::new(x, y);
            Edge {
                start,
                end: start + Point::from_polar(length, angle),
                closes_path,
            }
        })
}

fn params_strategy() -> impl Strategy<Value = JointParameters> {
    (
        1u32..8,
        1.0f64..10.0,
        0.0f64..0.5,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(count, thickness, kerf, flip_side, at_start, at_end)| JointParameters {
                feature_count: count,
                material_thickness: thickness,
                kerf_width: kerf,
                flip_side,
                feature_at_start: at_start,
                feature_at_end: at_end,
            },
        )
}

fn tangential(edge: &Edge, p: Point) -> f64 {
    let dir = edge.vector() / edge.length();
    (p - edge.start).dot(dir)
}

fn normal(edge: &Edge, p: Point) -> f64 {
    let dir = edge.vector() / edge.length();
    let d = p - edge.start;
    dir.x * d.y - dir.y * d.x
}

fn rect_area(rect: &Path) -> f64 {
    let p = rect.points();
    let mut twice = 0.0;
    for i in 0..p.len() {
        let a = p[i];
        let b = p[(i + 1) % p.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    twice.abs() / 2.0
}

proptest! {
    #[test]
    fn segment_count_formula(count in 1u32..1000, at_start in any::<bool>(), at_end in any::<bool>()) {
        let n = segment_count(count, at_start, at_end).unwrap();
        let expected = count as usize * 2 - 1 + usize::from(!at_start) + usize::from(!at_end);
        prop_assert!(n >= 1);
        prop_assert_eq!(n, expected);
    }

    #[test]
    fn tab_edge_spans_the_original_edge(edge in edge_strategy(), params in params_strategy()) {
        let maker = JointMaker::new(params.clone()).unwrap();
        let path = maker.tab_edge(&edge, true).unwrap();
        let points = path.points();

        let first = points[0];
        let last = points[points.len() - 1];
        prop_assert!((first - edge.start).magnitude() < 1e-9);
        prop_assert!((last - edge.end).magnitude() < 1e-6);
        prop_assert_eq!(path.is_closed(), edge.closes_path);

        // never steps backwards along the edge
        for w in points.windows(2) {
            prop_assert!(tangential(&edge, w[1]) >= tangential(&edge, w[0]) - 1e-6);
        }

        // every point sits on the baseline or at full tab depth
        for p in &points {
            let n = normal(&edge, *p).abs();
            prop_assert!(n < 1e-6 || (n - params.material_thickness).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_kerf_tabs_project_onto_edge(edge in edge_strategy(), mut params in params_strategy()) {
        params.kerf_width = 0.0;
        let maker = JointMaker::new(params.clone()).unwrap();
        let plan = maker.plan(&edge).unwrap();
        let points = maker.tab_edge(&edge, false).unwrap().points();

        let step = edge.length() / plan.segment_count as f64;
        for p in &points {
            // every corner lies on a segment boundary
            let t = tangential(&edge, *p) / step;
            prop_assert!((t - t.round()).abs() < 1e-6);
        }
        prop_assert!((tangential(&edge, points[points.len() - 1]) - edge.length()).abs() < 1e-6);
    }

    #[test]
    fn slot_boxes_have_exact_area_and_never_overlap(
        edge in edge_strategy(),
        params in params_strategy(),
    ) {
        let maker = JointMaker::new(params.clone()).unwrap();
        let plan = maker.plan(&edge).unwrap();
        let boxes = maker.slot_boxes(&edge).unwrap();
        prop_assert_eq!(boxes.len(), params.feature_count as usize);

        let expected = (params.material_thickness - params.kerf_width)
            * (plan.segment_length() - params.kerf_width);

        let mut spans = Vec::new();
        for rect in &boxes {
            prop_assert!((rect_area(rect) - expected).abs() < 1e-6 * expected.max(1.0));
            let ts: Vec<f64> = rect.points().iter().map(|p| tangential(&edge, *p)).collect();
            let lo = ts.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = ts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(lo >= -1e-6 && hi <= edge.length() + 1e-6);
            spans.push((lo, hi));
        }
        for w in spans.windows(2) {
            prop_assert!(w[0].1 < w[1].0);
        }
    }

    #[test]
    fn generation_is_deterministic(edge in edge_strategy(), params in params_strategy()) {
        let maker = JointMaker::new(params).unwrap();
        prop_assert_eq!(maker.tab_edge(&edge, true).unwrap(), maker.tab_edge(&edge, true).unwrap());
        prop_assert_eq!(maker.slot_boxes(&edge).unwrap(), maker.slot_boxes(&edge).unwrap());
    }
}
