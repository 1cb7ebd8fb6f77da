//! Independent edges processed from several threads

use quickjoint_core::{Edge, Path, Point};
use quickjoint_joints::{JointMaker, JointParameters, SegmentPlan};
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_engine_types_are_thread_safe() {
    assert_send_sync::<JointMaker>();
    assert_send_sync::<JointParameters>();
    assert_send_sync::<SegmentPlan>();
    assert_send_sync::<Edge>();
    assert_send_sync::<Path>();
}

#[test]
fn test_parallel_edges_match_sequential() {
    let maker = JointMaker::new(JointParameters::new(3, 3.0, 0.14)).expect("valid parameters");
    let edges: Vec<Edge> = (0..8)
        .map(|i| {
            let f = i as f64;
            Edge::new(Point::new(f, -f), Point::new(100.0 + f * 10.0, 40.0 * f))
        })
        .collect();

    let sequential: Vec<Path> = edges
        .iter()
        .map(|e| maker.tab_edge(e, true).expect("tabs"))
        .collect();

    let parallel: Vec<Path> = thread::scope(|s| {
        let handles: Vec<_> = edges
            .iter()
            .map(|e| {
                let maker = &maker;
                s.spawn(move || maker.tab_edge(e, true).expect("tabs"))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}
