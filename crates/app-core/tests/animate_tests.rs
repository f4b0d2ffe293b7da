// Host-side tests for the animation driver.

use app_core::{node_transform, tick, WordEntry, WordScene, BOB_AMPLITUDE, SPIN_RATE};
use glam::Vec3;

fn scene(n: usize) -> WordScene {
    let mut scene = WordScene::new();
    scene.set_words(
        (0..n)
            .map(|i| WordEntry {
                word: format!("w{i}"),
                weight: (i as f32 / n as f32).min(1.0),
            })
            .collect(),
    );
    scene
}

#[test]
fn vertical_bob_matches_the_phase_offset_formula() {
    let base = Vec3::new(1.7, -2.0, 0.5);
    for t in [0.0, 0.1, 1.0, 3.7, 100.0] {
        let transform = node_transform(base, t);
        let expected_y = base.y + (t + base.x).sin() * BOB_AMPLITUDE;
        assert!(
            (transform.translation.y - expected_y).abs() < 1e-6,
            "bob mismatch at t={t}: {} vs {expected_y}",
            transform.translation.y
        );
        assert_eq!(transform.translation.x, base.x);
        assert_eq!(transform.translation.z, base.z);
    }
}

#[test]
fn nodes_with_different_x_bob_out_of_phase() {
    let a = node_transform(Vec3::new(0.0, 0.0, 0.0), 1.0);
    let b = node_transform(Vec3::new(2.0, 0.0, 0.0), 1.0);
    assert_ne!(
        a.translation.y, b.translation.y,
        "distinct base x must decorrelate the bob phase"
    );
}

#[test]
fn spin_is_proportional_to_elapsed_time() {
    let base = Vec3::ZERO;
    let one = node_transform(base, 1.0);
    let two = node_transform(base, 2.0);
    assert!((one.spin - SPIN_RATE).abs() < 1e-6);
    assert!((two.spin - 2.0 * SPIN_RATE).abs() < 1e-6);
}

#[test]
fn tick_never_mutates_base_positions() {
    let scene = scene(8);
    let before: Vec<Vec3> = scene.nodes().iter().map(|n| n.position).collect();
    let mut transforms = Vec::new();
    for step in 0..240 {
        tick(&scene, step as f32 / 60.0, &mut transforms);
    }
    let after: Vec<Vec3> = scene.nodes().iter().map(|n| n.position).collect();
    assert_eq!(before, after, "tick must not write into stored positions");
}

#[test]
fn tick_emits_one_transform_per_node_and_reuses_the_buffer() {
    let scene = scene(5);
    let mut transforms = vec![node_transform(Vec3::ZERO, 0.0); 99];
    tick(&scene, 0.5, &mut transforms);
    assert_eq!(transforms.len(), 5);

    let empty = WordScene::new();
    tick(&empty, 0.5, &mut transforms);
    assert!(transforms.is_empty(), "empty scene animates nothing");
}

#[test]
fn bob_stays_within_amplitude_of_base() {
    let scene = scene(12);
    let mut transforms = Vec::new();
    for step in 0..600 {
        tick(&scene, step as f32 * 0.05, &mut transforms);
        for (node, transform) in scene.nodes().iter().zip(&transforms) {
            let dy = (transform.translation.y - node.position.y).abs();
            assert!(
                dy <= BOB_AMPLITUDE + 1e-6,
                "bob excursion {dy} exceeded amplitude"
            );
        }
    }
}
