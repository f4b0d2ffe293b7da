//! Per-frame animation of word nodes.
//!
//! The tick is pure with respect to stored base positions: it derives a
//! rendered transform from the base position and the elapsed clock, writing
//! into a caller-owned vector. Each node bobs out of phase with the others
//! because the phase offset is its own base x-coordinate.
//!
//! Spin is driven by elapsed time rather than a fixed per-frame increment,
//! so visual speed is independent of display refresh rate.

use glam::Vec3;

use crate::constants::{BOB_AMPLITUDE, SPIN_RATE};
use crate::scene::WordScene;

/// Rendered placement of one node for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeTransform {
    pub translation: Vec3,
    /// Rotation about the node's own vertical axis, radians.
    pub spin: f32,
}

/// Transform for a single base position at elapsed time `t` (seconds).
#[inline]
pub fn node_transform(base: Vec3, t: f32) -> NodeTransform {
    NodeTransform {
        translation: Vec3::new(
            base.x,
            base.y + (t + base.x).sin() * BOB_AMPLITUDE,
            base.z,
        ),
        spin: SPIN_RATE * t,
    }
}

/// Advance the whole scene, filling `out` with one transform per node.
pub fn tick(scene: &WordScene, t: f32, out: &mut Vec<NodeTransform>) {
    out.clear();
    out.extend(
        scene
            .nodes()
            .iter()
            .map(|node| node_transform(node.position, t)),
    );
}
