//! Fibonacci-sphere layout of a weighted word list.
//!
//! Positions are a pure function of list index and weight: the polar angle
//! walks the sphere evenly, the azimuth advances by the golden angle (an
//! irrational multiple of pi, so no two indices share a meridian), and the
//! shell radius grows with weight. Colors cycle through the fixed palette.

use std::hash::{Hash, Hasher};

use fnv::FnvHasher;
use glam::Vec3;

use crate::constants::{BASE_RADIUS, GOLDEN_ANGLE, PALETTE, RADIUS_SPAN};
use crate::words::WordEntry;

/// Computed placement for one word: base position and display color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub color: [f32; 3],
}

/// Lay out `entries` on a weight-scaled sphere shell.
///
/// Deterministic: the same list always produces bit-identical placements.
/// Positions are pairwise distinct for any finite list; an empty list yields
/// an empty layout.
pub fn layout(entries: &[WordEntry]) -> Vec<Placement> {
    let n = entries.len();
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n as f32).acos();
            let theta = GOLDEN_ANGLE * i as f32;
            let radius = BASE_RADIUS + entry.weight * RADIUS_SPAN;
            Placement {
                position: radius
                    * Vec3::new(
                        phi.sin() * theta.cos(),
                        phi.sin() * theta.sin(),
                        phi.cos(),
                    ),
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}

/// Memoizing wrapper around [`layout`], keyed by a content hash of the list.
///
/// The frame loop may ask for placements every time the word list is touched;
/// recomputation only happens when the list content actually changed.
#[derive(Default)]
pub struct LayoutCache {
    hash: Option<u64>,
    placements: Vec<Placement>,
}

impl LayoutCache {
    pub fn placements(&mut self, entries: &[WordEntry]) -> &[Placement] {
        let hash = content_hash(entries);
        if self.hash != Some(hash) {
            self.placements = layout(entries);
            self.hash = Some(hash);
        }
        &self.placements
    }
}

fn content_hash(entries: &[WordEntry]) -> u64 {
    let mut hasher = FnvHasher::default();
    for entry in entries {
        entry.word.hash(&mut hasher);
        entry.weight.to_bits().hash(&mut hasher);
    }
    entries.len().hash(&mut hasher);
    hasher.finish()
}
