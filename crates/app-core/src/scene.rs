//! Word nodes and the scene that owns them.
//!
//! A [`WordNode`] binds one word's immutable data (text, weight, position,
//! color) to its only mutable bit: the hover flag. Everything a renderer
//! needs is derived from that state through pure functions, so a frontend
//! can redraw the node from scratch every frame.

use glam::Vec3;

use crate::constants::{
    HIGHLIGHT_COLOR, OUTLINE_COLOR_BASE, OUTLINE_WIDTH_BASE, OUTLINE_WIDTH_HOVER,
    PICK_RADIUS_FACTOR, SCALE_BASE, SCALE_SPAN,
};
use crate::layout::LayoutCache;
use crate::words::WordEntry;

/// Cursor shape the display surface should adopt after a hover transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAffordance {
    Pointer,
    Default,
}

/// Detail overlay shown next to a hovered word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub detail: String,
}

/// Resolved visual parameters for one node at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeVisual {
    pub fill: [f32; 3],
    pub outline_color: [f32; 3],
    pub outline_width: f32,
    pub overlay: Option<Overlay>,
}

#[derive(Clone, Debug)]
pub struct WordNode {
    pub text: String,
    pub weight: f32,
    pub position: Vec3,
    pub color: [f32; 3],
    hovered: bool,
}

impl WordNode {
    /// Font-size analogue in world units. Strictly increasing in weight.
    pub fn display_scale(&self) -> f32 {
        SCALE_BASE + self.weight * SCALE_SPAN
    }

    /// Relevance as a percentage rounded to one decimal place.
    pub fn relevance_percent(&self) -> f32 {
        (self.weight * 1000.0).round() / 10.0
    }

    /// Radius of the hover hit sphere, proportional to display scale.
    pub fn pick_radius(&self) -> f32 {
        self.display_scale() * PICK_RADIUS_FACTOR
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Render parameters for the node's current hover state.
    pub fn visual(&self) -> NodeVisual {
        if self.hovered {
            NodeVisual {
                fill: HIGHLIGHT_COLOR,
                outline_color: self.color,
                outline_width: OUTLINE_WIDTH_HOVER,
                overlay: Some(Overlay {
                    title: self.text.clone(),
                    detail: format!("Relevance: {:.1}%", self.relevance_percent()),
                }),
            }
        } else {
            NodeVisual {
                fill: self.color,
                outline_color: OUTLINE_COLOR_BASE,
                outline_width: OUTLINE_WIDTH_BASE,
                overlay: None,
            }
        }
    }
}

/// The full word set plus exclusive hover state.
///
/// The node vector is replaced atomically when a new list arrives; there is
/// no incremental diffing. Camera state lives elsewhere and survives swaps.
#[derive(Default)]
pub struct WordScene {
    nodes: Vec<WordNode>,
    hovered: Option<usize>,
    cache: LayoutCache,
}

impl WordScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire node set from a fresh word list.
    ///
    /// Hover state is cleared: the old nodes it referred to are gone.
    pub fn set_words(&mut self, entries: Vec<WordEntry>) {
        let placements = self.cache.placements(&entries);
        self.nodes = entries
            .iter()
            .zip(placements)
            .map(|(entry, placement)| WordNode {
                text: entry.word.clone(),
                weight: entry.weight,
                position: placement.position,
                color: placement.color,
                hovered: false,
            })
            .collect();
        self.hovered = None;
        log::info!("word set replaced: {} nodes", self.nodes.len());
    }

    pub fn nodes(&self) -> &[WordNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// Move the exclusive hover to `index`, or clear it with `None`.
    ///
    /// Idempotent: re-hovering the current node is a no-op. Returns the
    /// cursor affordance the display surface should apply, only when the
    /// hover actually transitioned. An out-of-range index clears the hover.
    pub fn set_hovered(&mut self, index: Option<usize>) -> Option<CursorAffordance> {
        let index = index.filter(|&i| i < self.nodes.len());
        if index == self.hovered {
            return None;
        }
        if let Some(old) = self.hovered {
            self.nodes[old].hovered = false;
        }
        self.hovered = index;
        match index {
            Some(i) => {
                self.nodes[i].hovered = true;
                Some(CursorAffordance::Pointer)
            }
            None => Some(CursorAffordance::Default),
        }
    }
}
