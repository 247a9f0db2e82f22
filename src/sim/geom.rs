//! Axis-aligned rectangle geometry
//!
//! Everything in the level is a rectangle in y-down screen coordinates;
//! every other module resolves against this one test.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Overlap test with a skin inset.
    ///
    /// `skin` shrinks the comparison so sub-pixel residue left by the
    /// resolver does not read as a fresh collision; pass 0 for the exact
    /// test used by pickups and hazards.
    #[inline]
    pub fn overlaps(&self, other: &Rect, skin: f32) -> bool {
        self.x + skin < other.x + other.w
            && self.x + self.w - skin > other.x
            && self.y + skin < other.y + other.h
            && self.y + self.h - skin > other.y
    }
}
