//! Per-frame drawable cell list handed to render sinks

use crate::geometry::{Transform, Vec2};
use crate::types::{Color, Rgb};

/// One occupied cell, ready to draw as a bordered quad
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub x: i8,
    pub y: i8,
    pub fill: Rgb,
    pub outline: Rgb,
    pub transform: Transform,
}

impl FrameCell {
    pub fn new(x: i8, y: i8, color: Color, transform: Transform) -> Self {
        Self {
            x,
            y,
            fill: color.fill(),
            outline: color.outline(),
            transform,
        }
    }

    /// Where the cell's center is drawn this frame
    pub fn drawn_center(&self) -> Vec2 {
        self.transform
            .apply(Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5))
    }

    /// The quad's corners (top-left, top-right, bottom-right, bottom-left)
    /// after the transform
    pub fn corners(&self) -> [Vec2; 4] {
        let (x, y) = (self.x as f32, self.y as f32);
        [
            Vec2::new(x, y),
            Vec2::new(x + 1.0, y),
            Vec2::new(x + 1.0, y + 1.0),
            Vec2::new(x, y + 1.0),
        ]
        .map(|corner| self.transform.apply(corner))
    }
}
