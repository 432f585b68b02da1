//! Draw primitives handed to the front-end
//!
//! Coordinates are field pixels with the origin at the top-left corner.

use glam::Vec2;

pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

/// Where a text's `pos` sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// `pos` is the middle of the top edge
    TopCenter,
    /// `pos` is the middle of the string
    Center,
}

/// A single filled primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        anchor: TextAnchor,
        color: Color,
    },
}

pub fn rect(x: i32, y: i32, w: i32, h: i32, color: Color) -> Shape {
    Shape::Rect {
        pos: Vec2::new(x as f32, y as f32),
        size: Vec2::new(w as f32, h as f32),
        color,
    }
}

pub fn circle(x: i32, y: i32, radius: i32, color: Color) -> Shape {
    Shape::Circle {
        center: Vec2::new(x as f32, y as f32),
        radius: radius as f32,
        color,
    }
}

pub fn text(text: impl Into<String>, pos: Vec2, size: f32, anchor: TextAnchor) -> Shape {
    Shape::Text {
        text: text.into(),
        pos,
        size,
        anchor,
        color: WHITE,
    }
}

/// Dashed vertical line down the middle of the field
pub fn center_divider(width: i32, height: i32, color: Color) -> Vec<Shape> {
    let step = (height / 20).max(1) as usize;
    let dash = (height / 40).max(1);
    (10..height)
        .step_by(step)
        .map(|y| rect(width / 2 - 2, y, 4, dash, color))
        .collect()
}
