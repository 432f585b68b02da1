//! Scene description for the drawing front-end
//!
//! The simulation never draws. Each frame it is turned into a flat list of
//! primitives (rects, circles, text) which the window layer paints in order.

pub mod scene;
pub mod shapes;

pub use scene::{Scene, build_scene, winner_banner};
pub use shapes::{Color, Shape, TextAnchor};
