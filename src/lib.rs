//! Duel Pong - classic two-player Pong
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (paddles, ball, collisions, scoring)
//! - `session`: Frame driver (fixed-step accumulator, quit flag, win pause)
//! - `renderer`: Scene description handed to the drawing front-end
//! - `settings`: Startup configuration

pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::{Controller, Settings, SettingsError};

/// Game configuration defaults
pub mod consts {
    /// Play field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 700;
    pub const FIELD_HEIGHT: i32 = 500;
    /// Largest accepted field width or height
    pub const MAX_FIELD_EXTENT: i32 = 1 << 14;

    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame time fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 4;
    /// Gap between a paddle and its side wall
    pub const PADDLE_INSET: i32 = 10;
    /// Paddles never get closer than this to the top/bottom edge
    pub const PADDLE_MARGIN: i32 = 2;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 7;
    /// Horizontal speed (constant magnitude, sign flips on bounce)
    pub const BALL_SPEED: i32 = 5;
    /// Paddle offset is divided by this to get the deflection
    pub const DEFLECTION_DIVISOR: i32 = 10;

    /// First to this many points wins
    pub const WIN_SCORE: u32 = 10;
    /// Real-time pause after a win (milliseconds)
    pub const WIN_PAUSE_MS: u64 = 5000;
}
