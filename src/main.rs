//! Duel Pong entry point
//!
//! Owns the window, keyboard and drawing; everything else is the session.
//!
//! Usage: duel-pong [--config <path>] [--demo] [--vs-cpu]

use std::path::PathBuf;

use macroquad::prelude::*;

use duel_pong::renderer::{self, Scene, TextAnchor};
use duel_pong::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use duel_pong::sim::KeyState;
use duel_pong::{Controller, Session, Settings};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    /// Both paddles on autopilot
    demo: bool,
    /// Right paddle on autopilot
    vs_cpu: bool,
}

impl Options {
    fn parse() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    fn from_args(args: impl IntoIterator<Item = String>) -> Self {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => options.config = args.next().map(PathBuf::from),
                "--demo" => options.demo = true,
                "--vs-cpu" => options.vs_cpu = true,
                other => log::warn!("Ignoring unknown argument: {}", other),
            }
        }
        options
    }

    fn settings(&self) -> Settings {
        let mut settings = Settings::load(self.config.as_deref());
        if self.demo {
            settings.left = Controller::Autopilot;
            settings.right = Controller::Autopilot;
        } else if self.vs_cpu {
            settings.right = Controller::Autopilot;
        }
        settings
    }
}

/// Opens at the default field size; `main` resizes once settings are loaded
fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: FIELD_WIDTH,
        window_height: FIELD_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Sample the four paddle controls
fn read_keys() -> KeyState {
    KeyState {
        left_up: is_key_down(KeyCode::W),
        left_down: is_key_down(KeyCode::S),
        right_up: is_key_down(KeyCode::Up),
        right_down: is_key_down(KeyCode::Down),
    }
}

fn to_color(c: renderer::Color) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Paint a scene, scaled to fit the window
fn draw_scene(scene: &Scene) {
    clear_background(to_color(scene.background));

    let scale = (screen_width() / scene.width).min(screen_height() / scene.height);

    for shape in &scene.shapes {
        match shape {
            renderer::Shape::Rect { pos, size, color } => draw_rectangle(
                pos.x * scale,
                pos.y * scale,
                size.x * scale,
                size.y * scale,
                to_color(*color),
            ),
            renderer::Shape::Circle {
                center,
                radius,
                color,
            } => draw_circle(
                center.x * scale,
                center.y * scale,
                radius * scale,
                to_color(*color),
            ),
            renderer::Shape::Text {
                text,
                pos,
                size,
                anchor,
                color,
            } => {
                let font_size = (size * scale).round() as u16;
                let dims = measure_text(text, None, font_size, 1.0);
                let x = pos.x * scale - dims.width / 2.0;
                let y = match anchor {
                    TextAnchor::TopCenter => pos.y * scale + dims.offset_y,
                    TextAnchor::Center => pos.y * scale - dims.height / 2.0 + dims.offset_y,
                };
                draw_text(text, x, y, font_size as f32, to_color(*color));
            }
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Options::parse().settings();
    log::info!("Pong starting...");
    log::info!(
        "Field {}x{}, {} Hz, first to {} (left: {}, right: {})",
        settings.field_width,
        settings.field_height,
        settings.tick_rate,
        settings.win_score,
        settings.left.as_str(),
        settings.right.as_str()
    );

    if (settings.field_width, settings.field_height) != (FIELD_WIDTH, FIELD_HEIGHT) {
        request_new_screen_size(settings.field_width as f32, settings.field_height as f32);
    }

    let mut session = Session::new(&settings);
    prevent_quit();

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            session.request_quit();
        }
        if !session.is_running() {
            break;
        }

        // Input is ignored while a win is being announced
        let keys = if session.is_stalled() {
            KeyState::default()
        } else {
            read_keys()
        };
        session.update(get_frame_time(), &keys);

        draw_scene(&renderer::build_scene(session.state()));
        next_frame().await;
    }

    log::info!(
        "Final score {} - {}",
        session.state().left_score,
        session.state().right_score
    );
}
