//! Control demo application
//!
//! Drives a single control through its geometry operations with a painter
//! that logs what it would draw.
//!
//! Usage: `control_demo [defaults.toml|defaults.ron]`

use std::cell::Cell;
use std::rc::Rc;

use direct_ui::foundation::logging;
use direct_ui::prelude::*;

/// Painter that describes each draw through the log
#[derive(Default)]
struct LogPainter {
    frames: Cell<u32>,
}

impl Painter for LogPainter {
    fn paint(&self, control: &Control) {
        let frame = self.frames.get() + 1;
        self.frames.set(frame);

        let bounds = control.rectangle();
        if !control.visible() || control.is_empty() {
            log::info!("[{frame}] '{}' skipped (hidden or empty at {:?})", control.name(), bounds);
            return;
        }

        log::info!(
            "[{frame}] '{}' bounds=({}, {}, {}, {}) right={} bottom={}",
            control.name(),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            control.right(),
            control.bottom(),
        );

        if !control.text().is_empty() {
            let font = control.font();
            let text_size = Size::new(
                (control.text().chars().count() as f32 * font.size * 0.6).round() as i32,
                font.size.round() as i32,
            );
            let text_rect = control.text_align().align(bounds, text_size);
            log::info!(
                "      text {:?} in {} {}pt {:?} at {:?}",
                control.text(),
                font.family,
                font.size,
                font.style,
                text_rect,
            );
        }

        if let Some(image) = control.image() {
            let image_size = Size::new(
                i32::try_from(image.width()).unwrap_or(i32::MAX),
                i32::try_from(image.height()).unwrap_or(i32::MAX),
            );
            log::info!(
                "      image {}x{} at {:?}",
                image.width(),
                image.height(),
                control.image_align().align(bounds, image_size),
            );
        }

        if control.background_image().is_some() {
            log::info!("      background {:?}", control.background_image_layout());
        }
    }
}

/// Demo errors
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Control(#[from] ControlError),
}

fn load_defaults() -> Result<ControlDefaults, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading control defaults from {}", path);
            ControlDefaults::load_from_file(&path)
        }
        None => Ok(ControlDefaults::default()),
    }
}

fn run() -> Result<(), DemoError> {
    let defaults = load_defaults()?;

    let mut control = Control::with_defaults(&defaults);
    control.set_name("demo_button");
    control.set_text("Click me");
    control.set_image(Some(Image::solid_color(16, 16, [40, 120, 220, 255])));
    control.set_background_image(Some(Image::solid_color(4, 4, [230, 230, 230, 255])));

    // Repaint requests need a painter
    if let Err(err) = control.paint() {
        log::warn!("Expected failure before attaching: {}", err);
    }

    let painter = Rc::new(LogPainter::default());
    control.set_painter(Some(painter.clone()))?;

    control.set_bounds(0, 0, 100, 50);
    control.inflate(5, 5);
    control.offset((20, 10));
    control.set_location((20, 99));
    control.set_size((120, 40));
    control.intersect(Rect::new(0, 0, 100, 120));

    log::info!(
        "contains(30, 110) = {}, intersects (200, 200, 10, 10) = {}",
        control.contains(30, 110),
        control.intersects_with(Rect::new(200, 200, 10, 10)),
    );

    control.paint()?;

    log::info!("Painted {} frames", painter.frames.get());
    Ok(())
}

fn main() {
    logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting control demo");

    if let Err(err) = run() {
        log::error!("Demo failed: {}", err);
        std::process::exit(1);
    }
}
