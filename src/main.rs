// src/main.rs

//! Interactive demo: draws a scene into a `ConsoleBuffer`, presents it on the
//! terminal, and applies transforms on key presses.
//!
//! Keys: `w`/`a`/`s`/`d` scroll, `h`/`v` flip, `r` rotate the centred
//! square, `q` quits.

use console_buffer::{
    config::{Config, CONFIG},
    console::{present, SystemConsole, TtyConsole},
    Cell, Color, ConsoleBuffer, Direction, NamedColor,
};

use anyhow::Context;
use log::{debug, info, warn};

/// Builds the buffer, sized to the terminal when the config asks for it.
fn create_buffer(config: &Config, console: &TtyConsole) -> anyhow::Result<ConsoleBuffer> {
    let mut config = config.clone();
    if config.appearance.use_terminal_size {
        match console.size() {
            Ok((cols, rows)) => {
                config.appearance.columns = cols;
                config.appearance.rows = rows;
            }
            Err(e) => warn!("{:#}. Using configured size.", e),
        }
    }
    ConsoleBuffer::from_config(&config).context("Failed to create console buffer")
}

fn draw_scene(buffer: &mut ConsoleBuffer) {
    let width = buffer.width() as i32;
    let height = buffer.height() as i32;

    buffer.draw_box_complex(
        0,
        0,
        width,
        height,
        Cell::from_char('|'),
        Cell::from_char('-'),
        Cell::new('+', Color::Named(NamedColor::Yellow), Color::Default),
    );

    let title = " console-buffer ";
    let title_x = (width - title.len() as i32) / 2;
    buffer.draw_text_with_color(title_x, 0, title, Color::Named(NamedColor::Cyan));

    let side = (width.min(height) / 2).max(1);
    let sq_x = (width - side) / 2;
    let sq_y = (height - side) / 2;
    buffer.draw_rectangle(
        sq_x,
        sq_y,
        side,
        side,
        Cell::new('.', Color::Default, Color::Named(NamedColor::Blue)),
    );
    buffer.draw_line(
        sq_x,
        sq_y,
        side,
        Direction::Horizontal,
        Cell::new('#', Color::Named(NamedColor::Red), Color::Default),
    );
    buffer.draw_line(
        sq_x,
        sq_y,
        side,
        Direction::Vertical,
        Cell::new('#', Color::Named(NamedColor::Green), Color::Default),
    );
    buffer.draw_text(
        2,
        height - 2,
        "wasd: scroll  h/v: flip  r: rotate  q: quit",
    );
}

/// Main entry point for the demo.
fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    info!("Starting console-buffer demo...");
    let config: &Config = &CONFIG;
    debug!("Configuration: {:?}", config);

    let mut console = TtyConsole::new().context("Failed to initialize TtyConsole")?;
    let mut buffer = create_buffer(config, &console)?;
    info!(
        "Buffer initialized: {}x{}",
        buffer.width(),
        buffer.height()
    );
    draw_scene(&mut buffer);

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;
    let side = (width.min(height) / 2).max(1);

    loop {
        present(&buffer, &mut console)?;
        let key = console.read_key()?;
        match key {
            b'q' => break,
            b'w' => buffer.scroll(0, -1),
            b's' => buffer.scroll(0, 1),
            b'a' => buffer.scroll(-1, 0),
            b'd' => buffer.scroll(1, 0),
            b'h' => buffer.flip(true, false),
            b'v' => buffer.flip(false, true),
            b'r' => buffer.rotate((width - side) / 2, (height - side) / 2, side, true),
            other => debug!("Ignoring key {:#04x}", other),
        }
    }

    info!("Exiting console-buffer demo.");
    Ok(())
}
