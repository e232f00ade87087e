//! Sea Lines simulator for desktop.
//!
//! Hosts the rendering core in an `embedded-graphics-simulator` window and
//! plays the roles the core leaves to its platform: local time, minute ticks,
//! the persistent theme store and the configuration channel.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod cli;
mod clock;
mod config;
mod message;
mod store;

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info, warn};
use sea_lines_common::{ConfigMessage, DisplayCanvas, Face, FaceEvent};

use crate::cli::Cli;
use crate::clock::Ticker;
use crate::config::{FRAME_TIME, WINDOW_TITLE};
use crate::message::{PRESETS, parse_message};
use crate::store::JsonThemeStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Allow RUST_LOG to override the -d level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let store_path = match &cli.store {
        Some(path) => path.clone(),
        None => JsonThemeStore::default_path()?,
    };
    let mut store = JsonThemeStore::open(&store_path)
        .with_context(|| format!("failed to open theme store {}", store_path.display()))?;
    let mut face = Face::load(&store, cli.variant.into());
    info!("theme store {}", store.path().display());

    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(cli.width, cli.height));
    let bounds = display.bounding_box();
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();

    if let Some(path) = &cli.screenshot {
        let clock = clock::wall_clock(&clock::now(), cli.fast_forward);
        face.render(&mut DisplayCanvas::new(&mut display), &bounds, &clock);
        display
            .to_rgb_output_image(&output_settings)
            .save_png(path)
            .with_context(|| format!("failed to write screenshot {}", path.display()))?;
        info!("saved {}x{} frame at {clock} to {}", cli.width, cli.height, path.display());
        return Ok(());
    }

    let messages = spawn_config_reader()?;
    let mut window = Window::new(WINDOW_TITLE, &output_settings);
    window.update(&display);
    let mut ticker = Ticker::new(cli.fast_forward);
    let mut next_preset = 0usize;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::C => {
                            configure(&mut face, &mut store, PRESETS[next_preset]);
                            next_preset = (next_preset + 1) % PRESETS.len();
                        }
                        Keycode::V => face.set_variant(face.variant().next()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // Companion UI messages
        while let Ok(message) = messages.try_recv() {
            configure(&mut face, &mut store, message);
        }

        let now = clock::now();
        if ticker.poll(&now) {
            face.handle(FaceEvent::Tick, &mut store)?;
        }

        if face.take_repaint() {
            let clock = clock::wall_clock(&now, cli.fast_forward);
            face.render(&mut DisplayCanvas::new(&mut display), &bounds, &clock);
            debug!("painted {clock}");
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}

/// Apply a configuration message; a failed save is logged, the new colors
/// are shown regardless.
fn configure(
    face: &mut Face,
    store: &mut JsonThemeStore,
    message: ConfigMessage,
) {
    if let Err(err) = face.handle(FaceEvent::Configure(message), store) {
        warn!("theme not saved: {err}");
    }
}

/// Read configuration messages from stdin, one JSON object per line, and hand
/// them to the render loop.
fn spawn_config_reader() -> Result<Receiver<ConfigMessage>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("config-stdin".into())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_message(&line) {
                    Ok(message) => {
                        if tx.send(message).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!("ignoring configuration line: {err}"),
                }
            }
            debug!("configuration input closed");
        })
        .context("failed to start configuration reader")?;
    Ok(rx)
}
