//! Ring Drop entry point
//!
//! Loads a scene (or the stock one), then prints one text frame per tick
//! until the frame limit is reached or stdout goes away.
//!
//! Usage: `ring-drop [scene.json]`

use std::io::{self, Write};
use std::ops::ControlFlow;
use std::process::ExitCode;

use ring_drop::frame::{CLEAR_SCREEN, frame_text};
use ring_drop::{Driver, SceneConfig};

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("ring-drop: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ring_drop::Result<()> {
    let scene = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(path)?,
        None => {
            log::info!("Using default scene");
            SceneConfig::default()
        }
    };
    let mut driver = Driver::from_scene(&scene)?;
    log::info!("Ring Drop running!");

    let stdout = io::stdout();
    let mut write_error = None;
    driver.run(scene.frames, |sim, frame| {
        let written = write_frame(&mut stdout.lock(), &frame_text(sim.snapshot()));
        if let Some(p) = sim.particles().first() {
            log::debug!("Frame {frame}: velocity {}", p.velocity);
        }
        match written {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    });

    match write_error {
        // Closed pipe (e.g. piped into `head`) is a normal way to stop
        Some(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn write_frame(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.write_all(text.as_bytes())?;
    out.flush()
}
