// SPDX-License-Identifier: MPL-2.0
//! Headless front end: turns command-line flags into session messages.
//!
//! Operations run in a fixed order regardless of flag order: crop,
//! grayscale, rotations, resize, undo, redo, then save.

use crate::config;
use crate::domain::editing::{CanvasRect, CanvasSize};
use crate::editor::{Event, Message, Session, SessionState};
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
crop_lens - crop, grayscale, rotate and resize an image

USAGE:
    crop_lens [OPTIONS] <INPUT>

OPTIONS:
    --canvas WxH          Canvas the crop coordinates refer to [default: from config]
    --crop X1,Y1,X2,Y2    Crop selection dragged on the canvas
    --grayscale           Convert the crop to grayscale
    --rotate              Rotate the crop 90 degrees clockwise (repeatable)
    --resize PERCENT      Resize the crop (10-200)
    --undo N              Undo N steps after editing
    --redo N              Redo N steps after undoing
    --output PATH         Save the result (png, jpg or jpeg)
    --config-dir DIR      Read settings.toml from DIR
    -h, --help            Print this help
";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub input: PathBuf,
    pub canvas: Option<CanvasSize>,
    pub crop: Option<CanvasRect>,
    pub grayscale: bool,
    pub rotations: u32,
    pub resize: Option<f32>,
    pub undo: u32,
    pub redo: u32,
    pub output: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
}

impl Args {
    /// Parses arguments, program name excluded.
    ///
    /// Returns `Ok(None)` when help was requested.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] for malformed, missing, or unknown arguments.
    pub fn parse_from(raw: Vec<OsString>) -> Result<Option<Self>> {
        let mut args = pico_args::Arguments::from_vec(raw);

        if args.contains(["-h", "--help"]) {
            return Ok(None);
        }

        let canvas = args.opt_value_from_str("--canvas")?;
        let crop = args.opt_value_from_str("--crop")?;
        let grayscale = args.contains("--grayscale");
        let mut rotations = 0;
        while args.contains("--rotate") {
            rotations += 1;
        }
        let resize = args.opt_value_from_str("--resize")?;
        let undo = args.opt_value_from_str("--undo")?.unwrap_or(0);
        let redo = args.opt_value_from_str("--redo")?.unwrap_or(0);
        let output = args.opt_value_from_os_str("--output", parse_path)?;
        let config_dir = args.opt_value_from_os_str("--config-dir", parse_path)?;
        let input = args.free_from_os_str(parse_path)?;

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Error::Usage(format!(
                "unexpected arguments: {}",
                rest.iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
            )));
        }

        Ok(Some(Self {
            input,
            canvas,
            crop,
            grayscale,
            rotations,
            resize,
            undo,
            redo,
            output,
            config_dir,
        }))
    }

    /// The session messages these arguments stand for, in application order.
    #[must_use]
    pub fn messages(&self, canvas: CanvasSize) -> Vec<Message> {
        let mut messages = vec![Message::Load(self.input.clone())];
        if let Some(selection) = self.crop {
            messages.push(Message::Crop { selection, canvas });
        }
        if self.grayscale {
            messages.push(Message::Grayscale);
        }
        messages.extend((0..self.rotations).map(|_| Message::Rotate90));
        if let Some(percent) = self.resize {
            messages.push(Message::Resize(percent));
        }
        messages.extend((0..self.undo).map(|_| Message::Undo));
        messages.extend((0..self.redo).map(|_| Message::Redo));
        if let Some(output) = &self.output {
            messages.push(Message::Save(output.clone()));
        }
        messages
    }
}

fn parse_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, &'static str> {
    Ok(PathBuf::from(value))
}

/// Runs the edit described by `args` and returns the saved path, if any.
///
/// # Errors
///
/// Stops at the first rejected message and returns its error.
pub fn run(args: &Args) -> Result<Option<PathBuf>> {
    let (config, warning) = config::load_with_override(args.config_dir.clone());
    if let Some(key) = warning {
        log::warn!("Config fallback: {}", key);
    }

    let canvas = args.canvas.unwrap_or_else(|| config.display.canvas());
    let mut session = Session::new(config.export.settings());
    let mut saved = None;

    for message in args.messages(canvas) {
        match session.update(message) {
            Event::Rejected(err) => return Err(err),
            Event::Saved(path) => saved = Some(path),
            Event::Committed(_) | Event::Restored(_) => {}
        }
    }

    match session.state() {
        SessionState::Cropped => {
            if let Some(working) = session.current()?.working_image() {
                log::info!("Working image {}x{}", working.width(), working.height());
            }
        }
        state => log::info!("Session ended in {:?} state", state),
    }
    Ok(saved)
}
