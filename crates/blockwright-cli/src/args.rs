use std::path::PathBuf;

use blockwright_core::constants::{DEFAULT_PITCH_DEG, DEFAULT_YAW_DEG};

use crate::error::CliError;

pub const USAGE: &str = "\
Usage:
  blockwright info <project.json>
  blockwright render <project.json> --output <out.svg> [OPTIONS]

Render options:
  --poly <id>      Render one polyhedron (default: all, side by side)
  --yaw <deg>      View yaw in degrees (default: 45)
  --pitch <deg>    View pitch in degrees (default: 30)
  --zoom <z>       Zoom factor (default: 1)
  --width <px>     Image width (default: 800)
  --height <px>    Image height (default: 600)";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Info { input: PathBuf },
    Render(RenderArgs),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub poly: Option<String>,
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub width: u32,
    pub height: u32,
}

/// Parse arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut iter = args.iter();
    let Some(command) = iter.next() else {
        return Err(CliError::Usage("missing command".into()));
    };

    match command.as_str() {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "info" => {
            let input = iter
                .next()
                .ok_or_else(|| CliError::Usage("info needs a project file".into()))?;
            if let Some(extra) = iter.next() {
                return Err(CliError::Usage(format!("unexpected argument: {extra}")));
            }
            Ok(Command::Info { input: PathBuf::from(input) })
        }
        "render" => parse_render(&mut iter).map(Command::Render),
        other => Err(CliError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_render<'a>(iter: &mut impl Iterator<Item = &'a String>) -> Result<RenderArgs, CliError> {
    let mut input = None;
    let mut output = None;
    let mut poly = None;
    let mut yaw = DEFAULT_YAW_DEG;
    let mut pitch = DEFAULT_PITCH_DEG;
    let mut zoom = 1.0f32;
    let mut width = 800u32;
    let mut height = 600u32;

    while let Some(arg) = iter.next() {
        let mut value = |flag: &'static str| {
            iter.next()
                .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--output" | "-o" => output = Some(PathBuf::from(value("--output")?)),
            "--poly" => poly = Some(value("--poly")?.clone()),
            "--yaw" => yaw = parse_number("--yaw", value("--yaw")?)?,
            "--pitch" => pitch = parse_number("--pitch", value("--pitch")?)?,
            "--zoom" => zoom = parse_number("--zoom", value("--zoom")?)?,
            "--width" => width = parse_number("--width", value("--width")?)?,
            "--height" => height = parse_number("--height", value("--height")?)?,
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option: {flag}")));
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(CliError::Usage(format!("unexpected argument: {extra}"))),
        }
    }

    if !(zoom > 0.0) {
        return Err(CliError::BadValue { flag: "--zoom", value: zoom.to_string() });
    }
    if width == 0 || height == 0 {
        return Err(CliError::BadValue {
            flag: "--width/--height",
            value: format!("{width}x{height}"),
        });
    }

    Ok(RenderArgs {
        input: input.ok_or_else(|| CliError::Usage("render needs a project file".into()))?,
        output: output.ok_or_else(|| CliError::Usage("render needs --output".into()))?,
        poly,
        yaw,
        pitch,
        zoom,
        width,
        height,
    })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::BadValue {
        flag,
        value: value.to_string(),
    })
}
