//! Line-based interaction scripts for the headless host.
//!
//! Each non-empty line is one command; `#` starts a comment.
//!
//! ```text
//! mode rectangle
//! click 0 0
//! move 0.5 0.5
//! click 1 1
//! dblclick
//! ```

use crate::draw::{Renderer, ShapeType};
use crate::geometry::LatLng;
use crate::input::{CommitOutcome, DrawingMode, InputState, ParseModeError, PointerEvent};
use crate::notification::Notifier;
use log::debug;
use thiserror::Error;

/// Feature addressed by a `remove` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureRef {
    Id(String),
    /// Most recently committed feature
    Last,
}

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// `mode <name>`: set the drawing mode directly
    Mode(DrawingMode),
    /// `tool <name>`: press a toolbar button (toggles, refuses at limit)
    Tool(ShapeType),
    /// `click`, `move`, `dblclick`, `cancel`
    Pointer(PointerEvent),
    /// `remove <id>` or `remove last`
    Remove(FeatureRef),
    /// `clear`
    Clear,
}

/// Errors raised while parsing a script, tagged with the 1-based line number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArguments {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: latitude {lat} is outside -90..=90")]
    LatitudeOutOfRange { line: usize, lat: f64 },

    #[error("line {line}: {source}")]
    InvalidMode {
        line: usize,
        #[source]
        source: ParseModeError,
    },

    #[error("line {line}: 'tool' needs a shape, not 'none'")]
    NoShapeTool { line: usize },
}

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = raw.split('#').next().unwrap_or("").trim();
            (!text.is_empty()).then(|| parse_line(index + 1, text))
        })
        .collect()
}

fn parse_line(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let mut words = text.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let wrong = |expected: &'static str| ScriptError::WrongArguments {
        line,
        command: command.to_string(),
        expected,
    };

    match command {
        "mode" | "tool" => {
            let [name] = args[..] else {
                return Err(wrong("a mode name"));
            };
            let mode: DrawingMode = name
                .parse()
                .map_err(|source| ScriptError::InvalidMode { line, source })?;
            if command == "mode" {
                return Ok(ScriptCommand::Mode(mode));
            }
            mode.shape_type()
                .map(ScriptCommand::Tool)
                .ok_or(ScriptError::NoShapeTool { line })
        }
        "click" | "move" => {
            let [lat, lng] = args[..] else {
                return Err(wrong("<lat> <lng>"));
            };
            let point = parse_point(line, lat, lng)?;
            Ok(ScriptCommand::Pointer(if command == "click" {
                PointerEvent::Click(point)
            } else {
                PointerEvent::Move(point)
            }))
        }
        "dblclick" => match args[..] {
            [] => Ok(ScriptCommand::Pointer(PointerEvent::DoubleClick(
                LatLng::default(),
            ))),
            [lat, lng] => Ok(ScriptCommand::Pointer(PointerEvent::DoubleClick(
                parse_point(line, lat, lng)?,
            ))),
            _ => Err(wrong("no arguments or <lat> <lng>")),
        },
        "cancel" | "clear" => {
            if !args.is_empty() {
                return Err(wrong("no arguments"));
            }
            Ok(if command == "cancel" {
                ScriptCommand::Pointer(PointerEvent::Cancel)
            } else {
                ScriptCommand::Clear
            })
        }
        "remove" => match args[..] {
            ["last"] => Ok(ScriptCommand::Remove(FeatureRef::Last)),
            [id] => Ok(ScriptCommand::Remove(FeatureRef::Id(id.to_string()))),
            _ => Err(wrong("a feature id or 'last'")),
        },
        _ => Err(ScriptError::UnknownCommand {
            line,
            command: command.to_string(),
        }),
    }
}

fn parse_point(line: usize, lat: &str, lng: &str) -> Result<LatLng, ScriptError> {
    let number = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ScriptError::InvalidNumber {
                line,
                value: value.to_string(),
            })
    };
    let lat = number(lat)?;
    let lng = number(lng)?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(ScriptError::LatitudeOutOfRange { line, lat });
    }
    Ok(LatLng::new(lat, lng))
}

/// Replays commands against an input state, in order.
///
/// Returns the outcome of every finished shape.
pub fn run_script<R: Renderer, N: Notifier>(
    state: &mut InputState<R, N>,
    commands: &[ScriptCommand],
) -> Vec<CommitOutcome> {
    let mut outcomes = Vec::new();
    for command in commands {
        debug!("Replaying {:?}", command);
        match command {
            ScriptCommand::Mode(mode) => state.set_mode(*mode),
            ScriptCommand::Tool(shape_type) => {
                state.press_tool(*shape_type);
            }
            ScriptCommand::Pointer(event) => outcomes.extend(state.handle_event(*event)),
            ScriptCommand::Remove(FeatureRef::Id(id)) => {
                state.remove_feature(id);
            }
            ScriptCommand::Remove(FeatureRef::Last) => {
                if let Some(id) = state.store().features().last().map(|f| f.id.clone()) {
                    state.remove_feature(&id);
                }
            }
            ScriptCommand::Clear => state.clear_all(),
        }
    }
    outcomes
}
