//! Line-oriented command session
//!
//! Each input line is one [`Command`]. Control changes re-run the full
//! pipeline and print its report. Bad input prints an error line and the
//! session keeps going.
//!
//! ```text
//! > set k 0.2
//! C0 = 10, k = 0.2 | start 10.0000, end 0.0000 (0.00% remaining), half-life 3.47
//! > next 10
//! t = 10.1010, C = 1.3263
//! > quit
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use super::DecayApp;
use crate::analysis::CurveSummary;
use crate::controls::ControlId;
use crate::error::{PhotolysisError, PhotolysisResult};

pub const PROMPT: &str = "> ";

pub const HELP: &str = "\
Commands:
  set <c0|k> <value>   set a control (out-of-range values are clamped)
  inc <c0|k>           raise a control by one step
  dec <c0|k>           lower a control by one step
  defaults             restore C0 = 10 and k = 0.05
  show                 print the controls and the current curve
  next [n]             move the playback cursor n samples forward (default 1)
  prev                 move the playback cursor one sample back
  rewind               move the playback cursor to t = 0
  help                 print this list
  quit                 leave the session";

/// One parsed input line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Set(ControlId, f64),
    Increment(ControlId),
    Decrement(ControlId),
    Defaults,
    Show,
    Next(usize),
    Prev,
    Rewind,
    Help,
    Quit,
}

fn control_arg(command: &str, arg: Option<&str>) -> PhotolysisResult<ControlId> {
    arg.ok_or_else(|| {
        PhotolysisError::invalid_parameter(command, "expected a control name (c0 or k)")
    })?
    .parse()
}

impl FromStr for Command {
    type Err = PhotolysisError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(PhotolysisError::UnknownCommand(String::new()));
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "set" => {
                let id = control_arg("set", words.next())?;
                let raw = words.next().ok_or_else(|| {
                    PhotolysisError::invalid_parameter("set", "expected a value")
                })?;
                let value = raw.parse::<f64>().map_err(|_| {
                    PhotolysisError::invalid_parameter(id.to_string(), format!("'{raw}' is not a number"))
                })?;
                Command::Set(id, value)
            }
            "inc" | "+" => Command::Increment(control_arg("inc", words.next())?),
            "dec" | "-" => Command::Decrement(control_arg("dec", words.next())?),
            "defaults" | "reset" => Command::Defaults,
            "show" => Command::Show,
            "next" | "n" => {
                let steps = match words.next() {
                    None => 1,
                    Some(raw) => raw.parse::<usize>().map_err(|_| {
                        PhotolysisError::invalid_parameter("next", format!("'{raw}' is not a sample count"))
                    })?,
                };
                Command::Next(steps)
            }
            "prev" | "p" => Command::Prev,
            "rewind" => Command::Rewind,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(PhotolysisError::UnknownCommand(head.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(PhotolysisError::invalid_parameter(
                head,
                format!("unexpected argument '{extra}'"),
            ));
        }

        Ok(command)
    }
}

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOutcome {
    pub commands: usize,
    pub errors: usize,
    pub pipeline_runs: usize,
}

fn write_cursor<W: Write>(app: &DecayApp, output: &mut W) -> PhotolysisResult<()> {
    if let Some((t, c)) = app.current_sample() {
        let suffix = if app.playback().is_complete() {
            " (end of curve)"
        } else {
            ""
        };
        writeln!(output, "t = {t:.4}, C = {c:.4}{suffix}")?;
    }
    Ok(())
}

/// Apply one command; `Ok(false)` ends the session
fn execute<W: Write>(
    app: &mut DecayApp,
    command: Command,
    output: &mut W,
    outcome: &mut SessionOutcome,
) -> PhotolysisResult<bool> {
    let report = match command {
        Command::Set(id, value) => Some(app.set(id, value)?),
        Command::Increment(id) => Some(app.increment(id)?),
        Command::Decrement(id) => Some(app.decrement(id)?),
        Command::Defaults => Some(app.reset()?),
        Command::Show => {
            let panel = app.panel();
            writeln!(output, "{}", panel.control(ControlId::InitialConc))?;
            writeln!(output, "{}", panel.control(ControlId::RateConstant))?;
            writeln!(output, "{}", CurveSummary::of_decay(app.curve()))?;
            None
        }
        Command::Next(steps) => {
            app.playback_mut().advance(steps);
            write_cursor(app, output)?;
            None
        }
        Command::Prev => {
            app.playback_mut().step_back();
            write_cursor(app, output)?;
            None
        }
        Command::Rewind => {
            app.playback_mut().rewind();
            write_cursor(app, output)?;
            None
        }
        Command::Help => {
            writeln!(output, "{HELP}")?;
            None
        }
        Command::Quit => return Ok(false),
    };

    if let Some(report) = report {
        outcome.pipeline_runs += 1;
        writeln!(output, "{report}")?;
    }
    Ok(true)
}

/// Drive `app` from `input` until `quit` or end of input
///
/// The pipeline runs once before the first prompt. Parse and pipeline
/// errors are written to `output` as `error: ...` lines; only I/O failures
/// on `input`/`output` end the session with an error.
pub fn run_session<R: BufRead, W: Write>(
    app: &mut DecayApp,
    input: R,
    mut output: W,
) -> PhotolysisResult<SessionOutcome> {
    let mut outcome = SessionOutcome::default();

    let initial = app.run_pipeline()?;
    outcome.pipeline_runs += 1;
    writeln!(output, "{initial}")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }

        outcome.commands += 1;

        let keep_going = match trimmed
            .parse::<Command>()
            .and_then(|command| execute(app, command, &mut output, &mut outcome))
        {
            Ok(keep_going) => keep_going,
            Err(PhotolysisError::Io(e)) => return Err(PhotolysisError::Io(e)),
            Err(e) => {
                log::debug!("command '{trimmed}' failed: {e}");
                outcome.errors += 1;
                writeln!(output, "error: {e}")?;
                true
            }
        };

        if !keep_going {
            break;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(outcome)
}

// =================================================================================================
// Tests
// =================================================================================================
