use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::TaggerError;

pub const FLOW_LOG_PROMPT: &str = "Enter the path to the flow log file: ";
pub const LOOKUP_PROMPT: &str = "Enter the path to the lookup file: ";

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
) -> Result<PathBuf, TaggerError> {
    write!(output, "{}", prompt).map_err(TaggerError::Prompt)?;
    output.flush().map_err(TaggerError::Prompt)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(TaggerError::Prompt)?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(TaggerError::MissingInput(what));
    }
    Ok(PathBuf::from(answer))
}

/// Asks for the flow log path and then the lookup table path.
pub fn prompt_paths<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<(PathBuf, PathBuf), TaggerError> {
    let flow_log = ask(input, output, FLOW_LOG_PROMPT, "flow log path")?;
    let lookup = ask(input, output, LOOKUP_PROMPT, "lookup table path")?;
    Ok((flow_log, lookup))
}
