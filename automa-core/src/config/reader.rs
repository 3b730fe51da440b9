//! Line-oriented config reader
//!
//! Builds a `Dfa` from the five-section text format. Tokens are taken
//! verbatim: trailing line terminators are stripped before splitting, but
//! no other trimming is performed. Empty fields between commas are skipped,
//! and an empty accepting-states line yields an empty accepting set.
//!
//! The reader does not check structural invariants; an automaton that
//! references an unknown state or symbol parses silently and shows up as an
//! undefined transition at run time. See `machine::validate` for the
//! opt-in invariant pass.

use tracing::debug;

use super::error::ConfigError;
use super::section::Section;
use crate::machine::dfa::{Dfa, Transition};

/// Parse a configuration source into a `Dfa`
pub fn parse(source: &str) -> Result<Dfa, ConfigError> {
    let mut lines = source.lines();

    let states = parse_token_section(&mut lines, Section::States)?;
    let alphabet = parse_token_section(&mut lines, Section::Alphabet)?;

    // the initial-state line is taken verbatim, commas included
    let initial_state = lines
        .next()
        .ok_or(ConfigError::MissingSection {
            section: Section::InitialState,
        })?
        .to_string();

    let accepting_line = lines.next().ok_or(ConfigError::MissingSection {
        section: Section::AcceptingStates,
    })?;
    let accepting_states = split_fields(accepting_line)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut transitions = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_number = Section::Transitions.line_number() + offset;
        transitions.push(parse_transition(line, line_number)?);
    }

    debug!(
        target: "automa::parser",
        states = states.len(),
        alphabet = alphabet.len(),
        transitions = transitions.len(),
        "configuration parsed"
    );

    Ok(Dfa {
        states,
        alphabet,
        transitions,
        initial_state,
        accepting_states,
    })
}

/// Parse a required section line into at least one token
fn parse_token_section<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    section: Section,
) -> Result<Vec<String>, ConfigError> {
    let line = lines
        .next()
        .ok_or(ConfigError::MissingSection { section })?;
    let tokens = split_fields(line);
    if tokens.is_empty() {
        return Err(ConfigError::EmptySection { section });
    }
    Ok(tokens.into_iter().map(str::to_string).collect())
}

/// Parse one `from,symbol,to` transition line
///
/// Fewer than three fields is fatal; fields beyond the third are ignored.
fn parse_transition(line: &str, line_number: usize) -> Result<Transition, ConfigError> {
    let fields = split_fields(line);
    match fields.as_slice() {
        [from, symbol, to, ..] => Ok(Transition::new(*from, *symbol, *to)),
        _ => Err(ConfigError::MalformedTransition {
            line: line_number,
            fields: fields.len(),
        }),
    }
}

/// Split a line on commas, skipping empty fields
fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').filter(|t| !t.is_empty()).collect()
}
