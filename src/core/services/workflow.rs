//! Trigger workflow - fetch, display and optionally acknowledge
//!
//! Stages run once, in order, and never loop back:
//!
//! 1. reject leftover search words (before any backend call)
//! 2. build the query and fetch triggers
//! 3. filter by pattern, render the table, collect event ids
//! 4. stop unless acknowledging something
//! 5. ask for confirmation unless disabled
//! 6. acknowledge every collected event in one call

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use colored::Colorize;
use log::{debug, warn};

use super::matcher::PatternMatcher;
use super::query_builder::build_query;
use super::search_parser::parse_search;
use crate::core::error::TriggerError;
use crate::core::models::TriggerOptions;
use crate::core::ports::TriggerSource;
use crate::output::{OutputMode, TriggerTable};

/// Streams the workflow talks to
#[derive(Debug)]
pub struct Console<R, W, E> {
    /// Interactive input, read for the confirmation answer
    pub input: R,
    /// Table output
    pub output: W,
    /// Prompt and notices
    pub diagnostics: E,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    /// The process's standard streams
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            diagnostics: io::stderr(),
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Triggers were listed, acknowledging was not requested
    Listed,
    /// Acknowledging was requested but no event matched
    NothingToAcknowledge,
    /// The operator declined the confirmation
    Declined,
    /// This many events were acknowledged
    Acknowledged(usize),
}

/// Run the trigger workflow against a source
pub fn handle_triggers<S, R, W, E>(
    source: &S,
    options: &TriggerOptions,
    mode: OutputMode,
    console: &mut Console<R, W, E>,
) -> Result<Outcome, TriggerError>
where
    S: TriggerSource + ?Sized,
    R: BufRead,
    W: Write,
    E: Write,
{
    let search = parse_search(&options.search);
    if let Some(word) = search.words.first() {
        return Err(TriggerError::Usage { word: word.clone() });
    }

    let query = build_query(options)?;
    let triggers = source.get_triggers(&query).map_err(TriggerError::Fetch)?;

    debug!("* showing triggers table");
    if search.has_pattern() {
        debug!("** searching {}", search.pattern);
    }

    let matcher = PatternMatcher::new(&search.pattern);
    let mut table = TriggerTable::default();
    let mut identifiers = Vec::new();

    for trigger in &triggers {
        if !matcher.matches(&trigger.to_string()) {
            continue;
        }

        table.push(trigger);
        if let Some(id) = trigger.event_id() {
            identifiers.push(id.to_string());
        }
    }

    table.render(mode, &mut console.output).map_err(TriggerError::Output)?;
    debug!("{} of {} triggers matched", table.len(), triggers.len());

    if !options.acknowledge {
        return Ok(Outcome::Listed);
    }
    if identifiers.is_empty() {
        return Ok(Outcome::NothingToAcknowledge);
    }

    if !options.no_confirm {
        let confirmed = confirm_acknowledge(&mut console.input, &mut console.diagnostics)
            .map_err(TriggerError::Confirm)?;
        if !confirmed {
            debug!("acknowledge declined");
            return Ok(Outcome::Declined);
        }
    }

    source.acknowledge(&identifiers).map_err(TriggerError::Acknowledge)?;

    // the events are acknowledged at this point, a lost notice must not fail the run
    if let Err(err) = writeln!(console.diagnostics, ":: {}", "Acknowledged".green()) {
        warn!("can't write acknowledge notice: {err}");
    }

    Ok(Outcome::Acknowledged(identifiers.len()))
}

/// Ask whether to proceed; an empty line, `Y` or `y` is a yes
///
/// End of input without any line is a no.
pub fn confirm_acknowledge<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> io::Result<bool> {
    write!(prompt, "\n:: Proceed with acknowledge? [Y/n]: ")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    Ok(matches!(line.trim(), "" | "Y" | "y"))
}
