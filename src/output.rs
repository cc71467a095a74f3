//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as a
//! column-aligned table or machine-parseable JSON.

use std::io::{self, Write};

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::core::models::Trigger;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Triggers that passed the search filter, in backend order
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct TriggerTable {
    /// Matched triggers
    pub triggers: Vec<Trigger>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl TriggerTable {
    /// Append a matched trigger
    pub fn push(&mut self, trigger: &Trigger) {
        self.triggers.push(trigger.clone());
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    /// Whether no trigger matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    /// Render the table and flush the writer
    pub fn render<W: Write>(&self, mode: OutputMode, out: &mut W) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.render_human(out)?,
            OutputMode::Json => self.render_json(out)?,
        }
        out.flush()
    }

    fn render_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.triggers.is_empty() {
            return Ok(());
        }

        let mut builder = Builder::default();
        for trigger in &self.triggers {
            builder.push_record(trigger.columns());
        }

        let mut table = builder.build();
        table.with(Style::blank());
        writeln!(out, "{table}")
    }

    fn render_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
