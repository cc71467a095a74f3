//! Core domain logic for zabbixctl
//!
//! This module contains the trigger query and acknowledge logic. The only
//! external interaction, talking to the monitoring backend, is abstracted
//! through the [`ports::TriggerSource`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TriggerOptions`, `SearchQuery`, `TriggerQuery`, `Trigger`)
//! - `services/` - Parsing, query building, matching and the acknowledge workflow
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Errors surfaced by the workflow

pub mod error;
pub mod models;
pub mod ports;
pub mod services;
