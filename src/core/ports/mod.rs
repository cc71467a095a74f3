//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the core trigger logic and the
//! monitoring backend. Implementations live in the `adapters` module.

mod trigger_source;

#[cfg(test)]
pub use trigger_source::MockTriggerSource;
pub use trigger_source::TriggerSource;
