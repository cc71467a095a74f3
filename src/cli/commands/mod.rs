//! Command implementations

mod init;
mod triggers;

pub use init::init;
pub use triggers::triggers;
