//! Command implementations.

mod watch;

pub use watch::watch;
