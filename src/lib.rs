//! nn-train: launch neural-network training runs from the command line
//!
//! This crate resolves the flags of a training invocation (mode, batch size,
//! epoch count, learning rate, worker count, compute device) into an immutable
//! [`config::RunConfiguration`] and dispatches to the selected execution mode.

pub mod cli;
pub mod config;
