//! Process controller: listener setup, signal handling, accept loop,
//! per-connection serving.

pub mod connection;
pub mod listener;
pub mod run_loop;
pub mod signal;
