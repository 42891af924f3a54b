//! appforge: scaffold Django apps into `apps/` and register them in the
//! project settings.
//!
//! The pipeline is three sequential phases over one ordered list of names:
//! collect, scaffold, register. Each phase completes over the whole list
//! before the next begins.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod scaffold;

pub use domain::{AppError, AppName, ProjectLayout};
