//! Core library for Teller: banking service client, configuration,
//! display formatting, and logging setup.

pub mod api;
pub mod config;
pub mod format;
pub mod logging;
