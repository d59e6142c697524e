//! Core domain + application logic for the homework status bot.
//!
//! This crate is intentionally framework-agnostic. The Practicum API and
//! Telegram live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod poller;
pub mod ports;
pub mod response;

pub use errors::{Error, Result};
