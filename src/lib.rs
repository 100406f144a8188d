//! # Invoicing API Library
//!
//! This library provides the core functionality for the invoicing service:
//! form decoding, validation, totals computation, persistence and the HTTP
//! surface around them.

pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod money;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
pub mod units;
pub mod validation;
pub use migration;
