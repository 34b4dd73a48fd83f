//! Core library for the `nowcast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The WeatherAPI.com current-conditions client
//! - Payload models and text rendering
//!
//! It is used by `nowcast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;

pub use client::WeatherClient;
pub use config::Config;
pub use error::FetchError;
pub use model::{Payload, WeatherReport};
pub use render::{render, render_failure};
