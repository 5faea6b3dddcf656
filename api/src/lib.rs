//! Typed client for the SlideChat HTTP API.
//!
//! The server owns persistence, authorization and PDF processing; this crate
//! only describes the wire format and issues requests.

mod client;
mod config;
mod error;
mod types;

pub use client::{HttpApi, SlideChatApi};
pub use config::ApiConfig;
pub use error::ApiError;
pub use types::*;
