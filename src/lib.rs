//! Tweet Gemirator - turns a free-text description into a short social post
//!
//! A stateless HTTP service forwards each description to Gemini, and a client
//! session keeps the current post plus a short history of recent generations.

pub mod ai;
pub mod client;
pub mod error;
pub mod models;
pub mod prompts;
pub mod server;
pub mod service;

pub use error::{Error, Result};
