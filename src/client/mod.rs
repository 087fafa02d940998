//! Client-side session state
//!
//! Holds the current post, the bounded history and the loading/error flags,
//! and drives requests through a [`GenerationBackend`].

pub mod backend;
pub mod clipboard;
pub mod generation;
pub mod history;

pub use backend::{GenerationBackend, HttpBackend};
pub use clipboard::{ClipboardSink, MockClipboard, SystemClipboard};
pub use generation::{ClientState, GenerationClient, Phase};
pub use history::{History, HISTORY_CAPACITY};
