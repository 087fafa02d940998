use super::backend::GenerationBackend;
use super::clipboard::ClipboardSink;
use super::history::History;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Point-in-time copy of everything the UI renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientState {
    pub phase: Phase,
    pub current: Option<String>,
    pub history: History,
    pub error: Option<String>,
}

impl ClientState {
    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn history_visible(&self) -> bool {
        self.history.is_visible()
    }
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            current: None,
            history: History::new(),
            error: None,
        }
    }
}

/// Turns user intent into generation requests and folds the answers into
/// [`ClientState`].
///
/// The state lock is never held across a request, so overlapping calls are
/// allowed: each one settles independently, in arrival order, and the last
/// successful arrival becomes `current`.
pub struct GenerationClient<B> {
    backend: B,
    clipboard: Box<dyn ClipboardSink>,
    state: Mutex<ClientState>,
    next_request: AtomicU64,
}

impl<B: GenerationBackend> GenerationClient<B> {
    pub fn new(backend: B, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            backend,
            clipboard,
            state: Mutex::new(ClientState::default()),
            next_request: AtomicU64::new(1),
        }
    }

    pub fn snapshot(&self) -> ClientState {
        self.lock().clone()
    }

    /// Submit a new description. Blank input issues no request and returns
    /// `None`; otherwise returns the phase the request settled into.
    pub async fn submit(&self, description: &str) -> Option<Phase> {
        if description.trim().is_empty() {
            debug!("Ignoring blank description");
            return None;
        }
        Some(self.request(description.to_string()).await)
    }

    /// Feed the current result back in as the description. A no-op when
    /// nothing has been generated yet.
    pub async fn regenerate(&self) -> Option<Phase> {
        let seed = self.lock().current.clone()?;
        Some(self.request(seed).await)
    }

    pub fn record_history(&self, text: &str) {
        self.lock().history.record(text);
    }

    /// Best-effort copy; failures are logged and otherwise ignored.
    pub fn copy(&self, text: &str) {
        if let Err(e) = self.clipboard.set_text(text) {
            warn!("Copy to clipboard failed: {}", e);
        }
    }

    /// Copy the current result, returning whether there was one.
    pub fn copy_current(&self) -> bool {
        let current = self.lock().current.clone();
        match current {
            Some(text) => {
                self.copy(&text);
                true
            }
            None => false,
        }
    }

    /// Copy the `n`th earlier post as listed under the current one (1-based),
    /// returning whether such an entry exists.
    pub fn copy_previous(&self, n: usize) -> bool {
        let entry = n
            .checked_sub(1)
            .and_then(|i| self.lock().history.previous().nth(i).map(str::to_string));
        match entry {
            Some(text) => {
                self.copy(&text);
                true
            }
            None => false,
        }
    }

    async fn request(&self, description: String) -> Phase {
        let id = self.next_request.fetch_add(1, Ordering::Relaxed);
        self.lock().phase = Phase::Loading;
        debug!(request = id, "Generation request issued");

        let outcome = self.backend.generate(&description).await;

        let mut state = self.lock();
        match outcome {
            Ok(text) => {
                info!(request = id, "Generation request succeeded");
                state.current = Some(text.clone());
                state.history.record(text);
                state.error = None;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                warn!(request = id, "Generation request failed: {}", e);
                state.error = Some(e.public_message());
                state.phase = Phase::Failed;
            }
        }
        state.phase
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        // Mutations are plain field assignments, so a poisoned state is still whole.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
