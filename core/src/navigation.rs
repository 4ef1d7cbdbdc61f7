//! Location/navigation seam used for the login redirect on session expiry.

use std::fmt::Debug;
use std::sync::Mutex;

/// Host navigation: where the user is and how to send them elsewhere.
pub trait Navigator: Send + Sync + Debug {
    fn current_path(&self) -> String;
    fn navigate_to(&self, path: &str);
}

/// Navigator that only records locations.
///
/// Suitable for headless hosts and as a test fake: `history` lists every
/// `navigate_to` target in order.
#[derive(Debug)]
pub struct MemoryNavigator {
    state: Mutex<NavState>,
}

#[derive(Debug)]
struct NavState {
    current: String,
    history: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(NavState {
                current: start.into(),
                history: Vec::new(),
            }),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).history.clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).current.clone()
    }

    fn navigate_to(&self, path: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current = path.to_string();
        state.history.push(path.to_string());
    }
}
