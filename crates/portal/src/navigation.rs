use crate::abstract_trait::navigator::NavigatorTrait;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// In-memory router history. `replace` overwrites the current entry, `push`
/// appends one.
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryNavigator {
    pub fn new(start: &str) -> Self {
        Self {
            entries: Mutex::new(vec![start.to_string()]),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn history(&self) -> Vec<String> {
        self.entries().clone()
    }

    pub fn back(&self) -> Option<String> {
        let mut entries = self.entries();
        if entries.len() > 1 {
            entries.pop();
        }
        entries.last().cloned()
    }
}

impl NavigatorTrait for HistoryNavigator {
    fn push(&self, path: &str) {
        debug!("navigate push {path}");
        self.entries().push(path.to_string());
    }

    fn replace(&self, path: &str) {
        debug!("navigate replace {path}");
        let mut entries = self.entries();
        match entries.last_mut() {
            Some(last) => *last = path.to_string(),
            None => entries.push(path.to_string()),
        }
    }

    fn current(&self) -> String {
        self.entries().last().cloned().unwrap_or_else(|| "/".to_string())
    }
}
