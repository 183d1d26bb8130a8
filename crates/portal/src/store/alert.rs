use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Alert {
    pub open: bool,
    pub severity: Severity,
    pub message: String,
}

/// The banner. A new alert replaces whatever was showing.
#[derive(Debug)]
pub struct AlertStore {
    state: watch::Sender<Alert>,
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(Alert::default());
        Self { state }
    }

    pub fn open(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        debug!("alert {severity:?}: {message}");
        self.state.send_replace(Alert {
            open: true,
            severity,
            message,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.open(message, Severity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.open(message, Severity::Error);
    }

    pub fn close(&self) {
        self.state.send_modify(|alert| alert.open = false);
    }

    pub fn current(&self) -> Alert {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Alert> {
        self.state.subscribe()
    }
}
