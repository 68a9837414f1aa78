use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

/// Transient message shown over the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

pub trait Toaster: Send + Sync {
    fn show(&self, toast: Toast);
}

/// Toaster that logs each toast and keeps it for inspection.
#[derive(Default)]
pub struct ToastLog {
    shown: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<Toast> {
        self.shown.lock().clone()
    }
}

impl Toaster for ToastLog {
    fn show(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Info => tracing::info!(message = %toast.message, "Toast"),
            ToastKind::Error => tracing::warn!(message = %toast.message, "Error toast"),
        }
        self.shown.lock().push(toast);
    }
}
