use std::sync::Arc;

use tokio::sync::watch;

use super::route::{ModalRoute, Routes};
use super::state::NavigationState;

/// Handle to one navigation scope.
///
/// Clones share the same state. Each operation is a single serialized update
/// of the underlying `watch` channel, so concurrent callers never observe a
/// half-applied transition. Observers are notified only when an operation
/// actually changed something.
pub struct Coordinator<R: Routes> {
    label: &'static str,
    state: Arc<watch::Sender<NavigationState<R>>>,
}

impl<R: Routes> Clone for Coordinator<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Routes> Coordinator<R> {
    /// Create a scope showing `root` with an empty path and no modals.
    pub fn new(label: &'static str, root: R::Screen) -> Self {
        tracing::debug!(coordinator = label, ?root, "Coordinator created");
        let (state, _) = watch::channel(NavigationState::new(root));
        Self {
            label,
            state: Arc::new(state),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Copy of the current navigation state.
    pub fn snapshot(&self) -> NavigationState<R> {
        self.state.borrow().clone()
    }

    /// Subscribe to navigation changes.
    pub fn observe(&self) -> watch::Receiver<NavigationState<R>> {
        self.state.subscribe()
    }

    pub fn current_screen(&self) -> R::Screen {
        self.state.borrow().current_screen().clone()
    }

    pub fn path(&self) -> Vec<R::Screen> {
        self.state.borrow().path().to_vec()
    }

    pub fn sheet(&self) -> Option<R::Sheet> {
        self.state.borrow().sheet().cloned()
    }

    pub fn cover(&self) -> Option<R::Cover> {
        self.state.borrow().cover().cloned()
    }

    /// Push `screen` on top of the current one.
    pub fn push(&self, screen: R::Screen) {
        let label = self.label;
        self.state.send_if_modified(|state| {
            tracing::debug!(coordinator = label, ?screen, depth = state.depth() + 1, "push");
            state.push(screen)
        });
    }

    /// Pop the top screen. Popping an empty path is a no-op.
    pub fn pop(&self) {
        let label = self.label;
        self.state.send_if_modified(|state| match state.pop() {
            Some(screen) => {
                tracing::debug!(coordinator = label, ?screen, depth = state.depth(), "pop");
                true
            }
            None => {
                tracing::trace!(coordinator = label, "pop on empty path ignored");
                false
            }
        });
    }

    /// Clear the whole path in one step.
    pub fn pop_to_root(&self) {
        let label = self.label;
        self.state.send_if_modified(|state| {
            let depth = state.depth();
            let changed = state.pop_to_root();
            if changed {
                tracing::debug!(coordinator = label, popped = depth, "pop_to_root");
            }
            changed
        });
    }

    /// Replace the root screen and reset the path and both modal slots.
    pub fn set_root(&self, root: R::Screen) {
        let label = self.label;
        self.state.send_if_modified(|state| {
            tracing::debug!(coordinator = label, ?root, "set_root");
            state.set_root(root)
        });
    }

    /// Show `sheet`. An already presented sheet is replaced (last write wins).
    pub fn present_sheet(&self, sheet: R::Sheet) {
        let label = self.label;
        self.state.send_if_modified(|state| {
            let incoming = sheet.id();
            let unchanged = state.sheet() == Some(&sheet);
            if let Some(previous) = state.replace_sheet(Some(sheet)) {
                tracing::debug!(
                    coordinator = label,
                    replaced = ?previous.id(),
                    sheet = ?incoming,
                    "present_sheet replaced active sheet"
                );
            } else {
                tracing::debug!(coordinator = label, sheet = ?incoming, "present_sheet");
            }
            !unchanged
        });
    }

    pub fn dismiss_sheet(&self) {
        let label = self.label;
        self.state.send_if_modified(|state| match state.replace_sheet(None) {
            Some(previous) => {
                tracing::debug!(coordinator = label, sheet = ?previous.id(), "dismiss_sheet");
                true
            }
            None => false,
        });
    }

    /// Show `cover`. An already presented cover is replaced (last write wins).
    pub fn present_cover(&self, cover: R::Cover) {
        let label = self.label;
        self.state.send_if_modified(|state| {
            let incoming = cover.id();
            let unchanged = state.cover() == Some(&cover);
            if let Some(previous) = state.replace_cover(Some(cover)) {
                tracing::debug!(
                    coordinator = label,
                    replaced = ?previous.id(),
                    cover = ?incoming,
                    "present_cover replaced active cover"
                );
            } else {
                tracing::debug!(coordinator = label, cover = ?incoming, "present_cover");
            }
            !unchanged
        });
    }

    pub fn dismiss_cover(&self) {
        let label = self.label;
        self.state.send_if_modified(|state| match state.replace_cover(None) {
            Some(previous) => {
                tracing::debug!(coordinator = label, cover = ?previous.id(), "dismiss_cover");
                true
            }
            None => false,
        });
    }
}
