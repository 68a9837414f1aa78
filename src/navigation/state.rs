use std::fmt;

use super::route::{ModalRoute, Routes};

/// Immutable navigation snapshot of one scope.
///
/// The visible screen is the last pushed screen, or the root when the path
/// is empty.
pub struct NavigationState<R: Routes> {
    root: R::Screen,
    path: Vec<R::Screen>,
    sheet: Option<R::Sheet>,
    cover: Option<R::Cover>,
}

impl<R: Routes> NavigationState<R> {
    pub fn new(root: R::Screen) -> Self {
        Self {
            root,
            path: Vec::new(),
            sheet: None,
            cover: None,
        }
    }

    pub fn root(&self) -> &R::Screen {
        &self.root
    }

    /// Screens pushed above the root, bottom first.
    pub fn path(&self) -> &[R::Screen] {
        &self.path
    }

    pub fn current_screen(&self) -> &R::Screen {
        self.path.last().unwrap_or(&self.root)
    }

    pub fn sheet(&self) -> Option<&R::Sheet> {
        self.sheet.as_ref()
    }

    pub fn cover(&self) -> Option<&R::Cover> {
        self.cover.as_ref()
    }

    pub fn sheet_id(&self) -> Option<<R::Sheet as ModalRoute>::Id> {
        self.sheet.as_ref().map(ModalRoute::id)
    }

    pub fn cover_id(&self) -> Option<<R::Cover as ModalRoute>::Id> {
        self.cover.as_ref().map(ModalRoute::id)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    // Transitions below return whether anything changed, so the coordinator
    // only notifies observers on real changes.

    pub(super) fn push(&mut self, screen: R::Screen) -> bool {
        self.path.push(screen);
        true
    }

    pub(super) fn pop(&mut self) -> Option<R::Screen> {
        self.path.pop()
    }

    pub(super) fn pop_to_root(&mut self) -> bool {
        if self.path.is_empty() {
            return false;
        }
        self.path.clear();
        true
    }

    pub(super) fn set_root(&mut self, root: R::Screen) -> bool {
        let changed = self.root != root
            || !self.path.is_empty()
            || self.sheet.is_some()
            || self.cover.is_some();
        self.root = root;
        self.path.clear();
        self.sheet = None;
        self.cover = None;
        changed
    }

    pub(super) fn replace_sheet(&mut self, sheet: Option<R::Sheet>) -> Option<R::Sheet> {
        std::mem::replace(&mut self.sheet, sheet)
    }

    pub(super) fn replace_cover(&mut self, cover: Option<R::Cover>) -> Option<R::Cover> {
        std::mem::replace(&mut self.cover, cover)
    }
}

impl<R: Routes> Clone for NavigationState<R> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            path: self.path.clone(),
            sheet: self.sheet.clone(),
            cover: self.cover.clone(),
        }
    }
}

impl<R: Routes> PartialEq for NavigationState<R> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.path == other.path
            && self.sheet == other.sheet
            && self.cover == other.cover
    }
}

impl<R: Routes> fmt::Debug for NavigationState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationState")
            .field("root", &self.root)
            .field("path", &self.path)
            .field("sheet", &self.sheet)
            .field("cover", &self.cover)
            .finish()
    }
}

impl<R: Routes> serde::Serialize for NavigationState<R>
where
    R::Screen: serde::Serialize,
    R::Sheet: serde::Serialize,
    R::Cover: serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut out = serializer.serialize_struct("NavigationState", 5)?;
        out.serialize_field("root", &self.root)?;
        out.serialize_field("path", &self.path)?;
        out.serialize_field("current", self.current_screen())?;
        out.serialize_field("sheet", &self.sheet)?;
        out.serialize_field("cover", &self.cover)?;
        out.end()
    }
}
