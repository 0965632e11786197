//! View and edit mode state types for the application.
//!
//! These enums control which of the two lists is presented and whether the
//! active list exposes its editing affordances (reordering, style pickers)
//! or the trash exposes multi-select.

/// Which list the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The active saved-locations list.
    Locations,

    /// The trash. Entering this view triggers the expiry sweep.
    Trash,
}

/// Whether editing affordances are exposed.
///
/// In the locations view this enables row reordering and the per-row style
/// picker; in the trash view it enables multi-select for batch restore and
/// batch delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    /// Read-only browsing.
    Browsing,

    /// Editing affordances visible.
    Editing,
}

impl EditMode {
    /// Flips between browsing and editing.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Browsing => Self::Editing,
            Self::Editing => Self::Browsing,
        }
    }

    /// Whether editing affordances are visible.
    #[must_use]
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}
