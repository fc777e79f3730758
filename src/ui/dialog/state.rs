use crate::ui::mvi::UiState;

/// Draft state of a single edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState<T> {
    /// Not shown. `draft` is stale and gets re-seeded before the next open.
    Closed { draft: T },
    /// Shown. `source` is the committed value the draft was seeded from.
    Open { draft: T, source: T },
}

impl<T: Default> Default for DialogState<T> {
    fn default() -> Self {
        Self::Closed {
            draft: T::default(),
        }
    }
}

impl<T> UiState for DialogState<T> where T: Clone + PartialEq + Default + Send + 'static {}

impl<T> DialogState<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// The value the dialog would display.
    pub fn draft(&self) -> &T {
        match self {
            Self::Closed { draft } | Self::Open { draft, .. } => draft,
        }
    }

    /// Committed value captured when the dialog opened.
    pub fn source(&self) -> Option<&T> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Closed { .. } => None,
        }
    }
}

impl<T: PartialEq> DialogState<T> {
    /// True when an open dialog holds an edit that differs from its source.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Open { draft, source } => draft != source,
            Self::Closed { .. } => false,
        }
    }
}
