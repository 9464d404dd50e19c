use crate::SmallVec;
use crate::SqlErrorNoteKind;

/// A note providing additional context about a [`SqlParseError`](crate::SqlParseError).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SqlErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: SqlErrorNoteKind,

    /// The note message. Detail notes may span several lines.
    pub message: String,
}

impl SqlErrorNote {
    /// Creates a detail note.
    pub fn detail(message: impl Into<String>) -> Self {
        Self {
            kind: SqlErrorNoteKind::Detail,
            message: message.into(),
        }
    }

    /// Creates a hint note.
    pub fn hint(message: impl Into<String>) -> Self {
        Self {
            kind: SqlErrorNoteKind::Hint,
            message: message.into(),
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since a diagnostic carries one detail block and at most a
/// hint or two, avoiding heap allocation in the common case.
pub type SqlErrorNotes = SmallVec<[SqlErrorNote; 2]>;
