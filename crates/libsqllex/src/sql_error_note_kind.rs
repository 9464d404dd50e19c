/// The kind of an error note (determines how the note is rendered).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SqlErrorNoteKind {
    /// Supporting context, such as the source line with a caret under the
    /// offending token.
    ///
    /// Rendered as `DETAIL: ...` in CLI output.
    Detail,

    /// Actionable suggestion, or the help text of a help request.
    ///
    /// Rendered as `HINT: ...` in CLI output.
    /// Example: `try \h CREATE TABLE`
    Hint,
}
