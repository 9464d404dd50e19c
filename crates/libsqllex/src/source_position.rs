/// Location of a byte offset within SQL source text.
///
/// This is a pure data struct; [`SourcePosition::locate`] computes one
/// from a source string and an offset.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the input
/// - `column`: byte distance from the start of the line. Diagnostics draw
///   their caret with one space per byte, so this is the number of spaces
///   before the caret.
/// - `byte_offset`: byte offset within the whole input
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Locates `byte_offset` in `source`. Offsets past the end of the
    /// source are clamped to its length.
    pub fn locate(source: &str, byte_offset: usize) -> Self {
        let bytes = source.as_bytes();
        let byte_offset = byte_offset.min(bytes.len());
        let before = &bytes[..byte_offset];
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
        Self {
            line: memchr::memchr_iter(b'\n', before).count(),
            column: byte_offset - line_start,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based byte column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the input.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Byte offset of the first byte of this position's line.
    pub fn line_start(&self) -> usize {
        self.byte_offset - self.column
    }
}

impl std::fmt::Display for SourcePosition {
    /// Renders as 1-based `line:column`, the way editors display it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}
