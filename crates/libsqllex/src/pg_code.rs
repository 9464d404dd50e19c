/// A five-character SQLSTATE code attached to every diagnostic.
///
/// Downstream error handling maps these to client-facing error codes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PgCode(&'static str);

impl PgCode {
    /// `42601`: syntax error.
    pub const SYNTAX: PgCode = PgCode("42601");

    /// Returns the SQLSTATE string.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for PgCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
