/// The result of a successful parse attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedStatement<TStmt> {
    /// The statement registered by the grammar, or `None` if the input
    /// held no statement (e.g. it was empty).
    pub stmt: Option<TStmt>,

    /// One plus the highest placeholder index the statement references.
    pub num_placeholders: usize,

    /// Number of annotation slots the statement needs.
    pub num_annotations: u32,
}
