/// Index of an annotation slot allocated while parsing one statement.
///
/// Slots are numbered from 1 in allocation order; `0` never names a slot.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AnnotationIdx(u32);

impl AnnotationIdx {
    pub const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Zero-based index of a positional placeholder: `$1` has index 0.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PlaceholderIdx(u32);

impl PlaceholderIdx {
    pub const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Per-attempt counters for annotation slots and placeholders.
///
/// Both counters only grow. A registry is reset by replacing it with
/// `AnnotationRegistry::default()` at the start of each parse attempt.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnnotationRegistry {
    /// One plus the highest placeholder index recorded so far.
    num_placeholders: usize,

    /// Number of annotation slots allocated so far.
    num_annotations: u32,
}

impl AnnotationRegistry {
    /// Allocates the next annotation slot and returns its index.
    pub fn new_annotation(&mut self) -> AnnotationIdx {
        self.num_annotations += 1;
        AnnotationIdx(self.num_annotations)
    }

    /// Records that the statement references placeholder `idx`.
    pub fn update_num_placeholders(&mut self, idx: PlaceholderIdx) {
        let n = idx.get() as usize + 1;
        if self.num_placeholders < n {
            self.num_placeholders = n;
        }
    }

    /// One plus the highest placeholder index recorded so far.
    pub fn num_placeholders(&self) -> usize {
        self.num_placeholders
    }

    /// Number of annotation slots allocated so far.
    pub fn num_annotations(&self) -> u32 {
        self.num_annotations
    }
}
