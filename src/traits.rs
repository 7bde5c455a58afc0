//! Cross-cutting traits shared by [`crate::leaf::Leaf`] and
//! [`crate::tree::PrefixSumVec`].

/// Reports how many bytes of heap allocation a structure is currently
/// holding, for the allocation-accounting query exposed by
/// [`crate::tree::PrefixSumVec::alloc_bytes`].
pub trait AllocSize {
    fn alloc_bytes(&self) -> usize;
}

/// Renders a graphviz `dot` fragment describing a node, keyed by `self_id`
/// (the caller picks the id scheme; internal nodes and leaves share the same
/// id space by convention).
pub trait Dot {
    fn dotviz(&self, self_id: isize) -> String;
}
