//! DOM operation errors

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not exist in this tree
    #[error("node {0} not found")]
    NotFound(u32),

    /// Insertion would create a cycle or move the document root
    #[error("hierarchy request error")]
    HierarchyRequest,

    /// Operation needs an element (or a node that can hold children)
    #[error("invalid node type: expected {expected}")]
    InvalidNodeType { expected: &'static str },

    /// Reference node is not a child of the given parent
    #[error("node {0} is not a child of the given parent")]
    NotAChild(u32),
}
