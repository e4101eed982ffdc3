#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// A raw value does not belong to the underlying set of the group.
    #[error("InvalidElement: {0}")]
    InvalidElement(String),
    /// Two elements from groups that are neither the same instance nor equal.
    #[error("IncompatibleGroups: cannot compose an element of {left} with an element of {right}")]
    IncompatibleGroups { left: String, right: String },
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
}
