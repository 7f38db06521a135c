//! Construction errors for selector builders.

use thiserror::Error;

/// Errors that can occur while appending fragments to a selector.
///
/// Both variants are programmer-error-class failures: the failing append is
/// rejected before any state changes, and the builder remains usable for
/// appends that do satisfy the grammar. The messages are fixed so callers
/// and tests can assert on them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment arrived after one of a higher rank was already appended.
    #[error("Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element")]
    OrderViolation,

    /// A second element, id or pseudo-element was appended to one selector.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    DuplicateSingular,
}
