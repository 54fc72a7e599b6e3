//! Errors raised by the selector builder.
//!
//! Both builder errors are contract violations reported at the offending
//! call. The selector they were raised on keeps its previous state.

use thiserror::Error;

use crate::part::PartKind;

/// Errors produced while building a selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An element, id, pseudo-element or combinator was supplied twice.
    #[error("duplicate {kind}: a selector may have at most one")]
    DuplicateSingletonPart {
        /// The kind that was supplied again.
        kind: PartKind,
    },

    /// A part was supplied after a part of a later kind.
    #[error(
        "cannot add {kind} after {after}: parts must follow the order element, id, class, \
         attribute, pseudo-class, pseudo-element, combinator"
    )]
    OutOfOrderPart {
        /// The rejected kind.
        kind: PartKind,
        /// The most recently accepted kind.
        after: PartKind,
    },

    /// Text that is neither a combinator token nor a combinator name.
    #[error("unknown combinator {0:?}")]
    UnknownCombinator(String),
}
