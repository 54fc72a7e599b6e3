//! Selector entry points.
//!
//! Each function returns a fresh [`Selector`] seeded with one part, ready
//! for further fluent calls, so callers rarely need to name the type:
//!
//! ```
//! use selkit::id;
//!
//! let selector = id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.render(), "#main.container.editable");
//! # Ok::<(), selkit::SelectorError>(())
//! ```

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::part::Part;
use crate::selector::Selector;

/// A selector starting with an element (type) name.
#[must_use]
pub fn element(name: impl Into<String>) -> Selector {
    Selector::seeded(Part::Element(name.into()))
}

/// A selector starting with an id.
#[must_use]
pub fn id(id: impl Into<String>) -> Selector {
    Selector::seeded(Part::Id(id.into()))
}

/// A selector starting with a class.
#[must_use]
pub fn class(name: impl Into<String>) -> Selector {
    Selector::seeded(Part::Class(name.into()))
}

/// A selector starting with an attribute body, written without brackets.
#[must_use]
pub fn attr(body: impl Into<String>) -> Selector {
    Selector::seeded(Part::Attribute(body.into()))
}

/// A selector starting with a pseudo-class.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> Selector {
    Selector::seeded(Part::PseudoClass(name.into()))
}

/// A selector consisting of a pseudo-element.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> Selector {
    Selector::seeded(Part::PseudoElement(name.into()))
}

/// Link `right` to `left` with `combinator` and return `left` as the chain head.
///
/// # Errors
///
/// [`SelectorError::DuplicateSingletonPart`] if `left` is already linked.
pub fn combine(
    left: Selector,
    combinator: Combinator,
    right: Selector,
) -> Result<Selector, SelectorError> {
    left.combine(combinator, right)
}
