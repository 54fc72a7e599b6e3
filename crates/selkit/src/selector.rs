//! The selector accumulator.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! A [`Selector`] holds one compound selector and, optionally, a combinator
//! linking it to the next selector on its right, which makes it the head of
//! a [complex selector](https://www.w3.org/TR/selectors-4/#complex).

use std::fmt;

use serde::Serialize;

use crate::combinator::Combinator;
use crate::error::SelectorError;
use crate::part::{Part, PartKind};

/// A compound selector, optionally linked to the selector on its right.
///
/// Parts are accepted only in rank order (see [`PartKind::rank`]), and
/// element, id, pseudo-element and combinator at most once each.
///
/// ```
/// use selkit::Selector;
///
/// let selector = Selector::new().element("a")?.attr("href$=\".png\"")?.pseudo_class("focus")?;
/// assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
/// # Ok::<(), selkit::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
    #[serde(flatten)]
    link: Option<Link>,
    /// Rank of the most recently accepted part.
    #[serde(skip)]
    cursor: u8,
}

/// Combinator and the selector it owns on its right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Link {
    combinator: Combinator,
    linked: Box<Selector>,
}

impl Selector {
    /// Create an empty selector. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            link: None,
            cursor: 0,
        }
    }

    /// A fresh selector holding only `part`.
    ///
    /// Any single part is valid on an empty selector, so no checks run.
    pub(crate) fn seeded(part: Part) -> Self {
        let mut selector = Self::new();
        selector.apply(part);
        selector
    }

    /// Add `part` to this selector.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateSingletonPart`] if `part` is an element,
    ///   id, pseudo-element or combinator and one is already set.
    /// - [`SelectorError::OutOfOrderPart`] if a part of a later kind has
    ///   already been accepted.
    ///
    /// On error the selector is unchanged.
    pub fn set_part(&mut self, part: Part) -> Result<&mut Self, SelectorError> {
        let kind = part.kind();

        if kind.is_singleton() && self.has(kind) {
            return Err(SelectorError::DuplicateSingletonPart { kind });
        }

        if kind.rank() < self.cursor {
            return Err(SelectorError::OutOfOrderPart {
                kind,
                after: self.last_kind(),
            });
        }

        self.apply(part);
        Ok(self)
    }

    /// Set the element (type) name.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::Element(name.into()))
    }

    /// Set the id.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn id(self, id: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::Id(id.into()))
    }

    /// Append a class.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::Class(name.into()))
    }

    /// Append an attribute selector body, written without brackets.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn attr(self, body: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::Attribute(body.into()))
    }

    /// Append a pseudo-class, written without the leading `:`.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn pseudo_class(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::PseudoClass(name.into()))
    }

    /// Set the pseudo-element, written without the leading `::`.
    ///
    /// # Errors
    ///
    /// See [`Selector::set_part`].
    pub fn pseudo_element(self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.with_part(Part::PseudoElement(name.into()))
    }

    /// Link `other` to the right of this selector with `combinator`.
    ///
    /// Returns this selector, now the head of the chain. `other` is moved in
    /// and can only be reached through [`Selector::linked`] afterwards.
    ///
    /// Chains nest to the right: to build `a > b + c`, combine `b` with `c`
    /// first and then combine `a` with the result. A selector that already
    /// heads a chain cannot take a second combinator.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateSingletonPart`] if this selector is already
    /// linked.
    pub fn combine(self, combinator: Combinator, other: Self) -> Result<Self, SelectorError> {
        self.with_part(Part::Combinator(combinator, Box::new(other)))
    }

    /// Render the canonical selector text.
    ///
    /// Parts are written in rank order regardless of when they were added,
    /// followed by `" <token> "` and the rendered linked selector.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The element name, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Classes in the order they were added.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute bodies in the order they were added.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in the order they were added.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The combinator linking the next selector, if any.
    #[must_use]
    pub fn combinator(&self) -> Option<Combinator> {
        self.link.as_ref().map(|link| link.combinator)
    }

    /// The selector on the right of the combinator, if any.
    #[must_use]
    pub fn linked(&self) -> Option<&Self> {
        self.link.as_ref().map(|link| &*link.linked)
    }

    /// Whether no part has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.pseudo_classes.is_empty()
            && self.pseudo_element.is_none()
            && self.link.is_none()
    }

    /// Iterate the compound selectors of the chain, starting with this one.
    #[must_use]
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn with_part(mut self, part: Part) -> Result<Self, SelectorError> {
        let _ = self.set_part(part)?;
        Ok(self)
    }

    fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.element.is_some(),
            PartKind::Id => self.id.is_some(),
            PartKind::Class => !self.classes.is_empty(),
            PartKind::Attribute => !self.attributes.is_empty(),
            PartKind::PseudoClass => !self.pseudo_classes.is_empty(),
            PartKind::PseudoElement => self.pseudo_element.is_some(),
            PartKind::Combinator => self.link.is_some(),
        }
    }

    fn last_kind(&self) -> PartKind {
        PartKind::from_rank(self.cursor).unwrap_or(PartKind::Combinator)
    }

    /// Store `part` and move the cursor to its rank. Callers check the rules.
    fn apply(&mut self, part: Part) {
        let rank = part.kind().rank();

        match part {
            Part::Element(name) => self.element = Some(name),
            Part::Id(id) => self.id = Some(id),
            Part::Class(name) => self.classes.push(name),
            Part::Attribute(body) => self.attributes.push(body),
            Part::PseudoClass(name) => self.pseudo_classes.push(name),
            Part::PseudoElement(name) => self.pseudo_element = Some(name),
            Part::Combinator(combinator, linked) => {
                self.link = Some(Link { combinator, linked });
            }
        }

        self.cursor = rank;
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attribute in &self.attributes {
            write!(f, "[{attribute}]")?;
        }
        for pseudo_class in &self.pseudo_classes {
            write!(f, ":{pseudo_class}")?;
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            write!(f, "::{pseudo_element}")?;
        }
        if let Some(link) = &self.link {
            write!(f, " {} {}", link.combinator, link.linked)?;
        }
        Ok(())
    }
}

/// Iterator over the compound selectors of a chain, head first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a Selector>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Selector;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.linked();
        Some(current)
    }
}
