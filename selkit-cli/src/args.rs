//! Turning command-line steps into a selector.
//!
//! Parts between two combinators form one compound selector, added in
//! argument order so the builder's ordering rules apply as written. The
//! compound selectors are then combined right to left, which gives the
//! right-nested chain the builder expects.

use anyhow::{Context, Result, bail};
use selkit::{Combinator, Part, PartKind, Selector};

/// One command-line step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A `kind=value` part.
    Part(Part),
    /// A combinator token or name.
    Combinator(Combinator),
}

/// Parse a single step.
pub fn parse_step(word: &str) -> Result<Step> {
    if let Some((kind, value)) = word.split_once('=') {
        let kind = kind
            .parse::<PartKind>()
            .with_context(|| format!("unknown part kind {kind:?}"))?;
        let Some(part) = Part::with_value(kind, value) else {
            bail!("combinators are separate arguments, e.g. '>' or child");
        };
        return Ok(Step::Part(part));
    }

    let combinator = word
        .parse::<Combinator>()
        .context("expected kind=value or a combinator")?;
    Ok(Step::Combinator(combinator))
}

/// Build a selector from command-line steps.
pub fn build<S: AsRef<str>>(words: &[S]) -> Result<Selector> {
    let mut segments = Vec::new();
    let mut current = Selector::new();

    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref();
        let position = index + 1;

        match parse_step(word).with_context(|| format!("argument {position} ({word:?})"))? {
            Step::Part(part) => {
                let _ = current
                    .set_part(part)
                    .with_context(|| format!("argument {position} ({word:?})"))?;
            }
            Step::Combinator(combinator) => {
                if current.is_empty() {
                    bail!(
                        "argument {position} ({word:?}): no selector on the left of the combinator"
                    );
                }
                segments.push((std::mem::take(&mut current), combinator));
            }
        }
    }

    if current.is_empty() {
        if segments.is_empty() {
            bail!("no selector parts given");
        }
        bail!("no selector on the right of the last combinator");
    }

    let mut selector = current;
    for (left, combinator) in segments.into_iter().rev() {
        selector = left.combine(combinator, selector)?;
    }
    Ok(selector)
}
