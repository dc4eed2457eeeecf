//! Range resolution: from a raw expression to inclusive `{min, max}` bounds.

use core::cmp::Ordering;
use core::str::FromStr;

use crate::bounds::{decrement, increment, legacy_plus};
use crate::compare::compare;
use crate::error::ParseError;
use crate::grammar::{recognize, Comparator};

/// The literal a range uses to mean "unbounded above, and the input said so".
const WILDCARD: &str = "*";

/// A resolved compatibility range.
///
/// Both bounds are inclusive. A `None` bound is unbounded on that side. The
/// wildcard sentinel `"*"` in `max` also means unbounded above, but records
/// that the input spelled it out rather than leaving the side open.
///
/// Ranges come from [`parse`] (or [`str::parse`] via [`FromStr`]) and answer
/// membership questions through [`Range::contains`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Range {
    /// Inclusive lower bound.
    pub min: Option<String>,
    /// Inclusive upper bound.
    pub max: Option<String>,
}

impl Range {
    fn wildcard() -> Self {
        Range {
            min: None,
            max: Some(WILDCARD.to_owned()),
        }
    }

    /// Tests whether a concrete version falls inside this range.
    ///
    /// Unbounded sides accept everything; the wildcard sentinel is treated
    /// as unbounded, not as the literal version `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toolkit_versioning::parse;
    ///
    /// let range = parse(">=1.2 <2.0").unwrap();
    /// assert!(range.contains("1.2"));
    /// assert!(range.contains("1.9.9"));
    /// assert!(!range.contains("2.0"));
    /// assert!(!range.contains("1.2pre"));
    /// ```
    pub fn contains(&self, version: &str) -> bool {
        let above_min = match self.min.as_deref() {
            None => true,
            Some(min) => compare(version, min) != Ordering::Less,
        };
        let below_max = match self.max.as_deref() {
            None => true,
            Some(WILDCARD) => true,
            Some(max) => compare(version, max) != Ordering::Greater,
        };
        above_min && below_max
    }
}

impl FromStr for Range {
    type Err = ParseError;

    /// Equivalent to [`parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Resolves a range expression into a [`Range`] of inclusive bounds.
///
/// An expression is 1 to 3 whitespace-separated tokens. Each token is either
/// a version in the Toolkit format, optionally prefixed by `>`, `>=`, `<` or
/// `<=`, or one of the literal markers `*` (wildcard) and `-` (open range
/// side, or the separator of a `low - high` pair). Strict comparators are
/// converted to inclusive bounds with [`increment`]/[`decrement`], and a
/// legacy `+` version under `>=`/`<=`/no comparator is first rewritten to
/// its "next release, pre" form (`1.0+` to `1.1pre`).
///
/// Two bare versions given in descending order, with or without the dash
/// separator, are reordered rather than rejected.
///
/// # Errors
///
/// Returns a [`ParseError`] when a token fails the grammar, the expression
/// has more than 3 tokens, a 3-token expression has something other than `-`
/// in the middle, or the resolved minimum orders above the resolved maximum.
///
/// # Examples
///
/// ```
/// use toolkit_versioning::parse;
///
/// let range = parse(">=1.2.3 <2.0").unwrap();
/// assert_eq!(range.min.as_deref(), Some("1.2.3"));
/// assert_eq!(range.max.as_deref(), Some("2.0.-1"));
///
/// let range = parse("2.3.4 - 1.2.3").unwrap();
/// assert_eq!(range.min.as_deref(), Some("1.2.3"));
/// assert_eq!(range.max.as_deref(), Some("2.3.4"));
///
/// assert!(parse("1 2 3 4").is_err());
/// ```
pub fn parse(input: &str) -> Result<Range, ParseError> {
    let input = input.trim();

    // exceptional literals, before any grammar work
    match input {
        "" | "-" => return Ok(Range::default()),
        WILDCARD => return Ok(Range::wildcard()),
        _ => {}
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let range = match tokens.as_slice() {
        [token] => resolve_single(token)?,
        [left, right] => resolve_pair(left, right)?,
        [low, "-", high] => resolve_dash_range(low, high)?,
        [_, middle, _] => {
            return Err(ParseError::BadRangeSeparator {
                token: (*middle).to_owned(),
            })
        }
        _ => {
            return Err(ParseError::TooManyTokens {
                count: tokens.len(),
            })
        }
    };

    if let (Some(min), Some(max)) = (&range.min, &range.max) {
        if compare(min, max) == Ordering::Greater {
            return Err(ParseError::EmptyRange {
                min: min.clone(),
                max: max.clone(),
            });
        }
    }
    Ok(range)
}

fn resolve_single(token: &str) -> Result<Range, ParseError> {
    let mut range = Range::default();
    apply_token(token, 0, 1, &mut range)?;
    Ok(range)
}

fn resolve_pair(left: &str, right: &str) -> Result<Range, ParseError> {
    // a lone dash leaves its side of the range open
    if left == "-" || right == "-" {
        let (anchor, index) = if left == "-" { (right, 1) } else { (left, 0) };
        if anchor == WILDCARD {
            return Ok(Range::wildcard());
        }
        let mut range = Range::default();
        apply_token(anchor, index, 2, &mut range)?;
        return Ok(range);
    }

    let (left_cmp, left_version) = recognized(left)?;
    let (right_cmp, right_version) = recognized(right)?;

    // reversed-pair tolerance: two bare versions in descending order are
    // reordered, not rejected
    let descending = left_cmp.is_none()
        && right_cmp.is_none()
        && compare(left_version, right_version) == Ordering::Greater;
    let (first, second) = if descending {
        (right, left)
    } else {
        (left, right)
    };

    let mut range = Range::default();
    apply_token(first, 0, 2, &mut range)?;
    apply_token(second, 1, 2, &mut range)?;
    Ok(range)
}

fn resolve_dash_range(low: &str, high: &str) -> Result<Range, ParseError> {
    let (low_cmp, low_version) = recognized(low)?;
    let (high_cmp, high_version) = recognized(high)?;

    if low_cmp.is_none() && high_cmp.is_none() {
        // bare sides are taken verbatim, reordered when the pair descends
        let descending = compare(low_version, high_version) == Ordering::Greater;
        let (min, max) = if descending {
            (high_version, low_version)
        } else {
            (low_version, high_version)
        };
        return Ok(Range {
            min: Some(min.to_owned()),
            max: Some(max.to_owned()),
        });
    }

    // with a comparator on either side, each side is an independent bound
    let mut range = Range::default();
    apply_token(low, 0, 2, &mut range)?;
    apply_token(high, 1, 2, &mut range)?;
    Ok(range)
}

fn recognized(token: &str) -> Result<(Option<Comparator>, &str), ParseError> {
    recognize(token).ok_or_else(|| ParseError::InvalidToken {
        token: token.to_owned(),
    })
}

/// Applies one token's contribution to the bounds. Strict comparators adjust
/// the boundary inward, inclusive ones take the version as-is, and a bare
/// version anchors `min` or `max` by its position among the tokens.
fn apply_token(
    token: &str,
    index: usize,
    total: usize,
    range: &mut Range,
) -> Result<(), ParseError> {
    let (comparator, version) = recognized(token)?;
    let version = canonical(comparator, version);
    match comparator {
        Some(Comparator::Gt) => range.min = Some(increment(&version)),
        Some(Comparator::GtEq) => range.min = Some(version),
        Some(Comparator::Lt) => range.max = Some(decrement(&version)),
        Some(Comparator::LtEq) => range.max = Some(version),
        None if version == WILDCARD => range.max = Some(version),
        None if index == 0 => {
            if total == 1 {
                range.max = Some(version.clone());
            }
            range.min = Some(version);
        }
        None => range.max = Some(version),
    }
    Ok(())
}

/// Rewrites a legacy `+` version to its canonical form for the comparators
/// that take the version as-is. Strict comparators skip this; their boundary
/// adjustment owns the `+` handling.
fn canonical(comparator: Option<Comparator>, version: &str) -> String {
    match comparator {
        None | Some(Comparator::GtEq) | Some(Comparator::LtEq) => match legacy_plus(version) {
            Some(plus) => plus.canonical(),
            None => version.to_owned(),
        },
        Some(Comparator::Gt) | Some(Comparator::Lt) => version.to_owned(),
    }
}
