//! # toolkit-versioning
//!
//! A library for parsing version ranges written in Mozilla's [Toolkit version
//! format], the dialect add-on and plugin manifests use to declare the host
//! versions they support.
//!
//! A range expression is resolved into a closed interval of *inclusive*
//! bounds, each bound either a version string or unbounded. Consumers then
//! test whether a concrete version falls inside the interval.
//!
//! [Toolkit version format]:
//!     https://developer.mozilla.org/en-US/docs/Toolkit_version_format
//!
//! ## Examples
//!
//! Resolve an expression and test membership:
//!
//! ```
//! use toolkit_versioning::parse;
//!
//! let range = parse(">=1.2.3 <2.0").unwrap();
//! assert_eq!(range.min.as_deref(), Some("1.2.3"));
//! assert_eq!(range.max.as_deref(), Some("2.0.-1"));
//! assert!(range.contains("1.5"));
//! assert!(!range.contains("2.0"));
//! ```
//!
//! Strict comparators become inclusive bounds through boundary adjustment:
//!
//! ```
//! use toolkit_versioning::{decrement, increment, parse};
//!
//! assert_eq!(increment("1.2.3"), "1.2.3.1");
//! assert_eq!(decrement("1.2.3"), "1.2.3.-1");
//!
//! let range = parse(">1.2.3").unwrap();
//! assert_eq!(range.min.as_deref(), Some("1.2.3.1"));
//! ```
//!
//! ## Expressions
//!
//! An expression is 1 to 3 whitespace-separated tokens:
//!
//! | Expression | Resolves to |
//! |---|---|
//! | `1.2.3` | exactly `1.2.3` |
//! | `>=1.2.3`, `>1.2.3` | minimum bound, inclusive or adjusted |
//! | `<=1.2.3`, `<1.2.3` | maximum bound, inclusive or adjusted |
//! | `>=1.2.3 <2.0` | both bounds |
//! | `1.2.3 - 2.3.4` | both bounds; reversed order is tolerated |
//! | `1.2.3 -`, `- 1.2.3` | open-ended on the dash side |
//! | `*` | unbounded, with the wildcard recorded as `max` |
//! | `` (empty), `-` | fully unbounded |
//!
//! A version is dot-separated segments, each holding up to two (number,
//! symbol-run) pairs; numbers may be negative and almost any printable
//! character counts as a symbol, so the grammar is far more permissive than
//! semver. A trailing `+` on a dot-number version is the legacy marker for
//! "this version, or a pre-release of the next one": `1.0+` resolves as
//! `1.1pre`.
//!
//! ## Ordering
//!
//! Ranges never order versions themselves; [`compare`] implements the
//! format's three-way comparison (the same algorithm as Firefox's version
//! comparator) and everything else produces strings for it to order. The
//! rules are unusual: `1.0` equals `1.0.0.0`, a string run marks a
//! pre-release so `1.0pre` orders *below* `1.0`, and `1.0.-1` slots between
//! the two.
#![warn(missing_docs)]

mod bounds;
mod compare;
mod error;
mod grammar;
mod range;

pub use crate::bounds::{decrement, increment};
pub use crate::compare::compare;
pub use crate::error::ParseError;
pub use crate::grammar::Comparator;
pub use crate::range::{parse, Range};
