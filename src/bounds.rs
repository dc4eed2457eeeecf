//! Boundary adjustment: converting an exclusive bound into the nearest
//! inclusive one.
//!
//! [`increment`] and [`decrement`] are pure text edits. They lean on two
//! comparator rules: an extra trailing segment that starts with a negative
//! number orders below a missing one, and a longer number/symbol run orders
//! above a shorter prefix of itself. Nothing here consults the comparator;
//! the edits are chosen so that it orders them correctly afterwards.

use crate::grammar::{final_segment, split_part_suffix};

/// A recognized legacy `+` marker, e.g. `1.0+`. The body must be a run of
/// dot-separated, non-empty digit components; anything looser falls through
/// to the generic grammar branches.
pub(crate) struct LegacyPlus<'ver> {
    /// The version with the marker stripped: `1.0` for `1.0+`.
    pub(crate) body: &'ver str,
    /// `body` up to the final numeric component, dot included.
    stem: &'ver str,
    /// The final numeric component.
    number: i64,
}

impl LegacyPlus<'_> {
    /// The next release outright: `1.0+` becomes `1.1`.
    pub(crate) fn bumped(&self) -> String {
        format!("{}{}", self.stem, self.number + 1)
    }

    /// The canonical "next release, pre-release" form: `1.0+` becomes
    /// `1.1pre`. This is the rewrite applied to `+` versions bound by `>=`,
    /// `<=`, or no comparator at all.
    pub(crate) fn canonical(&self) -> String {
        format!("{}{}pre", self.stem, self.number + 1)
    }
}

/// Recognizes the legacy trailing-`+` suffix pattern.
pub(crate) fn legacy_plus(version: &str) -> Option<LegacyPlus<'_>> {
    let body = version.strip_suffix('+')?;
    let all_numeric = !body.is_empty()
        && body
            .split('.')
            .all(|component| !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()));
    if !all_numeric {
        return None;
    }
    let last = final_segment(body);
    let number = last.parse::<i64>().ok()?;
    Some(LegacyPlus {
        body,
        stem: &body[..body.len() - last.len()],
        number,
    })
}

/// `Some(n)` when the segment is exactly a negative integer, like `-1`.
fn lone_negative(segment: &str) -> Option<i64> {
    if !segment.starts_with('-') {
        return None;
    }
    segment.parse().ok()
}

/// Replaces the final dot-segment of `version` with `segment`.
fn with_final_segment(version: &str, segment: &str) -> String {
    match version.rfind('.') {
        Some(dot) => format!("{}{}", &version[..=dot], segment),
        None => segment.to_owned(),
    }
}

/// Replaces the last character with its code-point successor.
fn bump_last_char(version: &str) -> String {
    let mut chars = version.chars();
    match chars.next_back() {
        Some(last) => {
            let bumped = char::from_u32(last as u32 + 1).unwrap_or(last);
            format!("{}{}", chars.as_str(), bumped)
        }
        None => version.to_owned(),
    }
}

/// Returns a version string that orders immediately above the input, by the
/// smallest textual edit the format's ordering permits. This is how a strict
/// `>` bound becomes an inclusive minimum.
///
/// The edit depends on the shape of the final dot-segment:
///
/// - a lone negative number is incremented in place: `1.2.-1` to `1.2.0`;
/// - a legacy `+` version jumps to the next release: `1.0+` to `1.1`;
/// - a purely numeric tail gains a child segment: `1.2.3` to `1.2.3.1`
///   (after a wildcard, with a separating dot: `1.2.*` to `1.2.*.1`);
/// - a tail ending in a symbol run gains a `1`: `1.2.3a` to `1.2.3a1`;
/// - otherwise the last character is bumped: `1.2pre1a` to `1.2pre1b`.
///
/// # Examples
///
/// ```
/// use toolkit_versioning::increment;
///
/// assert_eq!(increment("1.2.3"), "1.2.3.1");
/// assert_eq!(increment("1.2.-1"), "1.2.0");
/// assert_eq!(increment("1.0+"), "1.1");
/// ```
///
/// For well-formed versions, `compare(v, &increment(v))` is `Less`. The one
/// known exception is a segment whose symbol run ends in `-` directly before
/// a number (`1.1a-1`): the grammar and the comparator disagree about who
/// owns the dash, and the historical behavior, preserved here, produces a
/// string that orders below its input.
pub fn increment(version: &str) -> String {
    if let Some(plus) = legacy_plus(version) {
        return plus.bumped();
    }

    let segment = final_segment(version);
    if let Some(number) = lone_negative(segment) {
        return with_final_segment(version, &(number + 1).to_string());
    }

    let parts = split_part_suffix(segment);
    if parts.str_b.is_none() {
        let sep = if version.ends_with('.') { "" } else { "." };
        return format!("{version}{sep}1");
    }
    if parts.num_c.is_none() {
        let sep = if version.ends_with('*') { "." } else { "" };
        return format!("{version}{sep}1");
    }
    bump_last_char(version)
}

/// Returns a version string that orders immediately below the input. This is
/// how a strict `<` bound becomes an inclusive maximum.
///
/// A lone negative final segment is decremented in place (`1.2.-1` to
/// `1.2.-2`) and a legacy `+` version falls back to its body (`1.0+` to
/// `1.0`, which orders below the `1.1pre` the marker stands for). Everything
/// else gains a trailing `.-1` segment, which always orders below a missing
/// segment.
///
/// # Examples
///
/// ```
/// use toolkit_versioning::decrement;
///
/// assert_eq!(decrement("1.2.3"), "1.2.3.-1");
/// assert_eq!(decrement("1.2.-1"), "1.2.-2");
/// assert_eq!(decrement("1.0+"), "1.0");
/// ```
pub fn decrement(version: &str) -> String {
    if let Some(plus) = legacy_plus(version) {
        return plus.body.to_owned();
    }

    let segment = final_segment(version);
    if let Some(number) = lone_negative(segment) {
        return with_final_segment(version, &(number - 1).to_string());
    }

    let sep = if version.ends_with('.') { "" } else { "." };
    format!("{version}{sep}-1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use core::cmp::Ordering;
    use rstest::*;

    #[test]
    fn test_increment() {
        let args = [
            ("1.2.3", "1.2.3.1"),
            ("1.2.3a", "1.2.3a1"),
            ("1.2.3pre", "1.2.3pre1"),
            ("1.2.3pre1", "1.2.3pre2"),
            ("1.2", "1.2.1"),
            ("1.2pre1a", "1.2pre1b"),
            ("1.2pre1pre", "1.2pre1prf"),
            ("1.2.-1", "1.2.0"),
            ("1.2.*", "1.2.*.1"),
            ("1..", "1..1"),
            ("1.-1", "1.0"),
            ("1.0+", "1.1"),
            ("*", "*.1"),
            ("", ".1"),
        ];

        for (version, expected) in args {
            assert_eq!(increment(version), expected, "version: {version:?}");
        }
    }

    #[test]
    fn test_decrement() {
        let args = [
            ("1.2.3", "1.2.3.-1"),
            ("1.2.3a", "1.2.3a.-1"),
            ("1.2.*", "1.2.*.-1"),
            ("1..", "1..-1"),
            ("1.2.-1", "1.2.-2"),
            ("1.-1", "1.-2"),
            ("1.0+", "1.0"),
            ("*", "*.-1"),
        ];

        for (version, expected) in args {
            assert_eq!(decrement(version), expected, "version: {version:?}");
        }
    }

    /// Well-formed versions covering every adjustment branch.
    #[fixture]
    fn corpus() -> Vec<&'static str> {
        vec![
            "1.2.3",
            "1.2.3a",
            "1.2.3pre",
            "1.2.3pre1",
            "1.2",
            "1.2pre1a",
            "1.2pre1pre",
            "1.2.-1",
            "1.2.*",
            "1..",
            "1.-1",
            "1.0+",
            "0",
            "*",
            "1.0pre10",
        ]
    }

    #[rstest]
    fn test_increment_orders_above(corpus: Vec<&'static str>) {
        for version in corpus {
            let bumped = increment(version);
            assert_eq!(
                compare(version, &bumped),
                Ordering::Less,
                "{version} vs {bumped}"
            );
        }
    }

    #[rstest]
    fn test_decrement_orders_below(corpus: Vec<&'static str>) {
        for version in corpus {
            let lowered = decrement(version);
            assert_eq!(
                compare(&lowered, version),
                Ordering::Less,
                "{lowered} vs {version}"
            );
        }
    }

    #[test]
    fn test_trailing_dash_ambiguity_unresolved() {
        // the grammar reads `a-` as one symbol run while the comparator reads
        // `-1` as a negative second number, so the bumped string orders below
        // its input. A long-standing quirk of the format, preserved as-is.
        assert_eq!(increment("1.1a-1"), "1.1a-2");
        assert_eq!(compare("1.1a-2", "1.1a-1"), Ordering::Less);

        // decrement's generic append is unaffected
        assert_eq!(decrement("1.1a-1"), "1.1a-1.-1");
        assert_eq!(compare("1.1a-1.-1", "1.1a-1"), Ordering::Less);
    }

    #[test]
    fn test_legacy_plus_recognition() {
        assert!(legacy_plus("1.0+").is_some());
        assert!(legacy_plus("37+").is_some());
        assert!(legacy_plus("1.2.3+").is_some());
        assert!(legacy_plus("+").is_none());
        assert!(legacy_plus("1.a+").is_none());
        assert!(legacy_plus("1..0+").is_none());
        assert!(legacy_plus("1.0").is_none());
        assert!(legacy_plus("1.0++").is_none());
    }
}
