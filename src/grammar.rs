//! The token grammar: an optional comparator prefix followed by a version in
//! the Toolkit format.
//!
//! The grammar is regular, but instead of a regex dependency it is a
//! hand-written scanner over byte classes, so the permissive edge cases
//! (empty segments, the very wide symbol class, signed numbers) are explicit
//! and testable in isolation.

use core::fmt::{self, Display};

/// A comparison operator prefixing a version inside a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `>`, a strict lower bound.
    Gt,
    /// `>=`, an inclusive lower bound.
    GtEq,
    /// `<`, a strict upper bound.
    Lt,
    /// `<=`, an inclusive upper bound.
    LtEq,
}

impl Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Comparator::Gt => ">",
            Comparator::GtEq => ">=",
            Comparator::Lt => "<",
            Comparator::LtEq => "<=",
        };
        f.write_str(text)
    }
}

/// A symbol is any printable ASCII character except `.` and the digits.
/// Whitespace never reaches a segment because the input is token-split first.
pub(crate) fn is_symbol(byte: u8) -> bool {
    matches!(byte, b'!'..=b'~') && byte != b'.' && !byte.is_ascii_digit()
}

/// End offset of an optionally-signed digit run starting at `start`, or
/// `start` itself when there is none. A bare `-` is not a number; it is left
/// for the symbol scanner.
fn number_end(bytes: &[u8], start: usize) -> usize {
    let digits_from = if bytes.get(start) == Some(&b'-') {
        start + 1
    } else {
        start
    };
    let digits = bytes[digits_from.min(bytes.len())..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        start
    } else {
        digits_from + digits
    }
}

/// End offset of a symbol run starting at `start`.
fn symbols_end(bytes: &[u8], start: usize) -> usize {
    start
        + bytes[start..]
            .iter()
            .take_while(|&&byte| is_symbol(byte))
            .count()
}

/// The up-to-four sub-parts of one dot-segment: number, symbol run, number,
/// symbol run. Any of them may be absent; an empty segment has none.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SegmentParts<'seg> {
    pub(crate) num_a: Option<&'seg str>,
    pub(crate) str_b: Option<&'seg str>,
    pub(crate) num_c: Option<&'seg str>,
    pub(crate) str_d: Option<&'seg str>,
}

/// Matches a whole segment against the part shape with greedy sub-matches.
/// Returns the captured sub-parts, or `None` if characters are left over.
fn match_part(segment: &str) -> Option<SegmentParts<'_>> {
    let bytes = segment.as_bytes();
    let mut parts = SegmentParts::default();
    let mut pos = 0;

    let end = number_end(bytes, pos);
    if end > pos {
        parts.num_a = Some(&segment[pos..end]);
        pos = end;
    }
    let end = symbols_end(bytes, pos);
    if end > pos {
        parts.str_b = Some(&segment[pos..end]);
        pos = end;
    }
    let end = number_end(bytes, pos);
    if end > pos {
        parts.num_c = Some(&segment[pos..end]);
        pos = end;
    }
    let end = symbols_end(bytes, pos);
    if end > pos {
        parts.str_d = Some(&segment[pos..end]);
        pos = end;
    }

    (pos == bytes.len()).then_some(parts)
}

/// Anchored check of the version format: dot-separated segments, each holding
/// up to two (number, symbol-run) pairs. Empty segments are legal, so `"1.."`
/// and the empty string both pass.
pub(crate) fn is_version_format(input: &str) -> bool {
    input.split('.').all(|segment| match_part(segment).is_some())
}

/// Splits a leading comparator off a token. The comparator match is greedy:
/// `">=1"` is `>=` plus `"1"`, never `>` plus `"=1"`.
fn split_comparator(token: &str) -> (Option<Comparator>, &str) {
    let bytes = token.as_bytes();
    let eq_follows = bytes.get(1) == Some(&b'=');
    match bytes.first() {
        Some(b'>') if eq_follows => (Some(Comparator::GtEq), &token[2..]),
        Some(b'>') => (Some(Comparator::Gt), &token[1..]),
        Some(b'<') if eq_follows => (Some(Comparator::LtEq), &token[2..]),
        Some(b'<') => (Some(Comparator::Lt), &token[1..]),
        _ => (None, token),
    }
}

/// Recognizes a full token as `COMPARATOR? VERSION_FORMAT`, anchored at both
/// ends. On match, returns the comparator (if any) and the version substring.
///
/// Greedy comparator splitting is equivalent to the regex with backtracking:
/// prepending `>`/`<`/`=` to a valid version only extends or occupies its
/// first symbol run, so a token that fails with its comparator stripped can
/// never pass as a bare version.
pub(crate) fn recognize(token: &str) -> Option<(Option<Comparator>, &str)> {
    let (comparator, version) = split_comparator(token);
    is_version_format(version).then_some((comparator, version))
}

/// Final dot-segment of a version string. A trailing dot yields an empty
/// segment.
pub(crate) fn final_segment(version: &str) -> &str {
    match version.rfind('.') {
        Some(dot) => &version[dot + 1..],
        None => version,
    }
}

/// Decomposes the final segment of a version into its sub-parts. Matching is
/// suffix-anchored: the longest suffix of the segment that fully matches the
/// part shape wins. The empty suffix always matches, so this is total.
pub(crate) fn split_part_suffix(segment: &str) -> SegmentParts<'_> {
    segment
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(core::iter::once(segment.len()))
        .find_map(|start| match_part(&segment[start..]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let args = [
            ("", true),
            ("1.2.3", true),
            ("1..", true),
            ("1.2.*", true),
            ("-1", true),
            ("1.-1", true),
            ("1.0+", true),
            ("a", true),
            ("->1", true),  // symbol run, then number
            ("1a-1", true), // greedy symbol run swallows the dash
            ("=1.2.3", true),
            ("1a2b", true),
            ("1a2b3", false), // a third pair does not fit
            ("1 2", false),
            ("caf\u{e9}", false), // symbols are ASCII only
            ("1.2.3\t", false),
        ];

        for (input, passes) in args {
            assert_eq!(is_version_format(input), passes, "input: {input:?}");
        }
    }

    #[test]
    fn test_recognize() {
        let args = [
            ("1.2.3", Some((None, "1.2.3"))),
            (">1.2.3", Some((Some(Comparator::Gt), "1.2.3"))),
            (">=1.2.3", Some((Some(Comparator::GtEq), "1.2.3"))),
            ("<1.2.3", Some((Some(Comparator::Lt), "1.2.3"))),
            ("<=1.2.3", Some((Some(Comparator::LtEq), "1.2.3"))),
            (">=", Some((Some(Comparator::GtEq), ""))),
            (">-1", Some((Some(Comparator::Gt), "-1"))),
            ("*", Some((None, "*"))),
            ("-", Some((None, "-"))),
            (">1a2b3", None),
            ("1a2b3", None),
        ];

        for (token, expected) in args {
            assert_eq!(recognize(token), expected, "token: {token:?}");
        }
    }

    #[test]
    fn test_final_segment() {
        assert_eq!(final_segment("1.2.3"), "3");
        assert_eq!(final_segment("1"), "1");
        assert_eq!(final_segment("1.2."), "");
        assert_eq!(final_segment(""), "");
    }

    #[test]
    fn test_split_part_suffix() {
        let args = [
            ("3", (Some("3"), None, None, None)),
            ("3a", (Some("3"), Some("a"), None, None)),
            ("0+", (Some("0"), Some("+"), None, None)),
            ("-1", (Some("-1"), None, None, None)),
            ("*", (None, Some("*"), None, None)),
            ("2pre1a", (Some("2"), Some("pre"), Some("1"), Some("a"))),
            ("1a-1", (Some("1"), Some("a-"), Some("1"), None)),
            ("", (None, None, None, None)),
            // too long for one part: the longest matching suffix wins
            ("1a2b3c", (Some("2"), Some("b"), Some("3"), Some("c"))),
        ];

        for (segment, (num_a, str_b, num_c, str_d)) in args {
            let expected = SegmentParts {
                num_a,
                str_b,
                num_c,
                str_d,
            };
            assert_eq!(split_part_suffix(segment), expected, "segment: {segment:?}");
        }
    }
}
