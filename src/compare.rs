//! A three-way comparator over Toolkit version strings.
//!
//! The range logic never orders versions itself; everything routes through
//! [`compare`]. The algorithm replicates Mozilla's `nsVersionComparator`:
//! versions are dot-separated parts, each part decomposing into a signed
//! number, a string run, a second signed number, and a trailing string run.
//! A present string run marks a pre-release and orders *below* a missing
//! one, and a part that is exactly `*` takes the largest numeric value.

use core::cmp::Ordering;

/// Numeric value of a lone `*` part.
const WILDCARD_NUM: i64 = i32::MAX as i64;

#[derive(Debug, Default, PartialEq, Eq)]
struct VersionPart<'part> {
    num_a: i64,
    str_b: Option<&'part str>,
    num_c: i64,
    extra_d: Option<&'part str>,
}

/// Consumes an optionally-signed digit run from the front of `input`. With no
/// digits the value is 0 and nothing is consumed, matching `strtol`. The
/// value saturates instead of overflowing.
fn take_number(input: &str) -> (i64, &str) {
    let bytes = input.as_bytes();
    let digits_from = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = bytes[digits_from.min(bytes.len())..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return (0, input);
    }

    let mut value: i64 = 0;
    let end = digits_from + digits;
    for byte in &bytes[digits_from..end] {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if bytes[0] == b'-' {
        value = -value;
    }
    (value, &input[end..])
}

impl<'part> VersionPart<'part> {
    /// Decomposes one dot-part. A missing part parses from the empty string
    /// and comes out as the all-zero part, which is how `1.0` equals `1`.
    fn parse(part: &'part str) -> Self {
        let mut result = VersionPart::default();

        if part == "*" {
            result.num_a = WILDCARD_NUM;
            return result;
        }

        let (num_a, rest) = take_number(part);
        result.num_a = num_a;
        if rest.is_empty() {
            return result;
        }

        // a string run starting with `+` means "one past this, pre-release":
        // `0+` orders exactly like `1pre`
        if rest.starts_with('+') {
            result.num_a += 1;
            result.str_b = Some("pre");
            return result;
        }

        match rest.find(|c: char| c.is_ascii_digit() || c == '+' || c == '-') {
            None => result.str_b = Some(rest),
            Some(split) => {
                result.str_b = Some(&rest[..split]);
                let (num_c, extra) = take_number(&rest[split..]);
                result.num_c = num_c;
                if !extra.is_empty() {
                    result.extra_d = Some(extra);
                }
            }
        }
        result
    }

    fn cmp_part(&self, other: &Self) -> Ordering {
        self.num_a
            .cmp(&other.num_a)
            .then_with(|| cmp_presence(self.str_b, other.str_b))
            .then_with(|| self.num_c.cmp(&other.num_c))
            .then_with(|| cmp_presence(self.extra_d, other.extra_d))
    }
}

/// String sub-parts order with "present < missing": `1.0pre` is less than
/// `1.0`. Two present runs compare bytewise.
fn cmp_presence(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.cmp(b),
    }
}

/// Orders two Toolkit version strings.
///
/// Versions of different lengths are compared by padding the shorter with
/// zero parts, so `1.0` equals `1` but `1.-1` is less than `1`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use toolkit_versioning::compare;
///
/// assert_eq!(compare("1.0pre1", "1.0"), Ordering::Less);
/// assert_eq!(compare("1.0", "1.0.0.0"), Ordering::Equal);
/// assert_eq!(compare("1.10", "1.9"), Ordering::Greater);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut parts_a = a.split('.');
    let mut parts_b = b.split('.');
    loop {
        let (next_a, next_b) = (parts_a.next(), parts_b.next());
        if next_a.is_none() && next_b.is_none() {
            return Ordering::Equal;
        }
        let part_a = VersionPart::parse(next_a.unwrap_or(""));
        let part_b = VersionPart::parse(next_b.unwrap_or(""));
        let ordering = part_a.cmp_part(&part_b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}
