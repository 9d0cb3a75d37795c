//! # Non-Capturing Group Rewriting
//!
//! Tokenizers use whole-match semantics; capture groups in a user pattern
//! carry no meaning for them. [`to_non_capturing`] rewrites every plain
//! `( ... )` group as `(?: ... )`, leaving everything else alone.
//!
//! The scan is conservative, not a full parse. It understands:
//! * escapes: `\(` is a literal, as is anything else after `\`;
//! * character classes, including nested sets (`[a[^b]]`), POSIX classes
//!   (`[[:alpha:]]`), and a literal `]` directly after `[` or `[^`;
//! * `(?...` constructs: non-capturing, lookaround, named, atomic, and
//!   inline flag groups are never rewritten.
//!
//! Numeric backreferences (`\1`, `\k<1>`) count every capturing group, so
//! the rewrite renumbers them. A numeric backreference survives only when
//! every group up to its number is a named group opened before the first
//! rewritten group; such groups keep their numbers. Any other numeric
//! backreference in a rewritten pattern is refused. Named backreferences
//! always keep working.

use std::borrow::Cow;

use crate::errors::{PTResult, PatternError};

/// Rewrite the capturing groups of `pattern` as non-capturing groups.
///
/// ## Arguments
/// * `pattern` - The pattern to rewrite.
///
/// ## Returns
/// The rewritten pattern; borrowed when nothing needed rewriting.
///
/// ## Errors
/// [`PatternError::Backreference`] if at least one group was rewritten and
/// a numeric backreference would point at a different group afterwards.
pub fn to_non_capturing(pattern: &str) -> PTResult<Cow<'_, str>> {
    let scan = GroupScan::scan(pattern);

    if scan.rewrites.is_empty() {
        return Ok(Cow::Borrowed(pattern));
    }

    if let Some(&(offset, _)) = scan
        .backrefs
        .iter()
        .find(|&&(_, group)| group > scan.stable_named)
    {
        return Err(PatternError::Backreference {
            pattern: pattern.to_string(),
            offset,
        });
    }

    log::trace!(
        "rewrote {} capturing group(s) in pattern {:?}",
        scan.rewrites.len(),
        pattern
    );

    let mut out = String::with_capacity(pattern.len() + 2 * scan.rewrites.len());
    let mut last = 0;
    for &open in &scan.rewrites {
        out.push_str(&pattern[last..=open]);
        out.push_str("?:");
        last = open + 1;
    }
    out.push_str(&pattern[last..]);

    Ok(Cow::Owned(out))
}

/// Results of one pass over a pattern.
#[derive(Debug, Default, PartialEq)]
struct GroupScan {
    /// Byte offsets of each `(` that opens a capturing group.
    rewrites: Vec<usize>,

    /// Named groups opened before the first rewritten group.
    stable_named: usize,

    /// `(offset, group number)` of each numeric backreference.
    backrefs: Vec<(usize, usize)>,
}

impl GroupScan {
    fn scan(pattern: &str) -> Self {
        // All syntax is ASCII; bytes of multibyte chars never match below.
        let bytes = pattern.as_bytes();
        let mut result = Self::default();

        let mut class_depth = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => {
                    if class_depth == 0
                        && let Some(group) = numeric_backref(&bytes[i + 1..])
                    {
                        result.backrefs.push((i, group));
                    }
                    i += 2;
                    continue;
                }
                b'[' => {
                    class_depth += 1;
                    if class_depth == 1 {
                        i += 1;
                        if bytes.get(i) == Some(&b'^') {
                            i += 1;
                        }
                        // A leading ']' is a literal member.
                        if bytes.get(i) == Some(&b']') {
                            i += 1;
                        }
                        continue;
                    }
                }
                b']' if class_depth > 0 => {
                    class_depth -= 1;
                }
                b'(' if class_depth == 0 => {
                    let rest = &bytes[i + 1..];
                    if rest.first() != Some(&b'?') {
                        result.rewrites.push(i);
                    } else if result.rewrites.is_empty() && opens_named_group(rest) {
                        result.stable_named += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

/// Does the text following a `(` open a named group?
fn opens_named_group(rest: &[u8]) -> bool {
    match rest {
        [b'?', b'P', b'<', ..] => true,
        [b'?', b'<', next, ..] => *next != b'=' && *next != b'!',
        _ => false,
    }
}

/// The group number of a numeric backreference following a `\`, if any.
fn numeric_backref(rest: &[u8]) -> Option<usize> {
    let (digits, closed) = match rest {
        [b'1'..=b'9', ..] => (rest, true),
        [b'k', b'<', tail @ ..] => (tail, false),
        _ => return None,
    };

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 || (!closed && digits.get(len) != Some(&b'>')) {
        return None;
    }

    digits[..len]
        .iter()
        .try_fold(0usize, |n, &d| {
            n.checked_mul(10)?.checked_add(usize::from(d - b'0'))
        })
        .or(Some(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(pattern: &str) -> String {
        to_non_capturing(pattern).unwrap().into_owned()
    }

    #[test]
    fn test_group_free_is_borrowed() {
        for pattern in [r"\w+", r"\s*\n\s*\n\s*", r"\w+|[^\w\s]+", "", "abc"] {
            assert!(
                matches!(to_non_capturing(pattern).unwrap(), Cow::Borrowed(p) if p == pattern),
                "{pattern:?}"
            );
        }
    }

    #[test]
    fn test_rewrites_plain_groups() {
        assert_eq!(normalize(r"(a)(b)(c)"), r"(?:a)(?:b)(?:c)");
        assert_eq!(normalize(r"((a|b)+)c"), r"(?:(?:a|b)+)c");
        assert_eq!(normalize(r"x(y)*?z"), r"x(?:y)*?z");
    }

    #[test]
    fn test_leaves_special_groups() {
        for pattern in [
            r"(?:a)",
            r"a(?=b)",
            r"a(?!b)",
            r"(?<=a)b",
            r"(?<!a)b",
            r"(?P<word>\w+)",
            r"(?<word>\w+)",
            r"(?i)abc",
            r"(?i:abc)",
            r"(?>a+)b",
        ] {
            assert_eq!(normalize(pattern), pattern);
        }

        assert_eq!(normalize(r"(?P<w>(\w))+"), r"(?P<w>(?:\w))+");
    }

    #[test]
    fn test_leaves_escaped_parens() {
        assert_eq!(normalize(r"\(\w+\)"), r"\(\w+\)");
        assert_eq!(normalize(r"\\(a)"), r"\\(?:a)");
    }

    #[test]
    fn test_leaves_class_members() {
        assert_eq!(normalize(r"[(]+"), r"[(]+");
        assert_eq!(normalize(r"[^()]+(x)"), r"[^()]+(?:x)");
        assert_eq!(normalize(r"[]()](a)"), r"[]()](?:a)");
        assert_eq!(normalize(r"[^](](a)"), r"[^](](?:a)");
        assert_eq!(normalize(r"[[:alpha:](](a)"), r"[[:alpha:](](?:a)");
        assert_eq!(normalize(r"[a[^(]](b)"), r"[a[^(]](?:b)");
        assert_eq!(normalize(r"[\](](c)"), r"[\](](?:c)");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(normalize("(é)ß(ü)"), "(?:é)ß(?:ü)");
    }

    #[test]
    fn test_idempotent() {
        for pattern in [r"(a)(b)", r"((x))|(?:y)", r"[(](z)", r"(?P<n>(q))"] {
            let once = normalize(pattern);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_refuses_numeric_backreference() {
        let err = to_non_capturing(r"(a)\1").unwrap_err();
        assert!(matches!(
            &err,
            PatternError::Backreference { pattern, offset: 3 } if pattern == r"(a)\1"
        ));

        let err = to_non_capturing(r"(?P<x>a)(b)\k<2>").unwrap_err();
        assert!(matches!(err, PatternError::Backreference { offset: 11, .. }));

        // The named group is numbered after the rewritten one.
        let err = to_non_capturing(r"(b)(?P<x>a)\1").unwrap_err();
        assert!(matches!(err, PatternError::Backreference { offset: 11, .. }));
    }

    #[test]
    fn test_allows_backreference_to_leading_named_group() {
        assert_eq!(normalize(r"(?P<x>a)(b)\1"), r"(?P<x>a)(?:b)\1");
        assert_eq!(normalize(r"(?<x>a)(?:c)(b)\k<1>"), r"(?<x>a)(?:c)(?:b)\k<1>");
        assert_eq!(
            normalize(r"(?P<x>a)(?<=z)(?P<y>c)(b)\2"),
            r"(?P<x>a)(?<=z)(?P<y>c)(?:b)\2"
        );
    }

    #[test]
    fn test_allows_backreference_without_rewrites() {
        assert_eq!(normalize(r"(?P<x>a)\1"), r"(?P<x>a)\1");
        assert_eq!(normalize(r"(?P<x>a)(b)\k<x>"), r"(?P<x>a)(?:b)\k<x>");
        assert_eq!(normalize(r"(?P<x>a)(b)(?P=x)"), r"(?P<x>a)(?:b)(?P=x)");
    }

    #[test]
    fn test_escaped_digits_in_class_are_not_backreferences() {
        assert_eq!(normalize(r"(a)[\1]"), r"(?:a)[\1]");
        assert_eq!(normalize(r"(a)\\1"), r"(?:a)\\1");
    }
}
