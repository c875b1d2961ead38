//! Character classes and section checks shared by the scanners.
//!
//! The scanners only decide where a section starts and ends; the checks that
//! apply once a section is closed live here.

use crate::error::SemVerErrorKind;
use crate::semver::SemVerSection;

/// Returns true for `[0-9A-Za-z-]`, the characters of a dotted identifier.
#[must_use]
pub(crate) const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Returns true if the identifier is a non-empty run of ASCII digits.
#[must_use]
pub(crate) fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true for a digit run like `01` (but not `0`).
#[must_use]
pub(crate) fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

/// Returns true while `text` can still grow into `token`.
#[must_use]
pub(crate) fn could_become(text: &str, token: &str) -> bool {
    token.starts_with(text)
}

/// Converts the digit run `input[start..end]` of a closed numeric section.
///
/// The scanner has already checked that the run holds only ASCII digits.
pub(crate) fn numeric_component(
    input: &str,
    start: usize,
    end: usize,
    section: SemVerSection,
) -> Result<u64, SemVerErrorKind> {
    let digits = &input[start..end];
    if digits.is_empty() {
        return Err(SemVerErrorKind::EmptyComponent { section });
    }
    if has_leading_zero(digits) {
        return Err(SemVerErrorKind::LeadingZero {
            section,
            position: start,
        });
    }
    // Only digits reach this point, so the sole failure is overflow.
    digits
        .parse()
        .map_err(|_| SemVerErrorKind::NumericOverflow {
            section,
            digits: digits.to_string(),
        })
}

/// Checks the dot placement of a closed pre-release or build section.
///
/// An empty section is valid. Otherwise every dot must sit between two
/// non-empty identifiers. With `strict_numeric`, purely numeric identifiers
/// may not have a leading zero.
pub(crate) fn dotted_identifiers(
    input: &str,
    start: usize,
    end: usize,
    section: SemVerSection,
    strict_numeric: bool,
) -> Result<(), SemVerErrorKind> {
    let text = &input[start..end];
    if text.is_empty() {
        return Ok(());
    }

    let mut offset = start;
    for identifier in text.split('.') {
        if identifier.is_empty() {
            let position = if offset == start { start } else { offset - 1 };
            return Err(SemVerErrorKind::MisplacedDot { section, position });
        }
        if strict_numeric && is_numeric(identifier) && has_leading_zero(identifier) {
            return Err(SemVerErrorKind::LeadingZero {
                section,
                position: offset,
            });
        }
        offset += identifier.len() + 1;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_chars() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('Z'));
        assert!(is_identifier_char('7'));
        assert!(is_identifier_char('-'));
        assert!(!is_identifier_char('.'));
        assert!(!is_identifier_char('_'));
        assert!(!is_identifier_char('é'));
    }

    #[test]
    fn leading_zero_only_for_multi_digit_runs() {
        assert!(!has_leading_zero("0"));
        assert!(has_leading_zero("00"));
        assert!(has_leading_zero("012"));
        assert!(!has_leading_zero("120"));
    }

    #[test]
    fn numeric_component_converts_digits() {
        assert_eq!(numeric_component("10.2.3", 0, 2, SemVerSection::Major), Ok(10));
    }

    #[test]
    fn numeric_component_empty_fails() {
        assert_eq!(
            numeric_component("1..3", 2, 2, SemVerSection::Minor),
            Err(SemVerErrorKind::EmptyComponent {
                section: SemVerSection::Minor
            })
        );
    }

    #[test]
    fn numeric_component_overflow_fails() {
        let input = "18446744073709551616";
        let result = numeric_component(input, 0, input.len(), SemVerSection::Patch);
        assert!(matches!(
            result,
            Err(SemVerErrorKind::NumericOverflow {
                section: SemVerSection::Patch,
                ..
            })
        ));
    }

    #[test]
    fn numeric_component_accepts_u64_max() {
        let input = "18446744073709551615";
        let result = numeric_component(input, 0, input.len(), SemVerSection::Patch);
        assert_eq!(result, Ok(u64::MAX));
    }

    fn dot(position: usize) -> Result<(), SemVerErrorKind> {
        Err(SemVerErrorKind::MisplacedDot {
            section: SemVerSection::PreRelease,
            position,
        })
    }

    #[test]
    fn dotted_identifiers_positions() {
        let s = SemVerSection::PreRelease;
        assert_eq!(dotted_identifiers(".a", 0, 2, s, true), dot(0));
        assert_eq!(dotted_identifiers("a.", 0, 2, s, true), dot(1));
        assert_eq!(dotted_identifiers("a..b", 0, 4, s, true), dot(1));
        assert_eq!(
            dotted_identifiers("a.01", 0, 4, s, true),
            Err(SemVerErrorKind::LeadingZero {
                section: s,
                position: 2
            })
        );
        assert_eq!(dotted_identifiers("a.01", 0, 4, SemVerSection::Build, false), Ok(()));
        assert_eq!(dotted_identifiers("", 0, 0, s, true), Ok(()));
    }
}
