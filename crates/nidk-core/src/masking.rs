//! Display redaction for identity numbers (DPDPA data minimization).
//!
//! Callers mask every identity number before it reaches a UI record or an
//! audit-log entity description, so the raw value is never persisted or
//! rendered in full. Masking performs no validation: it is a best-effort
//! transform that degrades gracefully on malformed or legacy data.

/// Redacts an identity number for display, keeping only the last 4 characters.
///
/// Policy, by character count of the input:
///
/// | Length       | Output                                              |
/// |--------------|-----------------------------------------------------|
/// | < 4          | input unchanged (nothing left to redact safely)     |
/// | exactly 12   | `"XXXX XXXX dddd"` — canonical Aadhaar display form |
/// | any other ≥ 4| all but the last 4 characters replaced with `X`     |
///
/// The transform is pure and total: no validation, no panic, any string in,
/// a string out. It operates on `char` boundaries so arbitrary legacy input
/// (including non-ASCII) cannot split a code point.
///
/// Masking an already-masked string is out of contract — this is a
/// display-layer operation invoked once on raw data.
///
/// # Examples
///
/// ```
/// use nidk_core::masking::mask_identity_number;
///
/// assert_eq!(mask_identity_number("123456789012"), "XXXX XXXX 9012");
/// assert_eq!(mask_identity_number("1234567890"), "XXXXXX7890");
/// assert_eq!(mask_identity_number("123"), "123");
/// assert_eq!(mask_identity_number(""), "");
/// ```
pub fn mask_identity_number(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    if len < 4 {
        return raw.to_owned();
    }

    let tail: String = chars[len - 4..].iter().collect();
    if len == 12 {
        format!("XXXX XXXX {tail}")
    } else {
        let mut out = "X".repeat(len - 4);
        out.push_str(&tail);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A full 12-digit number gets the grouped Aadhaar display form.
    #[test]
    fn mask_full_identity_number() {
        assert_eq!(mask_identity_number("123456789012"), "XXXX XXXX 9012");
        assert_eq!(mask_identity_number("499118665246"), "XXXX XXXX 5246");
    }

    /// The masked form never contains the first 8 original digits, either as
    /// the full prefix or individually when they do not recur in the tail.
    #[test]
    fn mask_never_leaks_prefix() {
        let masked = mask_identity_number("123456789012");
        assert!(!masked.contains("12345678"));

        // A fixture whose tail shares no digit with its prefix: every prefix
        // digit must be gone entirely.
        let masked = mask_identity_number("123456780000");
        assert_eq!(masked, "XXXX XXXX 0000");
        for digit in ['1', '2', '3', '4', '5', '6', '7', '8'] {
            assert!(!masked.contains(digit), "masked output leaks '{digit}'");
        }
    }

    /// Inputs below 4 characters pass through unchanged.
    #[test]
    fn mask_short_input_passthrough() {
        assert_eq!(mask_identity_number("123"), "123");
        assert_eq!(mask_identity_number("12"), "12");
        assert_eq!(mask_identity_number("7"), "7");
    }

    /// The empty string passes through unchanged.
    #[test]
    fn mask_empty_input() {
        assert_eq!(mask_identity_number(""), "");
    }

    /// Exactly 4 characters: nothing precedes the last 4, so no `X` appears.
    #[test]
    fn mask_exactly_four_chars() {
        assert_eq!(mask_identity_number("1234"), "1234");
    }

    /// Intermediate lengths get the ungrouped X-prefix form.
    #[test]
    fn mask_intermediate_lengths() {
        assert_eq!(mask_identity_number("12345"), "X2345");
        assert_eq!(mask_identity_number("1234567890"), "XXXXXX7890");
        assert_eq!(mask_identity_number("1234567890123456"), "XXXXXXXXXXXX3456");
    }

    /// Only exact length 12 receives the space-grouped form.
    #[test]
    fn mask_grouping_only_at_twelve() {
        assert!(!mask_identity_number("1234567890123").contains(' '));
        assert!(!mask_identity_number("12345678901").contains(' '));
    }

    /// Non-digit and non-ASCII input is masked per the same length rules,
    /// without panicking on multi-byte characters.
    #[test]
    fn mask_arbitrary_legacy_input() {
        assert_eq!(mask_identity_number("abcd-efgh"), "XXXXXefgh");
        // 12 Devanagari digits: grouped form, last 4 chars preserved.
        assert_eq!(mask_identity_number("४९९११८६६५२४६"), "XXXX XXXX ५२४६");
    }
}
