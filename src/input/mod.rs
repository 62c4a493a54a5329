//! Input sanitization for the countdown timer.
//!
//! User-supplied minutes and seconds arrive as arbitrary text. This module
//! turns that text into bounded non-negative integers: non-digit characters
//! are stripped, empty or non-numeric input becomes 0 (deliberate
//! permissiveness, never a validation error), over-60 seconds carry into
//! minutes, and minutes are clamped to the configured cap.

/// Strips non-digit characters and parses the rest as a non-negative integer.
///
/// Empty input, or input with no digits at all, yields 0. A leading minus
/// sign is a non-digit and is stripped, so "-5" parses as 5. Values beyond
/// `u32::MAX` saturate.
pub fn sanitize(raw: &str) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    // parse only fails on overflow here, since the string is all digits
    digits
        .parse::<u64>()
        .unwrap_or(u64::MAX)
        .min(u64::from(u32::MAX)) as u32
}

/// Sanitizes raw minutes/seconds input and normalizes the pair.
///
/// Seconds of 60 or more carry into whole minutes, then minutes are
/// clamped to `[0, max_minutes]`. The returned seconds are always below 60.
pub fn normalize(minutes_raw: &str, seconds_raw: &str, max_minutes: u32) -> (u32, u32) {
    let mut minutes = sanitize(minutes_raw);
    let mut seconds = sanitize(seconds_raw);

    if seconds >= 60 {
        minutes = minutes.saturating_add(seconds / 60);
        seconds %= 60;
    }

    if minutes > max_minutes {
        minutes = max_minutes;
    }

    (minutes, seconds)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod sanitize_tests {
        use super::*;

        #[test]
        fn test_plain_number() {
            assert_eq!(sanitize("42"), 42);
        }

        #[test]
        fn test_empty_is_zero() {
            assert_eq!(sanitize(""), 0);
        }

        #[test]
        fn test_non_numeric_is_zero() {
            assert_eq!(sanitize("abc"), 0);
            assert_eq!(sanitize("--"), 0);
            assert_eq!(sanitize("  "), 0);
        }

        #[test]
        fn test_mixed_text_keeps_digits() {
            assert_eq!(sanitize("1a2b3"), 123);
            assert_eq!(sanitize(" 4 5 "), 45);
        }

        #[test]
        fn test_negative_looking_input_strips_sign() {
            assert_eq!(sanitize("-5"), 5);
        }

        #[test]
        fn test_leading_zeros() {
            assert_eq!(sanitize("007"), 7);
        }

        #[test]
        fn test_oversized_input_saturates() {
            assert_eq!(sanitize("99999999999999999999999"), u32::MAX);
        }
    }

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_passthrough_in_range() {
            assert_eq!(normalize("1", "30", 99), (1, 30));
        }

        #[test]
        fn test_carry_over_60_seconds() {
            assert_eq!(normalize("1", "90", 99), (2, 30));
            assert_eq!(normalize("0", "60", 99), (1, 0));
            assert_eq!(normalize("0", "125", 99), (2, 5));
        }

        #[test]
        fn test_carry_formula() {
            // minutes' = minutes + floor(seconds / 60), seconds' = seconds % 60
            for (m, s) in [(0u32, 61u32), (3, 119), (10, 600), (0, 3599)] {
                let (nm, ns) = normalize(&m.to_string(), &s.to_string(), 99);
                assert_eq!(nm, (m + s / 60).min(99));
                assert_eq!(ns, s % 60);
            }
        }

        #[test]
        fn test_clamp_minutes_to_cap() {
            // configure(100, 0) with maxMinutes=99 -> 99 minutes
            assert_eq!(normalize("100", "0", 99), (99, 0));
            assert_eq!(normalize("5", "0", 3), (3, 0));
        }

        #[test]
        fn test_carry_then_clamp() {
            assert_eq!(normalize("99", "120", 99), (99, 0));
        }

        #[test]
        fn test_garbage_both_fields() {
            assert_eq!(normalize("xx", "", 99), (0, 0));
        }
    }
}
