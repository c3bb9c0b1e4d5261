//! Conversion between free-form elapsed-time strings and seconds.
//!
//! A missing or unreadable time is a normal state (the WOD has not been
//! completed yet), so both directions use `Option` instead of errors.

/// Parses `SS`, `MM:SS` or `HH:MM:SS` into seconds.
///
/// Each segment is trimmed and read as a (possibly fractional) decimal
/// prefix; segments that do not start with a number are dropped before the
/// shape is decided. With any segment count other than two or three the
/// first readable segment is taken as raw seconds.
///
/// ```
/// use scoring::duration::parse_duration;
///
/// assert_eq!(parse_duration(Some("3:45")), Some(225.0));
/// assert_eq!(parse_duration(Some("1:02:03")), Some(3723.0));
/// assert_eq!(parse_duration(Some("abc")), None);
/// ```
pub fn parse_duration(input: Option<&str>) -> Option<f64> {
    let input = input?;
    if input.is_empty() {
        return None;
    }

    let parts: Vec<f64> = input.split(':').filter_map(parse_leading_number).collect();

    match parts.as_slice() {
        [] => None,
        [hours, minutes, seconds] => Some(hours * 3600.0 + minutes * 60.0 + seconds),
        [minutes, seconds] => Some(minutes * 60.0 + seconds),
        [seconds, ..] => Some(*seconds),
    }
}

/// Renders seconds as `M:SS`.
///
/// Minutes are not wrapped into hours. The value is rounded to a whole
/// second before it is split, so the seconds part is always `00..=59`:
/// `65.7` renders `1:06` and `119.6` renders `2:00`, where splitting first
/// and rounding the remainder would give `1:60`.
pub fn format_duration(seconds: Option<f64>) -> Option<String> {
    let seconds = seconds.filter(|value| value.is_finite())?;
    let whole = seconds.round() as i64;

    Some(format!("{}:{:02}", whole.div_euclid(60), whole.rem_euclid(60)))
}

/// Reads the longest decimal number at the start of `segment`
/// (`"05s"` gives 5, `"x5"` gives nothing).
fn parse_leading_number(segment: &str) -> Option<f64> {
    let text = segment.trim();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_duration(Some("3:45")), Some(225.0));
        assert_eq!(parse_duration(Some(" 4 : 00 ")), Some(240.0));
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(parse_duration(Some("1:02:03")), Some(3723.0));
    }

    #[test]
    fn test_parse_raw_seconds() {
        assert_eq!(parse_duration(Some("95")), Some(95.0));
        assert_eq!(parse_duration(Some("61.5")), Some(61.5));
    }

    #[test]
    fn test_parse_fractional_segments() {
        assert_eq!(parse_duration(Some("2:30.5")), Some(150.5));
        assert_eq!(parse_duration(Some("0.5:00")), Some(30.0));
    }

    #[test]
    fn test_parse_absent_or_empty() {
        assert_eq!(parse_duration(None), None);
        assert_eq!(parse_duration(Some("")), None);
        assert_eq!(parse_duration(Some("   ")), None);
        assert_eq!(parse_duration(Some(":")), None);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_duration(Some("abc")), None);
        assert_eq!(parse_duration(Some("DNF")), None);
        assert_eq!(parse_duration(Some("inf")), None);
        assert_eq!(parse_duration(Some("NaN")), None);
    }

    #[test]
    fn test_parse_drops_unreadable_segments_before_choosing_shape() {
        // "abc" is dropped, leaving a single segment read as seconds
        assert_eq!(parse_duration(Some("abc:30")), Some(30.0));
        assert_eq!(parse_duration(Some("1:xx:30")), Some(90.0));
    }

    #[test]
    fn test_parse_leading_number_prefix() {
        assert_eq!(parse_duration(Some("4m:05s")), Some(245.0));
        assert_eq!(parse_duration(Some("5.:10")), Some(310.0));
    }

    #[test]
    fn test_parse_too_many_segments_uses_first() {
        assert_eq!(parse_duration(Some("1:2:3:4")), Some(1.0));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some(225.0)).as_deref(), Some("3:45"));
        assert_eq!(format_duration(Some(65.7)).as_deref(), Some("1:06"));
        assert_eq!(format_duration(Some(5.0)).as_deref(), Some("0:05"));
        assert_eq!(format_duration(Some(3723.0)).as_deref(), Some("62:03"));
    }

    #[test]
    fn test_format_carries_rounded_minute() {
        assert_eq!(format_duration(Some(119.6)).as_deref(), Some("2:00"));
    }

    #[test]
    fn test_format_missing_time() {
        assert_eq!(format_duration(None), None);
        assert_eq!(format_duration(Some(f64::NAN)), None);
        assert_eq!(format_duration(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_format_inverts_parse_for_minute_shapes() {
        let seconds = parse_duration(Some("12:07"));
        assert_eq!(format_duration(seconds).as_deref(), Some("12:07"));
    }
}
