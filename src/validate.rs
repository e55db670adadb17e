use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Dotted-quad shape: four dot-separated groups of one to three digits.
    /// Octet ranges are not checked, so "999.999.999.999" is accepted.
    static ref ADDRESS_REGEX: Regex = Regex::new(r"^(\d{1,3}\.){3}\d{1,3}$").unwrap();
}

/// Returns true iff `candidate` has the dotted-quad shape.
pub fn validate_address(candidate: &str) -> bool {
    ADDRESS_REGEX.is_match(candidate)
}

/// Parses a host count the way the submission form does: leading whitespace
/// is skipped and the longest leading decimal prefix is taken, so "50abc"
/// parses to 50. Returns `None` when no numeric prefix exists or the value
/// is not strictly positive.
pub fn validate_host_count(raw: &str) -> Option<i64> {
    parse_leading_int(raw).filter(|n| *n > 0)
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits = s.len() - s.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let value: i64 = s[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
