//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("night quiet", 5), "night");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("ahoj", 10), "ahoj");
    }

    #[test]
    fn truncate_backs_up_to_char_boundary() {
        // 'á' is 2 bytes, cutting after "Pitn" + 1 byte lands inside it
        let s = "Pitná voda";
        assert_eq!(truncate_str(s, 5), "Pitn");
        assert_eq!(truncate_str(s, 6), "Pitná");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate_str("", 10), "");
    }
}
