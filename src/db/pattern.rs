//! Search-pattern construction shared by the artist and album lookups.

/// Build a `GLOB` pattern that matches any text containing `needle`.
///
/// `GLOB` is case-sensitive, unlike SQLite's default `LIKE`, so "acc" does
/// not match "Accept". Glob metacharacters inside `needle` are wrapped in
/// single-character sets so they match literally.
pub fn substring_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('*');
    for ch in needle.chars() {
        match ch {
            '*' | '?' | '[' => {
                pattern.push('[');
                pattern.push(ch);
                pattern.push(']');
            }
            _ => pattern.push(ch),
        }
    }
    pattern.push('*');
    pattern
}

#[cfg(test)]
mod tests {
    use super::substring_pattern;

    #[test]
    fn wraps_plain_text_in_wildcards() {
        assert_eq!(substring_pattern("Acc"), "*Acc*");
    }

    #[test]
    fn escapes_glob_metacharacters() {
        assert_eq!(substring_pattern("a*b?[c]"), "*a[*]b[?][[]c]*");
    }
}
