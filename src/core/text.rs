/// Case-insensitive fuzzy comparison used by every match factor.
///
/// Two already-lowercased strings match when they are equal or when either
/// one contains the other. This is deliberately loose: "react" matches
/// "react.js", "bachelor" matches "bachelor of science".
#[inline]
pub fn fuzzy_eq(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

/// True when any entry of `haystack` fuzzy-matches `needle`.
/// All strings are expected to be lowercased already.
#[inline]
pub fn fuzzy_any(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|s| fuzzy_eq(s, needle))
}

/// Lowercase a list of strings for comparison
pub fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// Extract the year from a lenient "YYYY-MM" / "YYYY" date string.
///
/// Takes the text before the first '-', then its leading digit run.
/// Returns None when no numeric year prefix exists; callers skip such
/// entries rather than failing the whole computation.
pub fn parse_year(date: &str) -> Option<i32> {
    let head = date.split('-').next().unwrap_or("").trim_start();
    let end = head
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(head.len());
    if end == 0 {
        return None;
    }
    head[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzy_eq_exact() {
        assert!(fuzzy_eq("javascript", "javascript"));
    }

    #[test]
    fn test_fuzzy_eq_substring_either_direction() {
        assert!(fuzzy_eq("react.js", "react"));
        assert!(fuzzy_eq("react", "react.js"));
        assert!(!fuzzy_eq("java", "rust"));
    }

    #[test]
    fn test_fuzzy_eq_is_case_sensitive_by_contract() {
        // Callers lowercase first; the helper itself does not.
        assert!(!fuzzy_eq("React", "react"));
    }

    #[test]
    fn test_fuzzy_any() {
        let skills = vec!["javascript".to_string(), "react".to_string()];
        assert!(fuzzy_any(&skills, "react.js"));
        assert!(!fuzzy_any(&skills, "kubernetes"));
        assert!(!fuzzy_any(&[], "anything"));
    }

    #[test]
    fn test_parse_year_full_date() {
        assert_eq!(parse_year("2019-01"), Some(2019));
    }

    #[test]
    fn test_parse_year_bare_year() {
        assert_eq!(parse_year("2022"), Some(2022));
    }

    #[test]
    fn test_parse_year_trailing_junk() {
        assert_eq!(parse_year("2019ish-01"), Some(2019));
        assert_eq!(parse_year(" 2020-06"), Some(2020));
    }

    #[test]
    fn test_parse_year_malformed() {
        assert_eq!(parse_year("unknown"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("-2019"), None);
    }
}
