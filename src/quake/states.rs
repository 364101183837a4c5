/// Two-letter codes of the 48 contiguous states
pub const LOWER48_STATES: [&str; 48] = [
    "AL", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "ID", "IL", "IN", "IA", "KS", "KY", "LA",
    "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND",
    "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Whether `code` is an upper-case lower-48 state code
pub fn is_lower48(code: &str) -> bool {
    LOWER48_STATES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_allow_list_is_48_distinct_codes() {
        let unique: HashSet<_> = LOWER48_STATES.iter().collect();
        assert_eq!(unique.len(), 48);
        assert!(LOWER48_STATES
            .iter()
            .all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase())));
    }

    #[test]
    fn test_excludes_non_contiguous() {
        for code in ["AK", "HI", "DC", "PR", "ZZ", "ca"] {
            assert!(!is_lower48(code), "{} should not be accepted", code);
        }
        assert!(is_lower48("CA"));
        assert!(is_lower48("WY"));
    }
}
