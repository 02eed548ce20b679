/// Case-insensitive substring test.
///
/// An empty pattern is a substring of everything.
pub fn contains_ignore_case(text: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&pattern.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_anything() {
        assert!(contains_ignore_case("Alice", ""));
        assert!(contains_ignore_case("", ""));
    }

    #[test]
    fn matches_regardless_of_case() {
        assert!(contains_ignore_case("Alfred", "al"));
        assert!(contains_ignore_case("alfred", "AL"));
        assert!(contains_ignore_case("Carol", "ROL"));
    }

    #[test]
    fn matches_inside_the_name() {
        assert!(contains_ignore_case("Mary Ann Smith", "ann s"));
        assert!(!contains_ignore_case("Bob", "al"));
        assert!(!contains_ignore_case("", "a"));
    }

    #[test]
    fn folds_non_ascii_letters() {
        assert!(contains_ignore_case("Ödön", "ÖDÖ"));
    }
}
