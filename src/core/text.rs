//! Wording helpers shared by messages and screens

/// "1 point", "3 points"
#[must_use]
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Uppercase the first letter, lowercase the rest
#[must_use]
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "point"), "1 point");
        assert_eq!(pluralize(0, "point"), "0 points");
        assert_eq!(pluralize(21, "point"), "21 points");
        assert_eq!(pluralize(3, "Pangram"), "3 Pangrams");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("grade"), "Grade");
        assert_eq!(title_case("éclair"), "Éclair");
        assert_eq!(title_case(""), "");
    }
}
