//! Category name constants and validation

use colored::Colorize;

/// Valid category names for --only and --skip options
pub const VALID_CATEGORIES: &[&str] = &["gender", "race", "age", "socioeconomic", "custom"];

/// Check if a category name is valid
pub fn is_valid_category(name: &str) -> bool {
    VALID_CATEGORIES.contains(&name)
}

/// Filter a list of categories, returning only valid ones and printing warnings for invalid ones
pub fn filter_valid_categories(categories: Vec<String>) -> Vec<String> {
    let mut valid = Vec::new();
    for category in categories {
        if is_valid_category(&category) {
            valid.push(category);
        } else {
            eprintln!(
                "{} Unknown category '{}' ignored. Valid categories: {}",
                "Warning:".yellow(),
                category.cyan(),
                VALID_CATEGORIES.join(", ").dimmed()
            );
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Category;

    #[test]
    fn test_valid_categories_match_enum() {
        assert_eq!(VALID_CATEGORIES.len(), Category::ALL.len());
        for category in Category::ALL {
            assert!(is_valid_category(category.as_str()));
        }
    }

    #[test]
    fn test_is_valid_category_returns_false_for_invalid() {
        assert!(!is_valid_category("religion"));
        assert!(!is_valid_category(""));
        assert!(!is_valid_category("GENDER")); // case-sensitive
        assert!(!is_valid_category("Age"));
    }

    #[test]
    fn test_filter_valid_categories_removes_invalid() {
        let input = vec![
            "gender".to_string(),
            "invalid".to_string(),
            "age".to_string(),
        ];
        let result = filter_valid_categories(input);
        assert_eq!(result, vec!["gender".to_string(), "age".to_string()]);
    }

    #[test]
    fn test_filter_valid_categories_all_invalid() {
        let input = vec!["invalid".to_string(), "unknown".to_string()];
        let result = filter_valid_categories(input);
        assert!(result.is_empty());
    }
}
