//! Bias categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of bias dimensions a rule can belong to.
///
/// `Custom` is reserved for user-defined rules that do not fit one of the
/// built-in dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gender,
    Race,
    Age,
    Socioeconomic,
    Custom,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 5] = [
        Category::Gender,
        Category::Race,
        Category::Age,
        Category::Socioeconomic,
        Category::Custom,
    ];

    /// Get category from its lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gender" => Some(Self::Gender),
            "race" => Some(Self::Race),
            "age" => Some(Self::Age),
            "socioeconomic" => Some(Self::Socioeconomic),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Get the lowercase name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Race => "race",
            Self::Age => "age",
            Self::Socioeconomic => "socioeconomic",
            Self::Custom => "custom",
        }
    }

    /// Name with the first letter capitalized, as shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Race => "Race",
            Self::Age => "Age",
            Self::Socioeconomic => "Socioeconomic",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrips_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_from_name_is_case_sensitive() {
        assert_eq!(Category::from_name("Gender"), None);
        assert_eq!(Category::from_name("religion"), None);
        assert_eq!(Category::from_name(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Socioeconomic).unwrap();
        assert_eq!(json, "\"socioeconomic\"");
        let parsed: Category = serde_json::from_str("\"age\"").unwrap();
        assert_eq!(parsed, Category::Age);
    }

    #[test]
    fn test_display_name_is_capitalized() {
        assert_eq!(Category::Race.display_name(), "Race");
        assert_eq!(Category::Gender.to_string(), "gender");
    }
}
