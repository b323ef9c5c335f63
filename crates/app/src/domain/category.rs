//! Product line categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two product lines carried by the shop.
///
/// The canonical labels are the branded "BE Natural" / "BE Custom" strings;
/// the lowercase short forms are accepted on input so query strings and
/// route segments stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "BE Natural", alias = "natural")]
    Natural,
    #[serde(rename = "BE Custom", alias = "custom")]
    Custom,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "BE Natural",
            Self::Custom => "BE Custom",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BE Natural" | "natural" => Ok(Self::Natural),
            "BE Custom" | "custom" => Ok(Self::Custom),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_branded_labels() {
        assert_eq!(
            "BE Natural".parse::<Category>().ok(),
            Some(Category::Natural)
        );
        assert_eq!("BE Custom".parse::<Category>().ok(), Some(Category::Custom));
        assert!("Gadgets".parse::<Category>().is_err());
    }

    #[test]
    fn parses_lowercase_short_forms() {
        assert_eq!("natural".parse::<Category>().ok(), Some(Category::Natural));
        assert_eq!("custom".parse::<Category>().ok(), Some(Category::Custom));
    }

    #[test]
    fn serde_uses_branded_labels() -> Result<(), serde_json::Error> {
        let category: Category = serde_json::from_str("\"BE Natural\"")?;
        assert_eq!(category, Category::Natural);

        let short: Category = serde_json::from_str("\"custom\"")?;
        assert_eq!(short, Category::Custom);

        assert_eq!(serde_json::to_string(&Category::Natural)?, "\"BE Natural\"");

        Ok(())
    }

    #[test]
    fn display_round_trips() {
        for category in [Category::Natural, Category::Custom] {
            assert_eq!(
                category.as_str().parse::<Category>().ok(),
                Some(category),
                "round trip failed for {category}"
            );
        }
    }
}
