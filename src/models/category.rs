//! Fixed spending/income categories
//!
//! The category set is a closed enum rather than free-form text, so every
//! grouping match is checked for exhaustiveness at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Rent,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Self::Food,
        Self::Transport,
        Self::Rent,
        Self::Entertainment,
        Self::Utilities,
        Self::Other,
    ];

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Rent => "Rent",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
        }
    }

    /// Abbreviated name for narrow chart labels
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Trans",
            Self::Rent => "Rent",
            Self::Entertainment => "Ent",
            Self::Utilities => "Util",
            Self::Other => "Other",
        }
    }

    /// The category after this one, wrapping around (for selector widgets)
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The category before this one, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "rent" => Ok(Self::Rent),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Error returned when a string is not a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 6);
        for category in Category::ALL {
            // Round-trip through the display name
            assert_eq!(category.name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Transport ".parse::<Category>().unwrap(), Category::Transport);
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_selector_cycling() {
        assert_eq!(Category::Food.next(), Category::Transport);
        assert_eq!(Category::Other.next(), Category::Food);
        assert_eq!(Category::Food.prev(), Category::Other);
        assert_eq!(Category::Rent.prev(), Category::Transport);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }
}
