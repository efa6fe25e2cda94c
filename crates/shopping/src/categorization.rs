use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Category for grocery store organization
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Category {
    Produce,
    Dairy,
    #[strum(serialize = "Meat & Seafood")]
    #[serde(rename = "Meat & Seafood")]
    MeatAndSeafood,
    Bakery,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Produce => "🥬",
            Category::Dairy => "🧀",
            Category::MeatAndSeafood => "🥩",
            Category::Bakery => "🍞",
            Category::Pantry => "🫙",
            Category::Frozen => "🧊",
            Category::Beverages => "🥤",
            Category::Snacks => "🍿",
            Category::Other => "📦",
        }
    }
}

/// Aisle keywords per category. The first category with a matching keyword
/// wins, so the order of this table is part of the output contract.
const AISLE_KEYWORDS: [(Category, &[&str]); 8] = [
    (
        Category::Produce,
        &["produce", "fruit", "vegetable", "fresh", "herb"],
    ),
    (
        Category::Dairy,
        &["dairy", "milk", "cheese", "yogurt", "cream", "butter", "egg"],
    ),
    (
        Category::MeatAndSeafood,
        &[
            "meat", "poultry", "seafood", "fish", "chicken", "beef", "pork",
        ],
    ),
    (Category::Bakery, &["bakery", "bread", "baked"]),
    (
        Category::Pantry,
        &[
            "pantry",
            "canned",
            "pasta",
            "rice",
            "grain",
            "cereal",
            "baking",
            "spice",
            "oil",
            "vinegar",
            "condiment",
            "sauce",
            "seasoning",
        ],
    ),
    (Category::Frozen, &["frozen"]),
    (
        Category::Beverages,
        &["beverage", "drink", "juice", "tea", "coffee", "water"],
    ),
    (Category::Snacks, &["snack", "chip", "cracker", "nut"]),
];

/// Categorization Service
///
/// Stateless domain service that maps the aisle label a recipe attaches to
/// an ingredient onto a grocery store category.
pub struct CategorizationService;

impl CategorizationService {
    /// Categorize an ingredient by its aisle label
    ///
    /// Matching is a case-insensitive substring test against each category's
    /// keywords, in table order. Empty or unmatched aisles are `Other`.
    pub fn categorize(aisle: &str) -> Category {
        if aisle.is_empty() {
            return Category::Other;
        }

        let aisle = aisle.to_lowercase();

        AISLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| aisle.contains(kw)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }

    /// Same as [`categorize`](Self::categorize) for an optional aisle.
    pub fn categorize_opt(aisle: Option<&str>) -> Category {
        aisle.map_or(Category::Other, Self::categorize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_single_category_aisles() {
        assert_eq!(
            CategorizationService::categorize("Produce"),
            Category::Produce
        );
        assert_eq!(CategorizationService::categorize("Dairy"), Category::Dairy);
        assert_eq!(
            CategorizationService::categorize("Meat"),
            Category::MeatAndSeafood
        );
        assert_eq!(
            CategorizationService::categorize("Bakery/Bread"),
            Category::Bakery
        );
        assert_eq!(
            CategorizationService::categorize("Pasta and Rice"),
            Category::Pantry
        );
        assert_eq!(
            CategorizationService::categorize("Spices and Seasonings"),
            Category::Pantry
        );
        assert_eq!(
            CategorizationService::categorize("Frozen"),
            Category::Frozen
        );
        assert_eq!(
            CategorizationService::categorize("Tea and Coffee"),
            Category::Beverages
        );
        assert_eq!(
            CategorizationService::categorize("Savory Snacks"),
            Category::Snacks
        );
    }

    #[test]
    fn test_categorize_first_match_wins() {
        // "cheese" (Dairy) and "canned" (Pantry)
        assert_eq!(
            CategorizationService::categorize("Canned Cheese"),
            Category::Dairy
        );
        // "frozen" is checked after "fish"
        assert_eq!(
            CategorizationService::categorize("Frozen Fish"),
            Category::MeatAndSeafood
        );
        // "baking" is not a Bakery keyword
        assert_eq!(
            CategorizationService::categorize("Baking"),
            Category::Pantry
        );
        // "Oil, Vinegar, Salad Dressing" matches Pantry through "oil"
        assert_eq!(
            CategorizationService::categorize("Oil, Vinegar, Salad Dressing"),
            Category::Pantry
        );
        // "Nut butters" hits Dairy's "butter" before Snacks' "nut"
        assert_eq!(
            CategorizationService::categorize("Nut butters, Jams, and Honey"),
            Category::Dairy
        );
    }

    #[test]
    fn test_categorize_empty_or_unknown() {
        assert_eq!(CategorizationService::categorize(""), Category::Other);
        assert_eq!(CategorizationService::categorize_opt(None), Category::Other);
        assert_eq!(
            CategorizationService::categorize("Ethnic Foods"),
            Category::Other
        );
        assert_eq!(
            CategorizationService::categorize("Canned and Jarred"),
            Category::Pantry
        );
    }

    #[test]
    fn test_categorize_case_insensitive() {
        assert_eq!(
            CategorizationService::categorize("PRODUCE"),
            Category::Produce
        );
        assert_eq!(
            CategorizationService::categorize_opt(Some("mIlK, eggs")),
            Category::Dairy
        );
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Produce.as_str(), "Produce");
        assert_eq!(Category::MeatAndSeafood.as_str(), "Meat & Seafood");
        assert_eq!(Category::MeatAndSeafood.to_string(), "Meat & Seafood");
        assert_eq!(Category::Other.as_str(), "Other");
        assert_eq!(Category::VARIANTS.len(), 9);
    }

    #[test]
    fn test_every_category_has_an_icon() {
        for category in Category::VARIANTS {
            assert!(!category.icon().is_empty());
        }
        assert_eq!(Category::Other.icon(), "📦");
    }
}
