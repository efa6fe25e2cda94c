mod raw;

pub use raw::{RawIngredient, RawRecipe, parse_amount};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// A slot in a meal plan.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
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
pub enum Course {
    #[strum(serialize = "appetizer")]
    #[serde(rename = "appetizer")]
    Appetizer,
    #[default]
    #[strum(serialize = "main course")]
    #[serde(rename = "main course")]
    MainCourse,
    #[strum(serialize = "dessert")]
    #[serde(rename = "dessert")]
    Dessert,
}

/// One ingredient occurrence of a recipe.
///
/// `name` is never empty once built through [`RawIngredient`]; an empty
/// `unit` means "no unit".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub aisle: String,
}

impl IngredientLine {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<Option<f64>>,
        unit: impl Into<String>,
        aisle: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
            aisle: aisle.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub dish_types: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Recipe {
    /// True when any dish type contains `needle`, ignoring case.
    pub fn has_dish_type(&self, needle: &str) -> bool {
        contains_ignore_case(&self.dish_types, needle)
    }

    pub fn has_diet(&self, needle: &str) -> bool {
        contains_ignore_case(&self.diets, needle)
    }

    pub fn has_cuisine(&self, needle: &str) -> bool {
        contains_ignore_case(&self.cuisines, needle)
    }
}

fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    values.iter().any(|v| v.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_course_names() {
        assert_eq!(Course::MainCourse.to_string(), "main course");
        assert_eq!(Course::from_str("dessert").unwrap(), Course::Dessert);
        assert_eq!(
            serde_json::to_string(&Course::Appetizer).unwrap(),
            "\"appetizer\""
        );
        assert_eq!(Course::VARIANTS.len(), 3);
    }

    #[test]
    fn test_dish_type_matching_is_case_insensitive() {
        let recipe = Recipe {
            dish_types: vec!["Main Course".to_owned(), "dinner".to_owned()],
            diets: vec!["gluten free".to_owned()],
            ..Default::default()
        };

        assert!(recipe.has_dish_type("main course"));
        assert!(recipe.has_dish_type("MAIN"));
        assert!(!recipe.has_dish_type("dessert"));
        assert!(recipe.has_diet("Gluten"));
        assert!(!recipe.has_cuisine("italian"));
    }
}
