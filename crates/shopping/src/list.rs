use std::collections::HashMap;

use feast_shared::recipe::{IngredientLine, Recipe};
use serde::{Deserialize, Serialize};

use crate::aggregation::{AggregatedItem, merge_into};
use crate::categorization::{CategorizationService, Category};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<AggregatedItem>,
}

/// Categorized, deduplicated shopping list.
///
/// Categories are ordered by name; items keep the order in which they were
/// first seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    categories: Vec<CategoryGroup>,
}

impl ShoppingList {
    /// Builds a list from recipes, taken in the given order.
    ///
    /// Returns `None` when the recipes carry no ingredients at all.
    pub fn build<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Option<Self> {
        Self::from_lines(
            recipes
                .into_iter()
                .flat_map(|recipe| recipe.ingredients.iter().cloned()),
        )
    }

    /// Builds a list from already extracted ingredient lines.
    ///
    /// Returns `None` when `lines` is empty.
    pub fn from_lines(lines: impl IntoIterator<Item = IngredientLine>) -> Option<Self> {
        let mut buckets: HashMap<Category, Vec<AggregatedItem>> = HashMap::new();
        let mut total = 0;

        for line in lines {
            let category = CategorizationService::categorize(&line.aisle);
            merge_into(buckets.entry(category).or_default(), line);
            total += 1;
        }

        if total == 0 {
            tracing::debug!("no ingredients to build a shopping list from");
            return None;
        }

        let mut categories: Vec<CategoryGroup> = buckets
            .into_iter()
            .map(|(category, items)| CategoryGroup { category, items })
            .collect();
        categories.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));

        let list = Self { categories };
        tracing::debug!(
            ingredients = total,
            items = list.len(),
            categories = list.categories.len(),
            "shopping list built"
        );

        Some(list)
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn items(&self) -> impl Iterator<Item = (Category, &AggregatedItem)> {
        self.categories
            .iter()
            .flat_map(|group| group.items.iter().map(|item| (group.category, item)))
    }

    pub fn get(&self, category: Category) -> Option<&[AggregatedItem]> {
        self.categories
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.items.as_slice())
    }

    pub fn find(&self, id: &str) -> Option<&AggregatedItem> {
        self.items().map(|(_, item)| item).find(|item| item.id == id)
    }

    /// Flips the checked mark of an item, returning its new state, or `None`
    /// if no item has this id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let item = self
            .categories
            .iter_mut()
            .flat_map(|group| group.items.iter_mut())
            .find(|item| item.id == id)?;

        item.checked = !item.checked;

        Some(item.checked)
    }

    /// Marks every item named `name` (ignoring ASCII case) as checked and
    /// returns how many matched.
    ///
    /// Items sharing a name but kept apart by unit or category are all
    /// marked. Checking an already checked item leaves it checked.
    pub fn check_named(&mut self, name: &str) -> usize {
        let name = name.trim();
        let mut matched = 0;

        for item in self
            .categories
            .iter_mut()
            .flat_map(|group| group.items.iter_mut())
            .filter(|item| item.name.eq_ignore_ascii_case(name))
        {
            item.checked = true;
            matched += 1;
        }

        matched
    }

    /// Number of items across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|group| group.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
