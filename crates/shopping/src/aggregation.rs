use feast_shared::recipe::IngredientLine;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A shopping list line after merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedItem {
    pub id: String,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: String,
    /// Checked off while shopping. Never persisted.
    #[serde(skip)]
    pub checked: bool,
}

impl AggregatedItem {
    fn from_line(line: IngredientLine) -> Self {
        Self {
            id: Ulid::new().to_string(),
            name: line.name,
            amount: line.amount,
            unit: line.unit,
            checked: false,
        }
    }

    /// "3 cloves", or `None` when there is no amount to show.
    pub fn quantity(&self) -> Option<String> {
        let amount = self.amount.filter(|a| *a != 0.0)?;

        let quantity = format!("{} {}", format_amount(amount), self.unit);

        Some(quantity.trim_end().to_owned())
    }
}

/// Merges `incoming` into a category bucket.
///
/// The first entry whose name matches case-insensitively absorbs the
/// incoming amount when its unit is identical; absent amounts count as zero.
/// A differing unit, or no name match at all, appends a new entry.
pub fn merge_into(bucket: &mut Vec<AggregatedItem>, incoming: IngredientLine) {
    let name = incoming.name.to_lowercase();
    let existing = bucket.iter().position(|i| i.name.to_lowercase() == name);

    match existing {
        Some(index) if bucket[index].unit == incoming.unit => {
            let item = &mut bucket[index];
            item.amount = Some(item.amount.unwrap_or(0.0) + incoming.amount.unwrap_or(0.0));
        }
        _ => bucket.push(AggregatedItem::from_line(incoming)),
    }
}

/// Formats an amount without a trailing ".0" for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
