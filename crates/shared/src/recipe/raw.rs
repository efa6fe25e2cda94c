use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use super::{IngredientLine, Recipe};

/// Recipe record as served by the upstream recipe API.
///
/// Every field is optional and a value of the wrong type reads as missing;
/// [`Recipe::from`] fills the gaps.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRecipe {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ready_in_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub servings: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub diets: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub cuisines: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub dish_types: Vec<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub extended_ingredients: Vec<RawIngredient>,
    #[serde(deserialize_with = "lenient")]
    pub instructions: Option<String>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIngredient {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub original_name: Option<String>,
    pub amount: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub aisle: Option<String>,
}

/// Any value that does not fit `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).ok())
}

/// Keeps the elements that fit `T`; `null` or a non-array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect())
}

impl From<RawIngredient> for IngredientLine {
    fn from(raw: RawIngredient) -> Self {
        let name = [raw.name, raw.original_name]
            .into_iter()
            .flatten()
            .find(|n| !n.is_empty())
            .unwrap_or_else(|| "Unknown".to_owned());

        let amount = match raw.amount {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_amount(&s),
            _ => None,
        }
        .filter(|a| *a != 0.0);

        Self {
            name,
            amount,
            unit: raw.unit.unwrap_or_default(),
            aisle: raw.aisle.unwrap_or_default(),
        }
    }
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            image: raw.image.filter(|i| !i.is_empty()),
            ready_in_minutes: raw.ready_in_minutes,
            servings: raw.servings,
            summary: raw.summary.unwrap_or_default(),
            diets: raw.diets,
            cuisines: raw.cuisines,
            dish_types: raw.dish_types,
            ingredients: raw
                .extended_ingredients
                .into_iter()
                .map(IngredientLine::from)
                .collect(),
            instructions: raw.instructions.filter(|i| !i.is_empty()),
        }
    }
}

/// Reads the leading decimal number of `input` ("2 large" -> 2.0).
///
/// Returns `None` when the text does not start with a number.
pub fn parse_amount(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in input.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    input[..end].trim_end_matches('.').parse().ok()
}
