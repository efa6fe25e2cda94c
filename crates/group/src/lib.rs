mod command;

pub use command::*;

use serde::{Deserialize, Serialize};

/// A dinner party profile used to steer meal plan generation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub size: u32,
    #[serde(default)]
    pub diets: Vec<String>,
    #[serde(default)]
    pub theme: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Group {
    /// The diet used when searching recipes for this group.
    pub fn primary_diet(&self) -> Option<&str> {
        self.diets.first().map(String::as_str).filter(|d| !d.is_empty())
    }

    pub fn theme(&self) -> Option<&str> {
        Some(self.theme.as_str()).filter(|t| !t.is_empty())
    }
}
