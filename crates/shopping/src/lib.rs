pub mod aggregation;
pub mod categorization;
pub mod export;
pub mod list;

pub use aggregation::{AggregatedItem, merge_into};
pub use categorization::{CategorizationService, Category};
pub use export::{EmailDraft, ExportFormat};
pub use list::{CategoryGroup, ShoppingList};
