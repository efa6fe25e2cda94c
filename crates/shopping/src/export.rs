//! Text renderings of a shopping list for copy, email and print.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::aggregation::AggregatedItem;
use crate::list::ShoppingList;

pub const DEFAULT_TITLE: &str = "Feast Together - Shopping List";

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Clipboard,
    Email,
    Print,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl ShoppingList {
    /// Terminal view grouped under category icons, with a checkbox per item.
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "🛒 {} items in {} categories\n\n",
            self.len(),
            self.categories().len()
        );

        for group in self.categories() {
            let _ = writeln!(text, "{} {}", group.category.icon(), group.category);
            for item in &group.items {
                let _ = writeln!(text, "  {}", checkbox_line(item));
            }
            text.push('\n');
        }

        text
    }

    /// Plain text with a checkbox per item, for pasting into notes apps.
    pub fn to_clipboard_text(&self, title: &str) -> String {
        let mut text = format!("🛒 {title}\n\n");

        for group in self.categories() {
            let _ = writeln!(text, "--- {} ---", group.category);
            for item in &group.items {
                let _ = writeln!(text, "{}", checkbox_line(item));
            }
            text.push('\n');
        }

        text
    }

    pub fn to_email(&self, title: &str) -> EmailDraft {
        let mut body = format!("{title}\n\n");

        for group in self.categories() {
            let _ = writeln!(body, "=== {} ===", group.category);
            for item in &group.items {
                let line = format!(
                    "• {} {}",
                    display_name(item),
                    item.quantity().unwrap_or_default()
                );
                let _ = writeln!(body, "{}", line.trim_end());
            }
            body.push('\n');
        }

        EmailDraft {
            subject: title.to_owned(),
            body,
        }
    }

    /// Printable listing with category icons and item counts.
    pub fn to_print(&self, title: &str) -> String {
        let mut text = format!("{title}\n\n");

        for group in self.categories() {
            let _ = writeln!(
                text,
                "{} {} ({} items)",
                group.category.icon(),
                group.category,
                group.items.len()
            );
            for item in &group.items {
                let mark = if item.checked { "[x]" } else { "[ ]" };
                let line = format!(
                    "  {mark} {:<28} {}",
                    display_name(item),
                    item.quantity().unwrap_or_default()
                );
                let _ = writeln!(text, "{}", line.trim_end());
            }
            text.push('\n');
        }

        text
    }

    /// Renders in `format`; emails come out as their mailto link.
    pub fn render(&self, format: ExportFormat, title: &str) -> String {
        match format {
            ExportFormat::Clipboard => self.to_clipboard_text(title),
            ExportFormat::Email => self.to_email(title).mailto_url(),
            ExportFormat::Print => self.to_print(title),
        }
    }
}

fn display_name(item: &AggregatedItem) -> String {
    capitalize(&item.name)
}

fn checkbox_line(item: &AggregatedItem) -> String {
    let mark = if item.checked { "☑" } else { "☐" };

    match item.quantity() {
        Some(quantity) => format!("{mark} {} ({quantity})", display_name(item)),
        None => format!("{mark} {}", display_name(item)),
    }
}

/// Upper-cases the first letter of every word ("olive oil" -> "Olive Oil").
pub fn capitalize(input: &str) -> String {
    let mut prev_is_word = false;

    input
        .chars()
        .map(|c| {
            let is_word = c.is_ascii_alphanumeric() || c == '_';
            let out = if is_word && !prev_is_word {
                c.to_ascii_uppercase()
            } else {
                c
            };
            prev_is_word = is_word;
            out
        })
        .collect()
}
