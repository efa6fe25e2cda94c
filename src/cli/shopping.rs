use clap::ValueEnum;
use feast::Config;
use feast_shopping::{ExportFormat, ShoppingList};

use super::Context;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    List,
    Clipboard,
    Email,
    Print,
}

pub async fn run(
    config: Config,
    plan: Option<String>,
    format: FormatArg,
    checked: Vec<String>,
) -> anyhow::Result<()> {
    let ctx = Context::open(config).await?;
    let meal_plans = ctx.meal_plans();

    let list = match plan.as_deref() {
        Some(id) => {
            let Some(saved) = meal_plans.find(id).await? else {
                anyhow::bail!("meal plan {id} not found");
            };
            ShoppingList::build(saved.recipes())
        }
        None => {
            let current = meal_plans.current().await?;
            if current.is_empty() {
                println!("Add recipes to your plan first.");
                return Ok(());
            }
            ShoppingList::build(current.recipes())
        }
    };

    let Some(mut list) = list else {
        println!("No ingredients found in this meal plan.");
        return Ok(());
    };

    for name in &checked {
        if list.check_named(name) == 0 {
            tracing::warn!(%name, "no such item on the shopping list");
        }
    }

    let title = &ctx.config.export.title;

    match format {
        FormatArg::List => print!("{}", list.to_text()),
        FormatArg::Clipboard => print!("{}", list.render(ExportFormat::Clipboard, title)),
        FormatArg::Email => {
            let draft = list.to_email(title);
            println!("Subject: {}\n", draft.subject);
            print!("{}", draft.body);
            println!("{}", draft.mailto_url());
        }
        FormatArg::Print => print!("{}", list.render(ExportFormat::Print, title)),
    }

    Ok(())
}
