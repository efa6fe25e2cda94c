use clap::Subcommand;
use feast::Config;
use feast_mealplan::{RecipeSource, SearchQuery, infer_course};
use feast_shared::recipe::{Course, Recipe};
use feast_shopping::aggregation::format_amount;

use super::{Context, CourseArg, title_case};

#[derive(Subcommand)]
pub enum RecipesCommand {
    /// Search recipes by text, diet, cuisine or course
    Search {
        /// Matches title, summary and ingredient names
        query: Option<String>,

        #[arg(long)]
        diet: Option<String>,

        #[arg(long)]
        cuisine: Option<String>,

        #[arg(long, value_enum)]
        course: Option<CourseArg>,
    },
    /// Show a recipe with its ingredients and instructions
    Show { id: u64 },
}

pub async fn run(config: Config, command: RecipesCommand) -> anyhow::Result<()> {
    let ctx = Context::open(config).await?;

    match command {
        RecipesCommand::Search {
            query,
            diet,
            cuisine,
            course,
        } => {
            let query = SearchQuery {
                query,
                diet,
                cuisine,
                dish_type: course.map(|c| Course::from(c).to_string()),
            };
            let recipes = ctx.source.search(&query).await?;

            tracing::debug!(?query, found = recipes.len(), "recipe search");

            if recipes.is_empty() {
                println!("No recipes found. Try adjusting your search terms or filters.");
                return Ok(());
            }

            for recipe in &recipes {
                println!("{}", summary_line(recipe));
            }
        }
        RecipesCommand::Show { id } => {
            let Some(recipe) = ctx.source.find(id).await? else {
                anyhow::bail!("recipe {id} not found");
            };

            print!("{}", details(&recipe));
        }
    }

    Ok(())
}

pub fn summary_line(recipe: &Recipe) -> String {
    format!(
        "#{:<6} {} [{}] {} min, {} servings",
        recipe.id,
        recipe.title,
        title_case(infer_course(&recipe.dish_types).as_ref()),
        display_number(recipe.ready_in_minutes),
        display_number(recipe.servings),
    )
}

fn display_number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "?".to_owned())
}

fn details(recipe: &Recipe) -> String {
    let mut out = format!("{}\n", recipe.title);
    out.push_str(&format!(
        "{} min · {} servings\n",
        display_number(recipe.ready_in_minutes),
        display_number(recipe.servings)
    ));

    for (label, values) in [
        ("Diets", &recipe.diets),
        ("Cuisines", &recipe.cuisines),
        ("Dish types", &recipe.dish_types),
    ] {
        if !values.is_empty() {
            let values: Vec<_> = values.iter().map(|v| title_case(v)).collect();
            out.push_str(&format!("{label}: {}\n", values.join(", ")));
        }
    }

    if !recipe.summary.is_empty() {
        out.push_str(&format!("\n{}\n", recipe.summary));
    }

    out.push_str("\nIngredients:\n");
    for ing in &recipe.ingredients {
        let amount = ing.amount.map(format_amount).unwrap_or_default();
        let parts: Vec<&str> = [amount.as_str(), ing.unit.as_str(), ing.name.as_str()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        out.push_str(&format!("  - {}\n", parts.join(" ")));
    }

    if let Some(instructions) = recipe.instructions.as_deref().filter(|i| !i.is_empty()) {
        out.push_str(&format!("\nInstructions:\n{instructions}\n"));
    }

    out
}
