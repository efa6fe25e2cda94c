use clap::Subcommand;
use feast::Config;
use feast_group::Group;
use feast_mealplan::{CurrentPlan, RecipeSource};
use feast_shared::recipe::{Course, Recipe};
use rand::{SeedableRng, rngs::StdRng};
use strum::VariantArray;

use super::{Context, CourseArg, recipes::summary_line, title_case};

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Show the current plan
    Show,
    /// Add a recipe; its course is inferred from its dish types
    Add {
        id: u64,

        /// Put the recipe in this course instead
        #[arg(long, value_enum)]
        course: Option<CourseArg>,
    },
    /// Remove a course from the current plan
    Remove {
        #[arg(value_enum)]
        course: CourseArg,
    },
    /// Empty the current plan
    Clear,
    /// Pick a random recipe for every course
    Generate {
        /// Use this group's diet and theme
        #[arg(long)]
        group: Option<String>,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Save the current plan
    Save {
        #[arg(long)]
        group: Option<String>,
    },
    /// List saved plans, newest first
    List,
    /// Replace the current plan with a saved one
    Load { id: String },
    /// Delete a saved plan
    Delete { id: String },
}

pub async fn run(config: Config, command: PlanCommand) -> anyhow::Result<()> {
    let ctx = Context::open(config).await?;
    let meal_plans = ctx.meal_plans();

    match command {
        PlanCommand::Show => print_plan(&meal_plans.current().await?),
        PlanCommand::Add { id, course } => {
            let recipe = find_recipe(&ctx, id).await?;
            let title = recipe.title.to_owned();
            let course = match course {
                Some(course) => {
                    let course = Course::from(course);
                    meal_plans.set(course, recipe).await?;
                    course
                }
                None => meal_plans.add_recipe(recipe).await?,
            };

            println!("\"{title}\" added as {}!", title_case(course.as_ref()));
        }
        PlanCommand::Remove { course } => {
            let course = Course::from(course);
            match meal_plans.remove_course(course).await? {
                Some(_) => println!("{} removed.", title_case(course.as_ref())),
                None => println!("No {course} selected"),
            }
        }
        PlanCommand::Clear => {
            meal_plans.clear().await?;
            println!("Current plan cleared.");
        }
        PlanCommand::Generate { group, seed } => {
            let group = find_group(&ctx, group.as_deref()).await?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let plan = meal_plans
                .generate(group.as_ref(), &ctx.source, &mut rng)
                .await?;

            println!("Meal plan generated! 🎉");
            print_plan(&plan);
        }
        PlanCommand::Save { group } => {
            let group = find_group(&ctx, group.as_deref()).await?;
            let saved = meal_plans.save(group.as_ref()).await?;

            println!("Meal plan saved! ({})", saved.id);
        }
        PlanCommand::List => {
            let plans = meal_plans.list_saved().await?;
            if plans.is_empty() {
                println!("No saved plans. Generate a meal plan, then save it for future reference.");
            }

            for plan in plans {
                println!("{}  {}", plan.id, plan.title());
                println!("  👥 {}", plan.group_name);
                for (course, recipe) in plan.courses() {
                    println!("  {} {}", course_icon(course), recipe.title);
                }
            }
        }
        PlanCommand::Load { id } => {
            let plan = meal_plans.load(&id).await?;

            println!("Meal plan loaded!");
            print_plan(&plan);
        }
        PlanCommand::Delete { id } => {
            meal_plans.delete(&id).await?;
            println!("Meal plan deleted.");
        }
    }

    Ok(())
}

async fn find_recipe(ctx: &Context, id: u64) -> anyhow::Result<Recipe> {
    match ctx.source.find(id).await? {
        Some(recipe) => Ok(recipe),
        None => anyhow::bail!("recipe {id} not found"),
    }
}

pub async fn find_group(ctx: &Context, id: Option<&str>) -> anyhow::Result<Option<Group>> {
    let Some(id) = id else {
        return Ok(None);
    };

    match ctx.groups().find(id).await? {
        Some(group) => Ok(Some(group)),
        None => anyhow::bail!("group {id} not found"),
    }
}

fn course_icon(course: Course) -> &'static str {
    match course {
        Course::Appetizer => "🥗",
        Course::MainCourse => "🍽️",
        Course::Dessert => "🍰",
    }
}

fn print_plan(plan: &CurrentPlan) {
    for course in Course::VARIANTS {
        match plan.get(*course) {
            Some(recipe) => println!(
                "{} {}: {}",
                course_icon(*course),
                title_case(course.as_ref()),
                summary_line(recipe)
            ),
            None => println!(
                "{} {}: No {course} selected",
                course_icon(*course),
                title_case(course.as_ref())
            ),
        }
    }
}
