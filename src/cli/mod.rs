pub mod group;
pub mod plan;
pub mod recipes;
pub mod shopping;

use clap::ValueEnum;
use feast::Config;
use feast_db::SqliteRepository;
use feast_mealplan::SampleRecipes;
use feast_shared::recipe::Course;

/// What every subcommand works against.
pub struct Context {
    pub config: Config,
    pub repository: SqliteRepository,
    pub source: SampleRecipes,
}

impl Context {
    pub async fn open(config: Config) -> anyhow::Result<Self> {
        let pool = feast::connect(&config.database.url, config.database.max_connections).await?;

        Ok(Self {
            config,
            repository: SqliteRepository::new(pool),
            source: SampleRecipes::load()?,
        })
    }

    pub fn meal_plans(&self) -> feast_mealplan::Command<SqliteRepository> {
        feast_mealplan::Command::new(self.repository.clone())
    }

    pub fn groups(&self) -> feast_group::Command<SqliteRepository> {
        feast_group::Command::new(self.repository.clone())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CourseArg {
    Appetizer,
    MainCourse,
    Dessert,
}

impl From<CourseArg> for Course {
    fn from(value: CourseArg) -> Self {
        match value {
            CourseArg::Appetizer => Course::Appetizer,
            CourseArg::MainCourse => Course::MainCourse,
            CourseArg::Dessert => Course::Dessert,
        }
    }
}

/// Title case for course names and tags ("main course" -> "Main Course").
pub fn title_case(input: &str) -> String {
    feast_shopping::export::capitalize(input)
}
