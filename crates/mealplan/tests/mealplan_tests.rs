use std::sync::Arc;

use feast_group::GroupInput;
use feast_mealplan::{Command, CurrentPlan, RecipeSource, SampleRecipes, SearchQuery};
use feast_shared::{
    Error, MemoryRepository, Result,
    recipe::{Course, Recipe},
};
use rand::{SeedableRng, rngs::StdRng};

/// Only serves main courses.
struct MainsOnly(SampleRecipes);

#[async_trait::async_trait]
impl RecipeSource for MainsOnly {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>> {
        self.0.search(query).await
    }

    async fn find(&self, id: u64) -> Result<Option<Recipe>> {
        self.0.find(id).await
    }

    async fn random(&self, course: Course, tags: &[String], number: usize) -> Result<Vec<Recipe>> {
        if course != Course::MainCourse {
            return Ok(vec![]);
        }

        self.0.random(course, tags, number).await
    }
}

#[tokio::test]
async fn test_add_remove_clear() -> anyhow::Result<()> {
    let command = Command::new(MemoryRepository::default());
    let source = SampleRecipes::load()?;

    assert!(command.current().await?.is_empty());

    let salad = source.find(1008).await?.expect("caesar salad");
    let cake = source.find(1006).await?.expect("lava cake");

    assert_eq!(command.add_recipe(salad).await?, Course::Appetizer);
    assert_eq!(command.add_recipe(cake).await?, Course::Dessert);

    let titles: Vec<_> = command
        .current()
        .await?
        .recipes()
        .map(|r| r.title.to_owned())
        .collect();
    assert_eq!(titles, vec!["Caesar Salad", "Chocolate Lava Cake"]);

    let removed = command.remove_course(Course::Appetizer).await?;
    assert_eq!(removed.map(|r| r.id), Some(1008));
    assert!(command.remove_course(Course::Appetizer).await?.is_none());

    command.clear().await?;
    assert_eq!(command.current().await?, CurrentPlan::default());

    Ok(())
}

#[tokio::test]
async fn test_generate_fills_every_course() -> anyhow::Result<()> {
    let repository = Arc::new(MemoryRepository::default());
    let command = Command::new(repository.clone());
    let groups = feast_group::Command::new(repository);
    let source = SampleRecipes::load()?;
    let mut rng = StdRng::seed_from_u64(7);

    let group = groups
        .create(GroupInput {
            name: "Supper Club".to_owned(),
            size: 8,
            diets: vec!["vegan".to_owned()],
            theme: "Italian".to_owned(),
            notes: String::new(),
        })
        .await?;

    let plan = command.generate(Some(&group), &source, &mut rng).await?;

    assert!(plan.appetizer.as_ref().is_some_and(|r| r.has_dish_type("appetizer")));
    assert!(plan.main_course.as_ref().is_some_and(|r| r.has_dish_type("main course")));
    assert!(plan.dessert.as_ref().is_some_and(|r| r.has_dish_type("dessert")));
    assert_eq!(command.current().await?, plan);

    Ok(())
}

#[tokio::test]
async fn test_generate_leaves_courses_without_candidates_empty() -> anyhow::Result<()> {
    let command = Command::new(MemoryRepository::default());
    let source = MainsOnly(SampleRecipes::load()?);
    let mut rng = StdRng::seed_from_u64(1);

    let cake = source.find(1006).await?.expect("lava cake");
    command.add_recipe(cake).await?;

    let plan = command.generate(None, &source, &mut rng).await?;

    assert!(plan.appetizer.is_none());
    assert!(plan.main_course.is_some());
    assert!(plan.dessert.is_none());

    Ok(())
}

#[tokio::test]
async fn test_save_requires_recipes() -> anyhow::Result<()> {
    let command = Command::new(MemoryRepository::default());

    let err = command.save(None).await.unwrap_err();
    assert!(matches!(err, Error::Server(_)));
    assert_eq!(err.to_string(), "No recipes in the current plan to save.");
    assert!(command.list_saved().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_save_list_load_delete() -> anyhow::Result<()> {
    let repository = Arc::new(MemoryRepository::default());
    let command = Command::new(repository.clone());
    let groups = feast_group::Command::new(repository);
    let source = SampleRecipes::load()?;

    let group = groups
        .create(GroupInput {
            name: "Family".to_owned(),
            size: 4,
            ..Default::default()
        })
        .await?;

    command.add_recipe(source.find(1003).await?.expect("chicken")).await?;
    let first = command.save(None).await?;

    command.add_recipe(source.find(1007).await?.expect("sorbet")).await?;
    let second = command.save(Some(&group)).await?;

    assert_eq!(first.name, "Meal Plan");
    assert_eq!(first.group_name, "No Group");
    assert_eq!(second.name, "Family Meal Plan");
    assert_eq!(second.group_id.as_deref(), Some(group.id.as_str()));

    let ids: Vec<_> = command
        .list_saved()
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![second.id.to_owned(), first.id.to_owned()]);

    command.clear().await?;
    let loaded = command.load(&first.id).await?;
    assert_eq!(loaded.recipes().map(|r| r.id).collect::<Vec<_>>(), vec![1003]);
    assert_eq!(command.current().await?, loaded);

    command.delete(&first.id).await?;
    assert!(command.find(&first.id).await?.is_none());
    assert!(matches!(command.delete(&first.id).await, Err(Error::NotFound(_))));
    assert!(matches!(command.load(&first.id).await, Err(Error::NotFound(_))));

    Ok(())
}
