mod helpers;

use feast_group::GroupInput;
use feast_mealplan::{RecipeSource, SampleRecipes};
use feast_shared::{Error, recipe::Course};
use feast_shopping::{Category, ExportFormat, ShoppingList};
use rand::{SeedableRng, rngs::StdRng};

#[tokio::test]
async fn test_generate_save_and_shop_from_saved_plan() -> anyhow::Result<()> {
    let db = helpers::setup_test_database().await?;
    let groups = feast_group::Command::new(db.repository.clone());
    let meal_plans = feast_mealplan::Command::new(db.repository.clone());
    let source = SampleRecipes::load()?;

    let group = groups
        .create(GroupInput {
            name: "Book Club".to_owned(),
            size: 6,
            diets: vec!["vegetarian".to_owned()],
            theme: "Italian".to_owned(),
            notes: "Two guests bring wine".to_owned(),
        })
        .await?;

    let mut rng = StdRng::seed_from_u64(42);
    let plan = meal_plans
        .generate(Some(&group), &source, &mut rng)
        .await?;
    assert_eq!(plan.recipes().count(), 3);

    let saved = meal_plans.save(Some(&group)).await?;
    assert_eq!(saved.name, "Book Club Meal Plan");

    meal_plans.clear().await?;
    assert!(meal_plans.current().await?.is_empty());

    let saved = meal_plans.find(&saved.id).await?.expect("saved plan");
    let list = ShoppingList::build(saved.recipes()).expect("ingredients");

    let names: Vec<_> = list.categories().iter().map(|g| g.category.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let text = list.render(ExportFormat::Clipboard, "Book Club");
    assert!(text.starts_with("🛒 Book Club\n\n"));

    Ok(())
}

#[tokio::test]
async fn test_shopping_list_merges_across_courses() -> anyhow::Result<()> {
    let db = helpers::setup_test_database().await?;
    let meal_plans = feast_mealplan::Command::new(db.repository.clone());
    let source = SampleRecipes::load()?;

    for id in [1001, 1005] {
        let recipe = source.find(id).await?.expect("sample recipe");
        meal_plans.add_recipe(recipe).await?;
    }

    let plan = meal_plans.current().await?;
    assert_eq!(
        plan.courses().map(|(c, r)| (c, r.id)).collect::<Vec<_>>(),
        vec![(Course::Appetizer, 1001), (Course::MainCourse, 1005)]
    );

    let list = ShoppingList::build(plan.recipes()).expect("ingredients");

    let produce = list.get(Category::Produce).expect("produce");
    let garlic = produce.iter().find(|i| i.name == "garlic").expect("garlic");
    assert_eq!(garlic.amount, Some(6.0));
    assert_eq!(garlic.unit, "cloves");

    assert!(produce.iter().any(|i| i.name == "tomatoes"));
    assert!(produce.iter().any(|i| i.name == "cherry tomatoes"));

    let pantry = list.get(Category::Pantry).expect("pantry");
    let oil = pantry.iter().find(|i| i.name == "olive oil").expect("olive oil");
    assert_eq!(oil.quantity().as_deref(), Some("6 tbsp"));

    let email = list.to_email("Shopping");
    assert!(email.body.contains("• Olive Oil 6 tbsp\n"));

    Ok(())
}

#[tokio::test]
async fn test_state_survives_reconnect() -> anyhow::Result<()> {
    let dir = temp_dir::TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("feast.db").display());
    let source = SampleRecipes::load()?;

    {
        let pool = feast::connect(&url, 1).await?;
        let meal_plans =
            feast_mealplan::Command::new(feast_db::SqliteRepository::new(pool.clone()));
        let recipe = source.find(1009).await?.expect("tacos");
        meal_plans.add_recipe(recipe).await?;
        meal_plans.save(None).await?;
        pool.close().await;
    }

    let pool = feast::connect(&url, 1).await?;
    let meal_plans = feast_mealplan::Command::new(feast_db::SqliteRepository::new(pool));

    assert_eq!(
        meal_plans.current().await?.main_course.map(|r| r.title),
        Some("Beef Tacos".to_owned())
    );
    let saved = meal_plans.list_saved().await?;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].group_name, "No Group");

    Ok(())
}

#[tokio::test]
async fn test_group_errors_surface_from_sqlite() -> anyhow::Result<()> {
    let db = helpers::setup_test_database().await?;
    let groups = feast_group::Command::new(db.repository.clone());

    let result = groups
        .create(GroupInput {
            name: String::new(),
            size: 4,
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(Error::Validate(_))));

    assert!(matches!(groups.delete("nope").await, Err(Error::NotFound(_))));

    Ok(())
}
