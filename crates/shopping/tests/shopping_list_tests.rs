use feast_shared::recipe::{IngredientLine, RawRecipe, Recipe};
use feast_shopping::{Category, ShoppingList};

fn recipe(title: &str, ingredients: Vec<IngredientLine>) -> Recipe {
    Recipe {
        title: title.to_owned(),
        ingredients,
        ..Default::default()
    }
}

#[test]
fn test_main_course_and_dessert_end_to_end() {
    let main_course = recipe(
        "Pasta",
        vec![
            IngredientLine::new("garlic", 2.0, "cloves", "Produce"),
            IngredientLine::new("olive oil", 3.0, "tbsp", "Oil, Vinegar, Salad Dressing"),
        ],
    );
    let dessert = recipe(
        "Odd dessert",
        vec![IngredientLine::new("garlic", 1.0, "cloves", "Produce")],
    );

    let list = ShoppingList::build([&main_course, &dessert]).unwrap();
    let categories: Vec<_> = list.categories().iter().map(|g| g.category).collect();

    assert_eq!(categories, vec![Category::Pantry, Category::Produce]);

    let pantry = list.get(Category::Pantry).unwrap();
    assert_eq!(pantry.len(), 1);
    assert_eq!(pantry[0].name, "olive oil");
    assert_eq!(pantry[0].amount, Some(3.0));
    assert_eq!(pantry[0].unit, "tbsp");

    let produce = list.get(Category::Produce).unwrap();
    assert_eq!(produce.len(), 1);
    assert_eq!(produce[0].name, "garlic");
    assert_eq!(produce[0].amount, Some(3.0));
    assert_eq!(produce[0].unit, "cloves");
}

#[test]
fn test_empty_build_is_distinct_from_populated() {
    let empty = recipe("Nothing", vec![]);

    assert!(ShoppingList::build(std::iter::empty::<&Recipe>()).is_none());
    assert!(ShoppingList::build([&empty, &empty]).is_none());
    assert!(
        ShoppingList::build([
            &empty,
            &recipe("Toast", vec![IngredientLine::new("bread", 1.0, "slice", "")]),
        ])
        .is_some()
    );
}

#[test]
fn test_course_order_decides_display_name() {
    let appetizer = recipe(
        "Bruschetta",
        vec![IngredientLine::new("Garlic", 3.0, "cloves", "Produce")],
    );
    let main_course = recipe(
        "Chicken",
        vec![IngredientLine::new("garlic", 2.0, "cloves", "Produce")],
    );

    let list = ShoppingList::build([&appetizer, &main_course]).unwrap();
    let produce = list.get(Category::Produce).unwrap();

    assert_eq!(produce[0].name, "Garlic");
    assert_eq!(produce[0].amount, Some(5.0));

    let list = ShoppingList::build([&main_course, &appetizer]).unwrap();
    assert_eq!(list.get(Category::Produce).unwrap()[0].name, "garlic");
}

#[test]
fn test_upstream_json_to_shopping_list() {
    let raw: Vec<RawRecipe> = serde_json::from_str(
        r#"[
            {
                "id": 1006,
                "title": "Chocolate Lava Cake",
                "extendedIngredients": [
                    {"name": "dark chocolate", "amount": 4, "unit": "oz", "aisle": "Baking"},
                    {"name": "butter", "amount": 0.5, "unit": "cup", "aisle": "Dairy"},
                    {"name": "eggs", "amount": 2, "unit": "", "aisle": "Dairy"},
                    {"originalName": "pinch of salt"}
                ]
            },
            {
                "id": 1007,
                "title": "Mango Sorbet",
                "extendedIngredients": [
                    {"name": "frozen mango", "amount": 4, "unit": "cups", "aisle": "Frozen"},
                    {"name": "Eggs", "amount": "1", "aisle": "Dairy"}
                ]
            }
        ]"#,
    )
    .unwrap();
    let recipes: Vec<Recipe> = raw.into_iter().map(Recipe::from).collect();

    let list = ShoppingList::build(&recipes).unwrap();
    let categories: Vec<_> = list.categories().iter().map(|g| g.category).collect();

    assert_eq!(
        categories,
        vec![
            Category::Dairy,
            Category::Frozen,
            Category::Other,
            Category::Pantry
        ]
    );

    let dairy = list.get(Category::Dairy).unwrap();
    assert_eq!(dairy.len(), 2);
    assert_eq!(dairy[1].name, "eggs");
    assert_eq!(dairy[1].amount, Some(3.0));

    let other = list.get(Category::Other).unwrap();
    assert_eq!(other[0].name, "pinch of salt");
    assert_eq!(other[0].amount, None);
}

#[test]
fn test_item_ids_are_unique() {
    let list = ShoppingList::from_lines((0..20).map(|i| {
        IngredientLine::new(format!("item {i}"), 1.0, "", "Produce")
    }))
    .unwrap();

    let mut ids: Vec<_> = list.items().map(|(_, item)| item.id.clone()).collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 20);
}
