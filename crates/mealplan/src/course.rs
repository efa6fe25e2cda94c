use feast_shared::recipe::Course;

const APPETIZER_HINTS: [&str; 3] = ["appetizer", "starter", "salad"];

/// Picks the plan slot a recipe belongs to from its dish types.
///
/// Appetizer hints win over dessert; anything else is a main course.
pub fn infer_course(dish_types: &[String]) -> Course {
    let dish_types: Vec<String> = dish_types.iter().map(|t| t.to_lowercase()).collect();

    if dish_types
        .iter()
        .any(|t| APPETIZER_HINTS.iter().any(|hint| t.contains(hint)))
    {
        return Course::Appetizer;
    }

    if dish_types.iter().any(|t| t.contains("dessert")) {
        return Course::Dessert;
    }

    Course::MainCourse
}
