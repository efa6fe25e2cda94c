use feast_group::Group;
use feast_shared::recipe::{Course, Recipe};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::infer_course;

/// The working plan: at most one recipe per course.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentPlan {
    pub appetizer: Option<Recipe>,
    pub main_course: Option<Recipe>,
    pub dessert: Option<Recipe>,
}

impl CurrentPlan {
    pub fn get(&self, course: Course) -> Option<&Recipe> {
        match course {
            Course::Appetizer => self.appetizer.as_ref(),
            Course::MainCourse => self.main_course.as_ref(),
            Course::Dessert => self.dessert.as_ref(),
        }
    }

    fn slot_mut(&mut self, course: Course) -> &mut Option<Recipe> {
        match course {
            Course::Appetizer => &mut self.appetizer,
            Course::MainCourse => &mut self.main_course,
            Course::Dessert => &mut self.dessert,
        }
    }

    /// Puts `recipe` in the `course` slot, returning the recipe it replaced.
    pub fn set(&mut self, course: Course, recipe: Recipe) -> Option<Recipe> {
        self.slot_mut(course).replace(recipe)
    }

    /// Adds `recipe` to the slot inferred from its dish types.
    pub fn add(&mut self, recipe: Recipe) -> Course {
        let course = infer_course(&recipe.dish_types);
        self.set(course, recipe);

        course
    }

    pub fn remove(&mut self, course: Course) -> Option<Recipe> {
        self.slot_mut(course).take()
    }

    /// Filled slots in course order.
    pub fn courses(&self) -> impl Iterator<Item = (Course, &Recipe)> {
        courses(&self.appetizer, &self.main_course, &self.dessert)
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.courses().map(|(_, recipe)| recipe)
    }

    pub fn is_empty(&self) -> bool {
        self.appetizer.is_none() && self.main_course.is_none() && self.dessert.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedMealPlan {
    pub id: String,
    pub name: String,
    pub group_id: Option<String>,
    pub group_name: String,
    pub appetizer: Option<Recipe>,
    pub main_course: Option<Recipe>,
    pub dessert: Option<Recipe>,
    pub created_at: i64,
}

impl SavedMealPlan {
    pub fn new(plan: &CurrentPlan, group: Option<&Group>) -> Self {
        let (name, group_id, group_name) = match group {
            Some(group) => (
                format!("{} Meal Plan", group.name),
                Some(group.id.to_owned()),
                group.name.to_owned(),
            ),
            None => ("Meal Plan".to_owned(), None, "No Group".to_owned()),
        };

        Self {
            id: Ulid::new().to_string(),
            name,
            group_id,
            group_name,
            appetizer: plan.appetizer.clone(),
            main_course: plan.main_course.clone(),
            dessert: plan.dessert.clone(),
            created_at: feast_shared::now(),
        }
    }

    /// `"<name> - <Month day, year>"`
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, feast_shared::format_date(self.created_at))
    }

    pub fn courses(&self) -> impl Iterator<Item = (Course, &Recipe)> {
        courses(&self.appetizer, &self.main_course, &self.dessert)
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.courses().map(|(_, recipe)| recipe)
    }

    pub fn to_current(&self) -> CurrentPlan {
        CurrentPlan {
            appetizer: self.appetizer.clone(),
            main_course: self.main_course.clone(),
            dessert: self.dessert.clone(),
        }
    }
}

fn courses<'a>(
    appetizer: &'a Option<Recipe>,
    main_course: &'a Option<Recipe>,
    dessert: &'a Option<Recipe>,
) -> impl Iterator<Item = (Course, &'a Recipe)> {
    [
        (Course::Appetizer, appetizer),
        (Course::MainCourse, main_course),
        (Course::Dessert, dessert),
    ]
    .into_iter()
    .filter_map(|(course, recipe)| recipe.as_ref().map(|r| (course, r)))
}
