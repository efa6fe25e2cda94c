use feast_group::Group;
use feast_shared::{
    Collection, Document, Error, Repository, Result,
    recipe::{Course, Recipe},
};
use rand::{Rng, seq::IndexedRandom};
use strum::VariantArray;

use crate::{CurrentPlan, RecipeSource, SavedMealPlan};

const CURRENT_PLAN_ID: &str = "current";
const RANDOM_CANDIDATES: usize = 3;

#[derive(Clone)]
pub struct Command<R> {
    repository: R,
}

impl<R: Repository> Command<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn current(&self) -> Result<CurrentPlan> {
        self.repository
            .get(Collection::Session, CURRENT_PLAN_ID)
            .await?
            .map(Document::decode)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    async fn save_current(&self, plan: &CurrentPlan) -> Result<()> {
        self.repository
            .save(Collection::Session, Document::new(CURRENT_PLAN_ID, plan)?)
            .await
    }

    /// Adds `recipe` to the slot matching its dish types.
    pub async fn add_recipe(&self, recipe: Recipe) -> Result<Course> {
        let mut plan = self.current().await?;
        let title = recipe.title.to_owned();
        let course = plan.add(recipe);
        self.save_current(&plan).await?;

        tracing::info!(%course, %title, "recipe added to plan");

        Ok(course)
    }

    pub async fn set(&self, course: Course, recipe: Recipe) -> Result<()> {
        let mut plan = self.current().await?;
        plan.set(course, recipe);

        self.save_current(&plan).await
    }

    pub async fn remove_course(&self, course: Course) -> Result<Option<Recipe>> {
        let mut plan = self.current().await?;
        let removed = plan.remove(course);
        self.save_current(&plan).await?;

        Ok(removed)
    }

    pub async fn clear(&self) -> Result<()> {
        self.repository
            .delete(Collection::Session, CURRENT_PLAN_ID)
            .await?;

        Ok(())
    }

    /// Replaces the current plan with one random recipe per course.
    pub async fn generate<S: RecipeSource + ?Sized>(
        &self,
        group: Option<&Group>,
        source: &S,
        rng: &mut impl Rng,
    ) -> Result<CurrentPlan> {
        let mut plan = CurrentPlan::default();

        for course in Course::VARIANTS {
            let tags = generation_tags(*course, group);
            let candidates = source.random(*course, &tags, RANDOM_CANDIDATES).await?;

            match candidates.choose(rng) {
                Some(recipe) => {
                    plan.set(*course, recipe.clone());
                }
                None => tracing::warn!(%course, ?tags, "no recipe candidates"),
            }
        }

        self.save_current(&plan).await?;

        tracing::info!(
            group = group.map(|g| g.name.as_str()),
            recipes = plan.recipes().count(),
            "meal plan generated"
        );

        Ok(plan)
    }

    pub async fn save(&self, group: Option<&Group>) -> Result<SavedMealPlan> {
        let plan = self.current().await?;
        if plan.is_empty() {
            feast_shared::bail!("No recipes in the current plan to save.");
        }

        let saved = SavedMealPlan::new(&plan, group);
        self.repository
            .save(Collection::MealPlans, Document::new(&saved.id, &saved)?)
            .await?;

        tracing::info!(id = %saved.id, name = %saved.name, "meal plan saved");

        Ok(saved)
    }

    /// Saved plans, newest first.
    pub async fn list_saved(&self) -> Result<Vec<SavedMealPlan>> {
        let mut plans = self
            .repository
            .all(Collection::MealPlans)
            .await?
            .into_iter()
            .map(Document::decode)
            .collect::<Result<Vec<SavedMealPlan>>>()?;

        plans.reverse();

        Ok(plans)
    }

    pub async fn find(&self, id: &str) -> Result<Option<SavedMealPlan>> {
        self.repository
            .get(Collection::MealPlans, id)
            .await?
            .map(Document::decode)
            .transpose()
    }

    /// Copies a saved plan into the current plan.
    pub async fn load(&self, id: &str) -> Result<CurrentPlan> {
        let Some(saved) = self.find(id).await? else {
            return Err(Error::NotFound(format!("meal plan {id}")));
        };

        let plan = saved.to_current();
        self.save_current(&plan).await?;

        tracing::info!(id, "meal plan loaded");

        Ok(plan)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.repository.delete(Collection::MealPlans, id).await? {
            return Err(Error::NotFound(format!("meal plan {id}")));
        }

        tracing::info!(id, "meal plan deleted");

        Ok(())
    }
}

/// `[course, first diet, theme]`, skipping what the group leaves blank.
pub fn generation_tags(course: Course, group: Option<&Group>) -> Vec<String> {
    let mut tags = vec![course.to_string()];

    if let Some(group) = group {
        tags.extend(group.primary_diet().map(str::to_owned));
        tags.extend(group.theme().map(str::to_owned));
    }

    tags
}
