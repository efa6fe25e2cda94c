use feast_shared::{
    Result,
    recipe::{Course, RawRecipe, Recipe},
};

const SAMPLE_RECIPES: &str = include_str!("../data/sample_recipes.json");

#[derive(Clone, Debug, Default)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub diet: Option<String>,
    pub cuisine: Option<String>,
    pub dish_type: Option<String>,
}

impl SearchQuery {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let filters = [
            (non_empty(&self.dish_type), Recipe::has_dish_type as fn(&Recipe, &str) -> bool),
            (non_empty(&self.diet), Recipe::has_diet),
            (non_empty(&self.cuisine), Recipe::has_cuisine),
        ];

        if filters
            .iter()
            .any(|(value, check)| value.is_some_and(|v| !check(recipe, v)))
        {
            return false;
        }

        let Some(query) = non_empty(&self.query) else {
            return true;
        };

        let query = query.to_lowercase();

        recipe.title.to_lowercase().contains(&query)
            || recipe.summary.to_lowercase().contains(&query)
            || recipe
                .ingredients
                .iter()
                .any(|ing| ing.name.to_lowercase().contains(&query))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Where recipes come from.
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>>;

    async fn find(&self, id: u64) -> Result<Option<Recipe>>;

    /// Candidates for `course`; `tags` narrow the pick where the source supports it.
    async fn random(&self, course: Course, tags: &[String], number: usize) -> Result<Vec<Recipe>>;
}

/// The bundled demo recipes.
#[derive(Clone, Debug)]
pub struct SampleRecipes {
    recipes: Vec<Recipe>,
}

impl SampleRecipes {
    pub fn load() -> Result<Self> {
        let raw: Vec<RawRecipe> = serde_json::from_str(SAMPLE_RECIPES)?;

        Ok(Self {
            recipes: raw.into_iter().map(Recipe::from).collect(),
        })
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[async_trait::async_trait]
impl RecipeSource for SampleRecipes {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| query.matches(recipe))
            .cloned()
            .collect())
    }

    async fn find(&self, id: u64) -> Result<Option<Recipe>> {
        Ok(self.recipes.iter().find(|r| r.id == id).cloned())
    }

    /// Every recipe whose dish types name `course`; tags and number are ignored.
    async fn random(&self, course: Course, _tags: &[String], _number: usize) -> Result<Vec<Recipe>> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.has_dish_type(course.as_ref()))
            .cloned()
            .collect())
    }
}
