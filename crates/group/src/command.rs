use feast_shared::{Collection, Document, Error, Repository, Result};
use ulid::Ulid;
use validator::Validate;

use crate::Group;

#[derive(Validate, Clone, Debug, Default)]
pub struct GroupInput {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub size: u32,
    pub diets: Vec<String>,
    pub theme: String,
    #[validate(length(max = 500))]
    pub notes: String,
}

impl GroupInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            notes: self.notes.trim().to_owned(),
            diets: self
                .diets
                .into_iter()
                .map(|d| d.trim().to_owned())
                .filter(|d| !d.is_empty())
                .collect(),
            theme: self.theme.trim().to_owned(),
            ..self
        }
    }
}

#[derive(Clone)]
pub struct Command<R> {
    repository: R,
}

impl<R: Repository> Command<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn create(&self, input: GroupInput) -> Result<Group> {
        let input = input.normalized();
        input.validate()?;

        let group = Group {
            id: Ulid::new().to_string(),
            name: input.name,
            size: input.size,
            diets: input.diets,
            theme: input.theme,
            notes: input.notes,
            created_at: feast_shared::now(),
            updated_at: None,
        };

        self.repository
            .save(Collection::Groups, Document::new(&group.id, &group)?)
            .await?;

        tracing::info!(id = %group.id, name = %group.name, "group created");

        Ok(group)
    }

    pub async fn update(&self, id: &str, input: GroupInput) -> Result<Group> {
        let input = input.normalized();
        input.validate()?;

        let Some(current) = self.find(id).await? else {
            return Err(Error::NotFound(format!("group {id}")));
        };

        let group = Group {
            name: input.name,
            size: input.size,
            diets: input.diets,
            theme: input.theme,
            notes: input.notes,
            updated_at: Some(feast_shared::now()),
            ..current
        };

        self.repository
            .save(Collection::Groups, Document::new(&group.id, &group)?)
            .await?;

        tracing::info!(id = %group.id, "group updated");

        Ok(group)
    }

    pub async fn find(&self, id: &str) -> Result<Option<Group>> {
        self.repository
            .get(Collection::Groups, id)
            .await?
            .map(Document::decode)
            .transpose()
    }

    /// Groups in creation order.
    pub async fn list(&self) -> Result<Vec<Group>> {
        self.repository
            .all(Collection::Groups)
            .await?
            .into_iter()
            .map(Document::decode)
            .collect()
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.repository.delete(Collection::Groups, id).await? {
            return Err(Error::NotFound(format!("group {id}")));
        }

        tracing::info!(id, "group deleted");

        Ok(())
    }
}
