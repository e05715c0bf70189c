use std::sync::Arc;

use tracing::{info, warn};

use super::error::ServiceError;
use super::repo::PersonRepository;
use super::repo_types::Person;

/// Business rules for people. Every mutation goes through here.
#[derive(Clone)]
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Person>, ServiceError> {
        info!("finding all people");
        Ok(self.repo.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Person, ServiceError> {
        info!(id, "finding one person");
        self.get_by_id(id).await
    }

    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Person, ServiceError> {
        info!(first_name, last_name, "finding one person by name");
        self.repo
            .find_by_name(first_name, last_name)
            .await?
            .ok_or_else(|| ServiceError::NotFoundByName {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
    }

    /// Rejects the candidate when its email is already taken.
    pub async fn create(&self, mut person: Person) -> Result<Person, ServiceError> {
        info!(email = %person.email, "creating one person");
        if self.repo.find_by_email(&person.email).await?.is_some() {
            warn!(email = %person.email, "email already registered");
            return Err(ServiceError::duplicate_email(&person.email));
        }
        person.id = None;
        Ok(self.repo.insert(&person).await?)
    }

    /// Email uniqueness is not re-checked here.
    pub async fn update(&self, person: Person) -> Result<Person, ServiceError> {
        info!(id = ?person.id, "updating one person");
        let id = person.id.ok_or(ServiceError::MissingId)?;
        let mut entity = self.get_by_id(id).await?;
        entity.apply(person);
        // the row can vanish between the lookup and the write
        self.repo
            .update(&entity)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        info!(id, "deleting one person");
        let entity = self.get_by_id(id).await?;
        self.repo.delete(&entity).await?;
        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> Result<Person, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }
}
