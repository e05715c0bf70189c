use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::Person;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Stores a new row; the store assigns `id`.
    async fn insert(&self, person: &Person) -> anyhow::Result<Person>;
    /// Rewrites the row keyed by `person.id`; `None` when no such row exists.
    async fn update(&self, person: &Person) -> anyhow::Result<Option<Person>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>>;
    async fn find_by_name(&self, first_name: &str, last_name: &str)
        -> anyhow::Result<Option<Person>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Person>>;
    async fn delete(&self, person: &Person) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgPersonRepository {
    db: PgPool,
}

impl PgPersonRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn insert(&self, person: &Person) -> anyhow::Result<Person> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO person (first_name, last_name, address, gender, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, last_name, address, gender, email
            "#,
        )
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.address)
        .bind(&person.gender)
        .bind(&person.email)
        .fetch_one(&self.db)
        .await
        .context("insert person")?;
        Ok(row)
    }

    async fn update(&self, person: &Person) -> anyhow::Result<Option<Person>> {
        let Some(id) = person.id else {
            anyhow::bail!("cannot update a person without id");
        };
        let row = sqlx::query_as::<_, Person>(
            r#"
            UPDATE person
               SET first_name = $2,
                   last_name  = $3,
                   address    = $4,
                   gender     = $5,
                   email      = $6
             WHERE id = $1
            RETURNING id, first_name, last_name, address, gender, email
            "#,
        )
        .bind(id)
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.address)
        .bind(&person.gender)
        .bind(&person.email)
        .fetch_optional(&self.db)
        .await
        .with_context(|| format!("update person {}", id))?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, address, gender, email
              FROM person
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("find person by id")?;
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, address, gender, email
              FROM person
             WHERE email = $1
             ORDER BY id ASC
             LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .context("find person by email")?;
        Ok(row)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> anyhow::Result<Option<Person>> {
        let row = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, address, gender, email
              FROM person
             WHERE first_name = $1 AND last_name = $2
             ORDER BY id ASC
             LIMIT 1
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.db)
        .await
        .context("find person by name")?;
        Ok(row)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Person>> {
        let rows = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, address, gender, email
              FROM person
             ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await
        .context("list people")?;
        Ok(rows)
    }

    async fn delete(&self, person: &Person) -> anyhow::Result<()> {
        let Some(id) = person.id else {
            anyhow::bail!("cannot delete a person without id");
        };
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .with_context(|| format!("delete person {}", id))?;
        Ok(())
    }
}
