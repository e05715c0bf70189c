use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::repo::PersonRepository;
use super::repo_types::Person;

/// In-process stand-in for the Postgres table, ordered by id.
#[derive(Default)]
pub struct MemoryPersonRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Person>,
    next_id: i64,
}

impl MemoryPersonRepository {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl PersonRepository for MemoryPersonRepository {
    async fn insert(&self, person: &Person) -> anyhow::Result<Person> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        let stored = Person {
            id: Some(id),
            ..person.clone()
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, person: &Person) -> anyhow::Result<Option<Person>> {
        let Some(id) = person.id else {
            anyhow::bail!("cannot update a person without id");
        };
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = person.clone();
            row.clone()
        }))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Person>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.values().find(|p| p.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> anyhow::Result<Option<Person>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .values()
            .find(|p| p.first_name == first_name && p.last_name == last_name)
            .cloned())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Person>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn delete(&self, person: &Person) -> anyhow::Result<()> {
        let Some(id) = person.id else {
            anyhow::bail!("cannot delete a person without id");
        };
        self.inner.lock().unwrap().rows.remove(&id);
        Ok(())
    }
}

mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = MemoryPersonRepository::default();
        let a = repo.insert(&Person::new("a", "a", "a", "a", "a@x")).await.unwrap();
        let b = repo.insert(&Person::new("b", "b", "b", "b", "b@x")).await.unwrap();
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn delete_removes_row_from_every_lookup() {
        let repo = MemoryPersonRepository::default();
        let p = repo.insert(&Person::new("a", "b", "c", "d", "e@x")).await.unwrap();
        repo.delete(&p).await.unwrap();
        assert!(repo.find_by_id(p.id.unwrap()).await.unwrap().is_none());
        assert!(repo.find_by_email("e@x").await.unwrap().is_none());
        assert!(repo.find_by_name("a", "b").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_missing_row_does_not_insert() {
        let repo = MemoryPersonRepository::default();
        let p = repo.insert(&Person::new("a", "b", "c", "d", "e@x")).await.unwrap();
        repo.delete(&p).await.unwrap();
        assert!(repo.update(&p).await.unwrap().is_none());
        assert_eq!(repo.len(), 0);
    }
}
