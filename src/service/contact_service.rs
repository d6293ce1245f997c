use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{NAME_MISSING, NUMBER_MISSING};
use crate::persistence::ContactStoreApi;

use super::{Error, Result};

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id
    async fn get_contact(&self, id: &str) -> Result<Contact>;

    /// Adds a new contact, the id is assigned by the store.
    async fn add_contact(&self, name: &str, number: &str) -> Result<Contact>;

    /// Replaces name and number of the contact with the given id. The id stays
    /// the same.
    async fn update_contact(&self, id: &str, name: &str, number: &str) -> Result<Contact>;

    /// Deletes the contact with the given id.
    async fn delete_contact(&self, id: &str) -> Result<()>;

    /// Returns a small html summary with the current number of contacts and
    /// the current time.
    async fn info_summary(&self) -> Result<String>;
}

/// The contact service validates requests and delegates to the contact store.
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        Ok(self.store.list().await?)
    }

    async fn get_contact(&self, id: &str) -> Result<Contact> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("contact {id}")))
    }

    async fn add_contact(&self, name: &str, number: &str) -> Result<Contact> {
        let (name, number) = validate_fields(name, number)?;
        let contact = self.store.insert(name, number).await?;
        info!("Added contact {} with id {}", contact.name, contact.id);
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, name: &str, number: &str) -> Result<Contact> {
        let (name, number) = validate_fields(name, number)?;
        self.store
            .update(id, name, number)
            .await?
            .ok_or_else(|| Error::NotFound(format!("contact {id}")))
    }

    async fn delete_contact(&self, id: &str) -> Result<()> {
        let removed = self.store.delete(id).await?;
        if !removed && !self.store.idempotent_delete() {
            return Err(Error::NotFound(format!("contact {id}")));
        }
        Ok(())
    }

    async fn info_summary(&self) -> Result<String> {
        let count = self.store.count().await?;
        Ok(format!(
            "<span>Phonebook has info for {count} people</span><br/><span>{}</span>",
            Utc::now().to_rfc2822()
        ))
    }
}

/// Both fields are required, name is checked first.
fn validate_fields<'a>(name: &'a str, number: &'a str) -> Result<(&'a str, &'a str)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Validation(NAME_MISSING.to_string()));
    }
    let number = number.trim();
    if number.is_empty() {
        return Err(Error::Validation(NUMBER_MISSING.to_string()));
    }
    Ok((name, number))
}

/// Numeric ids come from the in-memory store, record ids from SurrealDB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ContactId {
    Numeric(u64),
    Record(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Numeric(id) => write!(f, "{id}"),
            ContactId::Record(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new_numeric(id: u64, name: &str, number: &str) -> Self {
        Self {
            id: ContactId::Numeric(id),
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::persistence::{self, contact::MockContactStoreApi, InMemoryContactStore};
    use mockall::predicate::eq;

    fn get_service(mock_storage: MockContactStoreApi) -> ContactService {
        ContactService::new(Arc::new(mock_storage))
    }

    fn get_seeded_service() -> ContactService {
        ContactService::new(Arc::new(InMemoryContactStore::with_contacts(
            persistence::seed_contacts(),
        )))
    }

    fn get_contact() -> Contact {
        Contact::new_numeric(1, "Minka", "040-123456")
    }

    #[tokio::test]
    async fn get_contacts_baseline() {
        let mut store = MockContactStoreApi::new();
        store.expect_list().returning(|| Ok(vec![get_contact()]));
        let result = get_service(store).get_contacts().await;
        assert!(result.is_ok());
        assert_eq!(result.as_ref().unwrap().first().unwrap().name, *"Minka");
    }

    #[tokio::test]
    async fn get_contact_baseline() {
        let mut store = MockContactStoreApi::new();
        store
            .expect_get()
            .with(eq("1"))
            .returning(|_| Ok(Some(get_contact())));
        let result = get_service(store).get_contact("1").await;
        assert_eq!(result.unwrap().number, "040-123456");
    }

    #[tokio::test]
    async fn get_contact_not_found() {
        let mut store = MockContactStoreApi::new();
        store.expect_get().returning(|_| Ok(None));
        let result = get_service(store).get_contact("1").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn get_contact_propagates_malformed_id() {
        let mut store = MockContactStoreApi::new();
        store.expect_get().returning(|id| {
            Err(persistence::Error::MalformedId(
                "contact".to_string(),
                id.to_owned(),
            ))
        });
        let result = get_service(store).get_contact("!!").await;
        assert!(matches!(
            result,
            Err(Error::Persistence(persistence::Error::MalformedId(_, _)))
        ));
    }

    #[tokio::test]
    async fn add_contact_trims_and_calls_store() {
        let mut store = MockContactStoreApi::new();
        store
            .expect_insert()
            .with(eq("Minka"), eq("040-123456"))
            .times(1)
            .returning(|name, number| Ok(Contact::new_numeric(7, name, number)));
        let result = get_service(store)
            .add_contact(" Minka ", "040-123456 ")
            .await
            .unwrap();
        assert_eq!(result.id, ContactId::Numeric(7));
        assert_eq!(result.name, "Minka");
    }

    #[tokio::test]
    async fn add_contact_missing_name_does_not_touch_store() {
        let mut store = MockContactStoreApi::new();
        store.expect_insert().never();
        let result = get_service(store).add_contact("  ", "").await;
        match result {
            Err(Error::Validation(msg)) => assert_eq!(msg, NAME_MISSING),
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn add_contact_missing_number_does_not_touch_store() {
        let mut store = MockContactStoreApi::new();
        store.expect_insert().never();
        let result = get_service(store).add_contact("Minka", "").await;
        match result {
            Err(Error::Validation(msg)) => assert_eq!(msg, NUMBER_MISSING),
            _ => panic!("expected validation error"),
        }
    }

    #[tokio::test]
    async fn update_contact_not_found() {
        let mut store = MockContactStoreApi::new();
        store.expect_update().returning(|_, _, _| Ok(None));
        let result = get_service(store)
            .update_contact("1", "Minka", "123")
            .await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn update_contact_validates_before_store() {
        let mut store = MockContactStoreApi::new();
        store.expect_update().never();
        let result = get_service(store).update_contact("1", "Minka", " ").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn delete_missing_contact_in_idempotent_store() {
        let mut store = MockContactStoreApi::new();
        store.expect_delete().returning(|_| Ok(false));
        store.expect_idempotent_delete().returning(|| true);
        let result = get_service(store).delete_contact("1").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_missing_contact_in_strict_store() {
        let mut store = MockContactStoreApi::new();
        store.expect_delete().returning(|_| Ok(false));
        store.expect_idempotent_delete().returning(|| false);
        let result = get_service(store).delete_contact("1").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn info_summary_uses_store_count() {
        let mut store = MockContactStoreApi::new();
        store.expect_count().times(1).returning(|| Ok(42));
        let result = get_service(store).info_summary().await.unwrap();
        assert!(result.contains("Phonebook has info for 42 people"));
    }

    #[tokio::test]
    async fn create_then_get_yields_same_fields() {
        let service = get_seeded_service();
        let created = service.add_contact("New Person", "000-000").await.unwrap();
        let fetched = service.get_contact(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched.name, "New Person");
        assert_eq!(fetched.number, "000-000");
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_name_leaves_store_unchanged() {
        let service = get_seeded_service();
        let result = service
            .add_contact("Mary Poppendieck", "39-23-6423122")
            .await;
        assert!(matches!(
            result,
            Err(Error::Persistence(persistence::Error::DuplicateName(_, _)))
        ));
        assert_eq!(service.get_contacts().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn info_count_matches_list_after_changes() {
        let service = get_seeded_service();
        service.add_contact("New Person", "000-000").await.unwrap();
        service.delete_contact("1").await.unwrap();
        service.delete_contact("2").await.unwrap();
        service.delete_contact("12345").await.unwrap();
        let count = service.get_contacts().await.unwrap().len();
        assert_eq!(count, 3);
        let info = service.info_summary().await.unwrap();
        assert!(info.contains(&format!("info for {count} people")));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = get_seeded_service();
        service.delete_contact("1").await.unwrap();
        assert!(matches!(
            service.get_contact("1").await,
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn contact_ids_serialize_in_native_form() {
        let numeric = serde_json::to_value(get_contact()).unwrap();
        assert_eq!(numeric["id"], serde_json::json!(1));
        let record = Contact {
            id: ContactId::Record("abc123".to_string()),
            name: "Minka".to_string(),
            number: "1".to_string(),
        };
        let record = serde_json::to_value(record).unwrap();
        assert_eq!(record["id"], serde_json::json!("abc123"));
    }
}
