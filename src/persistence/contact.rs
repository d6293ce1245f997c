use crate::constants::{MAX_CONTACT_ID, MAX_ID_ATTEMPTS, MIN_CONTACT_ID};
use crate::service::contact_service::{Contact, ContactId};
use rand::Rng;
use tokio::sync::RwLock;

use super::{Error, Result};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Ids are passed in the form they arrive in from the outside, each store decides
/// how to parse them.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all contacts
    async fn list(&self) -> Result<Vec<Contact>>;
    /// Returns the contact with the given id, if it exists
    async fn get(&self, id: &str) -> Result<Option<Contact>>;
    /// Stores a new contact, the store assigns the id
    async fn insert(&self, name: &str, number: &str) -> Result<Contact>;
    /// Replaces name and number of an existing contact, `None` if there is no such contact
    async fn update(&self, id: &str, name: &str, number: &str) -> Result<Option<Contact>>;
    /// Deletes the contact with the given id and returns whether something was removed
    async fn delete(&self, id: &str) -> Result<bool>;
    /// Returns the number of stored contacts
    async fn count(&self) -> Result<usize>;
    /// Whether deleting an unknown id counts as success
    fn idempotent_delete(&self) -> bool;
}

/// Keeps all contacts in an ordered list owned by the store. Names are unique.
pub struct InMemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::with_contacts(vec![])
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }
}

impl Default for InMemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStoreApi for InMemoryContactStore {
    async fn list(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Contact> {
        let mut contacts = self.contacts.write().await;
        if contacts.iter().any(|c| c.name == name) {
            return Err(Error::DuplicateName("contact".to_string(), name.to_owned()));
        }
        let contact = Contact::new_numeric(generate_id(&contacts), name, number);
        contacts.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &str, name: &str, number: &str) -> Result<Option<Contact>> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let mut contacts = self.contacts.write().await;
        let Some(pos) = contacts.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        if contacts.iter().any(|c| c.name == name && c.id != id) {
            return Err(Error::DuplicateName("contact".to_string(), name.to_owned()));
        }
        let contact = &mut contacts[pos];
        contact.name = name.to_owned();
        contact.number = number.to_owned();
        Ok(Some(contact.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let mut contacts = self.contacts.write().await;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.contacts.read().await.len())
    }

    fn idempotent_delete(&self) -> bool {
        true
    }
}

/// Ids that are not numbers can't exist in this store
fn parse_id(id: &str) -> Option<ContactId> {
    id.trim().parse::<u64>().ok().map(ContactId::Numeric)
}

/// Random id in a wide range, re-rolled a bounded number of times on collision
fn generate_id(existing: &[Contact]) -> u64 {
    let mut rng = rand::thread_rng();
    let mut candidate = rng.gen_range(MIN_CONTACT_ID..MAX_CONTACT_ID);
    for _ in 1..MAX_ID_ATTEMPTS {
        if !existing
            .iter()
            .any(|c| c.id == ContactId::Numeric(candidate))
        {
            break;
        }
        candidate = rng.gen_range(MIN_CONTACT_ID..MAX_CONTACT_ID);
    }
    candidate
}
