use super::Result;
use crate::constants::{CONTACTS_TABLE, MAX_RECORD_KEY_CHARACTERS};
use crate::persistence::{ContactStoreApi, Error};
use crate::service::contact_service::{Contact, ContactId};
use async_trait::async_trait;
use log::error;
use serde::{Deserialize, Serialize};
use surrealdb::{engine::any::Any, sql::Thing, Surreal};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = CONTACTS_TABLE;

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn list(&self) -> Result<Vec<Contact>> {
        let all: Vec<ContactDb> = self.db.select(Self::TABLE).await?;
        all.into_iter().map(Contact::try_from).collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Contact>> {
        let key = record_key(id)?;
        let result: Option<ContactDb> = self.db.select((Self::TABLE, key)).await?;
        result.map(Contact::try_from).transpose()
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Contact> {
        let entity = ContactDb::new(name, number);
        let result: Option<ContactDb> = self.db.create(Self::TABLE).content(entity).await?;
        match result {
            Some(c) => Contact::try_from(c).map_err(|_| {
                Error::InsertFailed(format!("{} with name {}", Self::TABLE, name))
            }),
            None => Err(Error::InsertFailed(format!("{} with name {}", Self::TABLE, name))),
        }
    }

    async fn update(&self, id: &str, name: &str, number: &str) -> Result<Option<Contact>> {
        let key = record_key(id)?;
        let existing: Option<ContactDb> = self.db.select((Self::TABLE, key.clone())).await?;
        if existing.is_none() {
            return Ok(None);
        }
        let entity = ContactDb::new(name, number);
        let result: Option<ContactDb> = self
            .db
            .update((Self::TABLE, key))
            .content(entity)
            .await?;
        result.map(Contact::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let key = record_key(id)?;
        let deleted: Option<ContactDb> = self.db.delete((Self::TABLE, key)).await?;
        Ok(deleted.is_some())
    }

    async fn count(&self) -> Result<usize> {
        let count: Option<usize> = self
            .db
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", Self::TABLE))
            .await?
            .take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    fn idempotent_delete(&self) -> bool {
        false
    }
}

/// Record keys are 1-64 ASCII alphanumerics or underscores
fn record_key(id: &str) -> Result<String> {
    let valid = !id.is_empty()
        && id.len() <= MAX_RECORD_KEY_CHARACTERS
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(id.to_owned())
    } else {
        Err(Error::MalformedId("contact".to_string(), id.to_owned()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub number: String,
}

impl ContactDb {
    fn new(name: &str, number: &str) -> Self {
        Self {
            id: None,
            name: name.to_owned(),
            number: number.to_owned(),
        }
    }
}

impl TryFrom<ContactDb> for Contact {
    type Error = Error;

    fn try_from(contact: ContactDb) -> Result<Self> {
        let Some(thing) = contact.id else {
            error!("Contact record {} came back without an id", contact.name);
            return Err(Error::MissingId(CONTACTS_TABLE.to_string()));
        };
        Ok(Self {
            id: ContactId::Record(thing.id.to_raw()),
            name: contact.name,
            number: contact.number,
        })
    }
}
