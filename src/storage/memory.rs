//! In-process storage backend

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::types::UserRecord;
use crate::{Error, Result};

use super::UserStore;

/// User records held in a concurrent map. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, NaiveDate>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.users.contains_key(username))
    }

    async fn get(&self, username: &str) -> Result<UserRecord> {
        self.users
            .get(username)
            .map(|dob| UserRecord::new(username, *dob))
            .ok_or_else(|| Error::UserNotFound(username.to_string()))
    }

    async fn create(&self, username: &str, date_of_birth: NaiveDate) -> Result<UserRecord> {
        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(Error::UserExists(username.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(date_of_birth);
                Ok(UserRecord::new(username, date_of_birth))
            }
        }
    }

    async fn update(&self, username: &str, date_of_birth: NaiveDate) -> Result<()> {
        match self.users.get_mut(username) {
            Some(mut dob) => {
                *dob = date_of_birth;
                Ok(())
            }
            None => Err(Error::UserNotFound(username.to_string())),
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
