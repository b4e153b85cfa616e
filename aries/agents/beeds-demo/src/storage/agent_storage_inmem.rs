use std::{
    collections::HashMap,
    ops::Deref,
    sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use super::AgentStorage;
use crate::error::*;

#[derive(Debug)]
pub(crate) struct AgentStorageInMem<T>
where
    T: Clone,
{
    pub name: String,
    pub store: RwLock<HashMap<String, Mutex<T>>>,
}

impl<T> AgentStorageInMem<T>
where
    T: Clone,
{
    pub fn new(name: &str) -> Self {
        Self {
            store: Default::default(),
            name: name.to_string(),
        }
    }

    fn lock_store_read(&self) -> AgentResult<RwLockReadGuard<'_, HashMap<String, Mutex<T>>>> {
        match self.store.read() {
            Ok(g) => Ok(g),
            Err(e) => {
                error!("Unable to read-lock Object Store: {:?}", e);
                Err(AgentError::from_msg(
                    AgentErrorKind::LockError,
                    &format!(
                        "[{}] Unable to read-lock Object Store: {:?}",
                        self.name, e
                    ),
                ))
            }
        }
    }

    fn lock_store_write(&self) -> AgentResult<RwLockWriteGuard<'_, HashMap<String, Mutex<T>>>> {
        match self.store.write() {
            Ok(g) => Ok(g),
            Err(e) => {
                error!("Unable to write-lock Object Store: {:?}", e);
                Err(AgentError::from_msg(
                    AgentErrorKind::LockError,
                    &format!(
                        "[{}] Unable to write-lock Object Store: {:?}",
                        self.name, e
                    ),
                ))
            }
        }
    }

    fn not_found(&self, id: &str) -> AgentError {
        AgentError::from_msg(
            AgentErrorKind::NotFound,
            &format!("[{}] Object not found for id: {}", self.name, id),
        )
    }

    fn object_lock_error(&self, id: &str) -> AgentError {
        AgentError::from_msg(
            AgentErrorKind::LockError,
            &format!("[{}] Unable to lock object {}", self.name, id),
        )
    }
}

impl<T> AgentStorage<T> for AgentStorageInMem<T>
where
    T: Clone,
{
    fn get(&self, id: &str) -> AgentResult<T> {
        let store = self.lock_store_read()?;
        match store.get(id) {
            Some(m) => match m.lock() {
                Ok(obj) => Ok((*obj.deref()).clone()),
                Err(_) => Err(self.object_lock_error(id)),
            },
            None => Err(self.not_found(id)),
        }
    }

    fn insert(&self, id: &str, obj: T) -> AgentResult<String> {
        let mut store = self.lock_store_write()?;
        store.insert(id.to_string(), Mutex::new(obj));
        Ok(id.to_string())
    }

    fn contains_key(&self, id: &str) -> bool {
        let store = match self.lock_store_read() {
            Ok(g) => g,
            Err(_) => return false,
        };
        store.contains_key(id)
    }

    fn update<F, R>(&self, id: &str, closure: F) -> AgentResult<R>
    where
        F: FnOnce(&mut T) -> AgentResult<R>,
    {
        let store = self.lock_store_read()?;
        let entry = store.get(id).ok_or_else(|| self.not_found(id))?;
        let mut obj = entry.lock().map_err(|_| self.object_lock_error(id))?;
        closure(&mut *obj)
    }
}
