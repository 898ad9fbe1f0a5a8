use async_trait::async_trait;
use bytes::Bytes;
use exam_backend::storage::{ObjectStore, StorageError};
use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

/// Object store keeping everything in memory and recording every delete call.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Bytes>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: AtomicBool,
    failing_keys: Mutex<HashSet<String>>,
}

#[allow(unused)]
impl MemoryStore {
    pub fn put(&self, key: &str, content: &'static [u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_owned(), Bytes::from_static(content));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Makes deletes of `key` fail while every other key still succeeds.
    pub fn fail_delete_of(&self, key: &str) {
        self.failing_keys.lock().unwrap().insert(key.to_owned());
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn upload(&self, content: Bytes, key: &str) -> Result<(), StorageError> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_owned(), content);

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_deletes.load(Ordering::SeqCst)
            || self.failing_keys.lock().unwrap().contains(key)
        {
            return Err(StorageError::Delete {
                key: key.to_owned(),
                reason: "storage unavailable".to_owned(),
            });
        }

        self.objects.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_owned());

        Ok(())
    }
}
