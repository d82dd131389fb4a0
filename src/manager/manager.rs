use std::collections::HashMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard
};

use serde::Deserialize;
use tracing::debug;

use super::managererror::{ManagerError, parse_json_value};

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}

/// Registry of named objects built from JSON.
pub trait IManager<V: ?Sized> {
    fn map_lock(&self) -> &RwLock<HashMap<String, Arc<V>>>;

    fn build_from_json(&self, json_value: serde_json::Value) -> Result<Arc<V>, ManagerError>;

    fn map(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<V>>> {
        self.map_lock().read().unwrap_or_else(PoisonError::into_inner)
    }

    fn map_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<V>>> {
        self.map_lock().write().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, name: &str) -> Result<Arc<V>, ManagerError> {
        self.map()
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::name_not_found(name))
    }

    fn insert(&self, name: String, value: Arc<V>) {
        self.map_mut().insert(name, value);
    }

    /// Names currently registered, sorted.
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let value = self.build_from_json(json_value)?;
        debug!(name = %named_object.name, "registered object");
        self.insert(named_object.name, value);
        Ok(())
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


pub struct Manager<V: ?Sized> {
    map_lock: RwLock<HashMap<String, Arc<V>>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>
}

impl<V: ?Sized> Manager<V> {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<Arc<V>, ManagerError>) -> Manager<V> {
        Manager {
            map_lock: RwLock::new(HashMap::new()),
            get_obj_from_json
        }
    }
}

impl<V: ?Sized> IManager<V> for Manager<V> {
    fn map_lock(&self) -> &RwLock<HashMap<String, Arc<V>>> {
        &self.map_lock
    }

    fn build_from_json(&self, json_value: serde_json::Value) -> Result<Arc<V>, ManagerError> {
        (self.get_obj_from_json)(json_value)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Rate {
        hours: u32
    }

    fn rate_from_json(json_value: serde_json::Value) -> Result<Arc<u32>, ManagerError> {
        let rate: Rate = parse_json_value(json_value)?;
        Ok(Arc::new(rate.hours))
    }

    #[test]
    fn registers_objects_by_name() {
        let manager = Manager::new(rate_from_json);
        manager.insert_obj_from_json_vec(&[
            json!({"name": "FullTime", "hours": 8}),
            json!({"name": "PartTime", "hours": 4})
        ]).unwrap();
        assert_eq!(*manager.get("PartTime").unwrap(), 4);
        assert_eq!(manager.names(), vec!["FullTime".to_owned(), "PartTime".to_owned()]);
        assert!(matches!(manager.get("Contractor"), Err(ManagerError::NameNotFound(_))));
    }

    #[test]
    fn missing_name_is_a_parse_error() {
        let manager = Manager::new(rate_from_json);
        let result = manager.insert_obj_from_json(json!({"hours": 8}));
        assert!(matches!(result, Err(ManagerError::JsonParse(_))));
    }
}
