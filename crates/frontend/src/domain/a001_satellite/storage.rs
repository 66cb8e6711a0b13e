use contracts::domain::a001_satellite::selection::{
    AddOutcome, PageSelection, SelectionRepository, SelectionStore, SELECTION_STORAGE_KEY,
};
use contracts::domain::a001_satellite::{Satellite, SelectionError, StorageError};
use leptos::prelude::*;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Выбор спутников в localStorage браузера
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self {
            key: SELECTION_STORAGE_KEY,
        }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn write(&self, raw: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(self.key, raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Общий для экранов выбор спутников (кэш + localStorage)
pub struct SelectionContext<S = LocalStorageStore> {
    repo: RwSignal<SelectionRepository<S>>,
}

impl<S> Clone for SelectionContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SelectionContext<S> {}

impl SelectionContext {
    pub fn new() -> Self {
        Self::with_store(LocalStorageStore::new())
    }
}

impl<S: SelectionStore + Send + Sync + 'static> SelectionContext<S> {
    pub fn with_store(store: S) -> Self {
        Self {
            repo: RwSignal::new(SelectionRepository::load(store)),
        }
    }

    pub fn items(&self) -> Vec<Satellite> {
        self.repo.with(|r| r.selection().items().to_vec())
    }

    pub fn is_full(&self) -> bool {
        self.repo.with(|r| r.selection().is_full())
    }

    pub fn is_selected(&self, norad_cat_id: &str) -> bool {
        self.repo.with(|r| r.is_selected(norad_cat_id))
    }

    pub fn page_state(&self, records: &[Satellite]) -> PageSelection {
        self.repo.with(|r| r.selection().page_state(records))
    }

    pub fn add(&self, satellite: Satellite) -> Result<AddOutcome, SelectionError> {
        self.repo
            .try_update(|r| r.add(satellite))
            .unwrap_or_else(|| {
                log::warn!("Selection add ignored: selection is disposed");
                Err(SelectionError::Unavailable)
            })
    }

    pub fn remove(&self, norad_cat_id: &str) {
        self.repo.update(|r| {
            r.remove(norad_cat_id);
        });
    }

    pub fn clear(&self) {
        self.repo.update(|r| r.clear());
    }

    /// Возвращает число изменённых строк
    pub fn select_page(&self, records: &[Satellite], checked: bool) -> usize {
        match self.repo.try_update(|r| r.select_page(records, checked)) {
            Some(changed) => changed,
            None => {
                log::warn!(
                    "Select page ignored for {} rows: selection is disposed",
                    records.len()
                );
                0
            }
        }
    }

    /// Перечитать localStorage (экран итогов при монтировании)
    pub fn reload(&self) {
        self.repo.update(|r| r.reload());
    }
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_selection() -> SelectionContext {
    use_context::<SelectionContext>().expect("SelectionContext not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_satellite::dto::decode_response;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct TestStore {
        raw: Arc<Mutex<Option<String>>>,
    }

    impl SelectionStore for TestStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            self.raw
                .lock()
                .map(|guard| guard.clone())
                .map_err(|e| StorageError::Read(e.to_string()))
        }

        fn write(&self, raw: &str) -> Result<(), StorageError> {
            self.raw
                .lock()
                .map(|mut guard| *guard = Some(raw.to_string()))
                .map_err(|e| StorageError::Write(e.to_string()))
        }
    }

    fn vanguard() -> Satellite {
        let body = r#"{"data": [
            {"noradCatId": "5", "intlDes": "1958-002B", "name": "VANGUARD 1",
             "launchDate": "1958-03-17", "objectType": "PAYLOAD",
             "launchSiteCode": "AFETR", "countryCode": "US", "orbitCode": "MEO"}
        ]}"#;
        decode_response(body).unwrap().data.remove(0)
    }

    #[test]
    fn test_add_persists() {
        let store = TestStore::default();
        let selection = SelectionContext::with_store(store.clone());

        assert_eq!(selection.add(vanguard()), Ok(AddOutcome::Added));
        assert!(selection.is_selected("5"));
        let raw = store.raw.lock().unwrap().clone().unwrap();
        assert!(raw.contains("VANGUARD 1"));
    }

    #[test]
    fn test_add_after_dispose_is_an_error() {
        let store = TestStore::default();
        let selection = SelectionContext::with_store(store.clone());
        selection.repo.dispose();

        assert_eq!(selection.add(vanguard()), Err(SelectionError::Unavailable));
        assert_eq!(selection.select_page(&[vanguard()], true), 0);
        assert!(store.raw.lock().unwrap().is_none());
    }
}
