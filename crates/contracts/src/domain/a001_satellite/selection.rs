//! Набор выбранных объектов (не более `SELECTION_CAPACITY`) и его
//! долговременное хранение.
//!
//! `SelectionSet` держит инварианты: порядок добавления,
//! уникальность по NORAD ID, размер не больше ёмкости.
//! `SelectionRepository` держит кэш в памяти и сохраняет набор в
//! `SelectionStore` после каждого изменения.

use std::collections::HashSet;

use super::aggregate::Satellite;
use super::error::{SelectionError, StorageError};

pub const SELECTION_CAPACITY: usize = 10;

/// Ключ в localStorage, общий для экрана выбора и экрана итогов
pub const SELECTION_STORAGE_KEY: &str = "selected-satellites";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySelected,
}

/// Состояние чекбокса "выбрать все" относительно текущего списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Partial,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<Satellite>,
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Восстановление из сохранённого списка.
    ///
    /// Дубликаты и всё сверх ёмкости отбрасываются. Второе значение:
    /// сколько записей отброшено.
    pub fn from_items(items: Vec<Satellite>) -> (Self, usize) {
        let total = items.len();
        let mut set = Self::new();
        for item in items {
            if set.is_full() {
                break;
            }
            if let Err(e) = set.add(item) {
                log::warn!("Stored selection entry skipped: {}", e);
            }
        }
        let dropped = total - set.len();
        (set, dropped)
    }

    pub fn items(&self) -> &[Satellite] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= SELECTION_CAPACITY
    }

    pub fn is_selected(&self, norad_cat_id: &str) -> bool {
        self.ids.contains(norad_cat_id)
    }

    /// Добавляет объект в конец.
    ///
    /// Уже выбранный объект: `AlreadySelected` без изменений, даже если набор
    /// заполнен. Новый объект при заполненном наборе: `CapacityExceeded`.
    pub fn add(&mut self, satellite: Satellite) -> Result<AddOutcome, SelectionError> {
        if self.is_selected(&satellite.norad_cat_id) {
            return Ok(AddOutcome::AlreadySelected);
        }
        if self.is_full() {
            return Err(SelectionError::CapacityExceeded {
                capacity: SELECTION_CAPACITY,
            });
        }
        self.ids.insert(satellite.norad_cat_id.clone());
        self.items.push(satellite);
        Ok(AddOutcome::Added)
    }

    pub fn remove(&mut self, norad_cat_id: &str) -> bool {
        if !self.ids.remove(norad_cat_id) {
            return false;
        }
        self.items.retain(|s| s.norad_cat_id != norad_cat_id);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }

    /// Массовый выбор для списка на экране.
    ///
    /// `checked = true`: добавляет невыбранные объекты в порядке списка, пока
    /// есть место. `checked = false`: снимает выбор со всех объектов списка.
    /// Возвращает число изменённых записей.
    pub fn select_page(&mut self, records: &[Satellite], checked: bool) -> usize {
        let mut changed = 0;
        if checked {
            for record in records {
                if self.is_full() {
                    break;
                }
                if let Ok(AddOutcome::Added) = self.add(record.clone()) {
                    changed += 1;
                }
            }
        } else {
            for record in records {
                if self.remove(&record.norad_cat_id) {
                    changed += 1;
                }
            }
        }
        changed
    }

    pub fn page_state(&self, records: &[Satellite]) -> PageSelection {
        if records.is_empty() {
            return PageSelection::None;
        }
        let selected = records
            .iter()
            .filter(|s| self.is_selected(&s.norad_cat_id))
            .count();
        if selected == 0 {
            PageSelection::None
        } else if selected == records.len() {
            PageSelection::All
        } else {
            PageSelection::Partial
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.items).map_err(|e| StorageError::Write(e.to_string()))
    }
}

/// Синхронное хранилище одной строки (localStorage в браузере)
pub trait SelectionStore {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, raw: &str) -> Result<(), StorageError>;
}

/// Репозиторий выбора: кэш в памяти + запись в хранилище на каждое изменение
#[derive(Debug, Clone)]
pub struct SelectionRepository<S> {
    store: S,
    cache: SelectionSet,
}

impl<S: SelectionStore> SelectionRepository<S> {
    /// Читает сохранённый выбор. Ошибки чтения и битые данные дают пустой набор.
    pub fn load(store: S) -> Self {
        let cache = read_selection(&store);
        Self { store, cache }
    }

    /// Перечитать хранилище (например, при входе на экран итогов)
    pub fn reload(&mut self) {
        self.cache = read_selection(&self.store);
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.cache
    }

    pub fn is_selected(&self, norad_cat_id: &str) -> bool {
        self.cache.is_selected(norad_cat_id)
    }

    pub fn add(&mut self, satellite: Satellite) -> Result<AddOutcome, SelectionError> {
        let outcome = self.cache.add(satellite).inspect_err(|e| log::info!("{}", e))?;
        if outcome == AddOutcome::Added {
            self.save();
        }
        Ok(outcome)
    }

    pub fn remove(&mut self, norad_cat_id: &str) -> bool {
        let removed = self.cache.remove(norad_cat_id);
        if removed {
            self.save();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.save();
    }

    pub fn select_page(&mut self, records: &[Satellite], checked: bool) -> usize {
        let changed = self.cache.select_page(records, checked);
        if changed > 0 {
            self.save();
        }
        changed
    }

    fn save(&self) {
        let result = self
            .cache
            .to_json()
            .and_then(|raw| self.store.write(&raw));
        if let Err(e) = result {
            log::error!("Failed to persist selection: {}", e);
        }
    }
}

fn read_selection<S: SelectionStore>(store: &S) -> SelectionSet {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return SelectionSet::new(),
        Err(e) => {
            log::warn!("Selection storage unavailable, starting empty: {}", e);
            return SelectionSet::new();
        }
    };

    match serde_json::from_str::<Vec<Satellite>>(&raw) {
        Ok(items) => {
            let (set, dropped) = SelectionSet::from_items(items);
            if dropped > 0 {
                log::warn!("Dropped {} duplicate or excess stored selections", dropped);
            }
            set
        }
        Err(e) => {
            log::warn!("Corrupt selection in storage, starting empty: {}", e);
            SelectionSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_satellite::aggregate::fixtures::{numbered, satellite};
    use std::sync::{Arc, Mutex};

    /// Хранилище в памяти. Клоны разделяют одно содержимое, что позволяет
    /// имитировать перезагрузку страницы: новый репозиторий над тем же store.
    #[derive(Debug, Clone, Default)]
    struct MemoryStore {
        raw: Arc<Mutex<Option<String>>>,
    }

    impl MemoryStore {
        pub fn with_raw(raw: &str) -> Self {
            Self {
                raw: Arc::new(Mutex::new(Some(raw.to_string()))),
            }
        }

        pub fn raw(&self) -> Option<String> {
            self.raw.lock().ok().and_then(|guard| guard.clone())
        }
    }

    impl SelectionStore for MemoryStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            self.raw
                .lock()
                .map(|guard| guard.clone())
                .map_err(|e| StorageError::Read(e.to_string()))
        }

        fn write(&self, raw: &str) -> Result<(), StorageError> {
            let mut guard = self
                .raw
                .lock()
                .map_err(|e| StorageError::Write(e.to_string()))?;
            *guard = Some(raw.to_string());
            Ok(())
        }
    }

    fn ids(set: &SelectionSet) -> Vec<String> {
        set.items().iter().map(|s| s.norad_cat_id.clone()).collect()
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut set = SelectionSet::new();
        let sats = numbered(11);
        for s in sats.iter().take(10) {
            assert_eq!(set.add(s.clone()), Ok(AddOutcome::Added));
        }
        assert!(set.is_full());

        let before = set.clone();
        assert_eq!(
            set.add(sats[10].clone()),
            Err(SelectionError::CapacityExceeded { capacity: 10 })
        );
        assert_eq!(set, before);
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut set = SelectionSet::new();
        set.add(satellite("1", "A")).unwrap();
        set.add(satellite("2", "B")).unwrap();
        assert_eq!(set.add(satellite("1", "A")), Ok(AddOutcome::AlreadySelected));
        assert_eq!(ids(&set), vec!["1", "2"]);
    }

    #[test]
    fn test_duplicate_add_when_full_is_not_a_rejection() {
        let mut set = SelectionSet::new();
        for s in numbered(10) {
            set.add(s).unwrap();
        }
        let existing = set.items()[3].clone();
        assert_eq!(set.add(existing), Ok(AddOutcome::AlreadySelected));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut set = SelectionSet::new();
        for s in numbered(3) {
            set.add(s).unwrap();
        }
        assert!(set.remove("00002"));
        assert!(!set.remove("00002"));
        assert!(!set.is_selected("00002"));
        assert_eq!(ids(&set), vec!["00001", "00003"]);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.is_selected("00001"));
    }

    #[test]
    fn test_select_page_respects_remaining_capacity() {
        let mut set = SelectionSet::new();
        for s in numbered(7) {
            set.add(s).unwrap();
        }
        let page: Vec<Satellite> = (0..5)
            .map(|i| satellite(&format!("P{}", i), "PAGE"))
            .collect();

        assert_eq!(set.select_page(&page, true), 3);
        assert_eq!(set.len(), 10);
        assert_eq!(&ids(&set)[7..], &["P0", "P1", "P2"]);
        assert!(!set.is_selected("P3"));
    }

    #[test]
    fn test_select_page_skips_already_selected() {
        let mut set = SelectionSet::new();
        let page = numbered(4);
        set.add(page[1].clone()).unwrap();

        assert_eq!(set.select_page(&page, true), 3);
        assert_eq!(ids(&set), vec!["00002", "00001", "00003", "00004"]);
    }

    #[test]
    fn test_unselect_page_removes_all_page_ids() {
        let mut set = SelectionSet::new();
        for s in numbered(10) {
            set.add(s).unwrap();
        }
        let page: Vec<Satellite> = numbered(10).into_iter().skip(6).collect();
        assert_eq!(set.select_page(&page, false), 4);
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_page_state() {
        let page = numbered(3);
        let mut set = SelectionSet::new();
        assert_eq!(set.page_state(&page), PageSelection::None);
        assert_eq!(set.page_state(&[]), PageSelection::None);
        set.add(page[0].clone()).unwrap();
        assert_eq!(set.page_state(&page), PageSelection::Partial);
        set.select_page(&page, true);
        assert_eq!(set.page_state(&page), PageSelection::All);
    }

    #[test]
    fn test_from_items_normalizes() {
        let mut items = numbered(12);
        items.insert(1, items[0].clone());
        let (set, dropped) = SelectionSet::from_items(items);
        assert_eq!(set.len(), 10);
        assert_eq!(dropped, 3);
        assert_eq!(set.items()[1].norad_cat_id, "00002");
    }

    #[test]
    fn test_repository_round_trip_survives_reload() {
        let store = MemoryStore::default();
        let mut repo = SelectionRepository::load(store.clone());
        repo.add(satellite("30", "C")).unwrap();
        repo.add(satellite("10", "A")).unwrap();
        repo.add(satellite("20", "B")).unwrap();
        repo.remove("10");
        repo.add(satellite("40", "D")).unwrap();

        let reloaded = SelectionRepository::load(store.clone());
        assert_eq!(ids(reloaded.selection()), vec!["30", "20", "40"]);
        assert_eq!(reloaded.selection(), repo.selection());
    }

    #[test]
    fn test_repository_persists_every_mutation() {
        let store = MemoryStore::default();
        let mut repo = SelectionRepository::load(store.clone());
        assert_eq!(store.raw(), None);

        repo.select_page(&numbered(2), true);
        assert!(store.raw().unwrap().contains("00002"));

        repo.clear();
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_repository_rejection_does_not_write() {
        let store = MemoryStore::default();
        let mut repo = SelectionRepository::load(store.clone());
        repo.select_page(&numbered(10), true);
        let saved = store.raw();

        let err = repo.add(satellite("99999", "LATE")).unwrap_err();
        assert_eq!(err, SelectionError::CapacityExceeded { capacity: 10 });
        assert_eq!(store.raw(), saved);
    }

    #[test]
    fn test_corrupt_storage_degrades_to_empty() {
        let repo = SelectionRepository::load(MemoryStore::with_raw("{not json"));
        assert!(repo.selection().is_empty());

        let repo = SelectionRepository::load(MemoryStore::with_raw(r#"[{"noradCatId": 5}]"#));
        assert!(repo.selection().is_empty());
    }

    struct BrokenStore;

    impl SelectionStore for BrokenStore {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, _raw: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_unavailable_storage_keeps_working_in_memory() {
        let mut repo = SelectionRepository::load(BrokenStore);
        assert!(repo.selection().is_empty());
        assert_eq!(repo.add(satellite("1", "A")), Ok(AddOutcome::Added));
        assert!(repo.is_selected("1"));
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let store = MemoryStore::default();
        let mut summary = SelectionRepository::load(store.clone());
        let mut main = SelectionRepository::load(store.clone());
        main.add(satellite("7", "G")).unwrap();

        assert!(summary.selection().is_empty());
        summary.reload();
        assert!(summary.is_selected("7"));
    }
}
