use contracts::domain::a001_satellite::filter::FilterState;
use contracts::domain::a001_satellite::loader::LoaderState;
use contracts::domain::a001_satellite::Satellite;
use leptos::prelude::*;

/// Состояние экрана каталога. Не сохраняется: живёт, пока экран смонтирован.
#[derive(Clone, Debug, Default)]
pub struct CatalogListState {
    // filters
    pub filters: FilterState,

    // last fetch
    pub loader: LoaderState,

    // inline warning (capacity)
    pub notice: Option<String>,

    // load flag
    pub is_loaded: bool,
}

impl CatalogListState {
    /// Строки для "выбрать все". Пока идёт загрузка, таблица скрыта и
    /// массовый выбор недоступен.
    pub fn selectable_rows(&self) -> Option<Vec<Satellite>> {
        if self.loader.loading {
            None
        } else {
            Some(self.filters.apply(&self.loader.records))
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
