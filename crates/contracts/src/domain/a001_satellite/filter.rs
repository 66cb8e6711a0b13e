//! Фильтрация и сортировка списка объектов на клиенте.
//!
//! Здесь только чистые функции, одинаковые входы дают одинаковый
//! упорядоченный результат.

use std::collections::BTreeSet;

use super::aggregate::{Satellite, SatelliteField};
use crate::enums::{ObjectType, OrbitCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Текущая сортировка: поле и направление
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: SatelliteField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(field: SatelliteField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    /// Следующее состояние после клика по заголовку `field`:
    /// повторный клик по тому же полю переключает asc -> desc,
    /// клик по другому полю сбрасывает на asc.
    pub fn toggle(current: Option<SortDirective>, field: SatelliteField) -> SortDirective {
        match current {
            Some(c) if c.field == field && c.direction == SortDirection::Ascending => {
                SortDirective {
                    field,
                    direction: SortDirection::Descending,
                }
            }
            _ => SortDirective::ascending(field),
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

/// Совпадение с поисковой строкой: имя без учёта регистра,
/// NORAD ID: подстрока с учётом регистра.
pub fn matches_search(satellite: &Satellite, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    satellite.name.to_lowercase().contains(&term.to_lowercase())
        || satellite.norad_cat_id.contains(term)
}

pub fn apply_search(records: &[Satellite], term: &str) -> Vec<Satellite> {
    records
        .iter()
        .filter(|s| matches_search(s, term))
        .cloned()
        .collect()
}

/// Пустой набор кодов: фильтр не применяется
pub fn matches_orbit(satellite: &Satellite, active: &[OrbitCode]) -> bool {
    active.is_empty() || active.iter().any(|code| satellite.orbit_code.matches(*code))
}

/// Стабильная сортировка по директиве
pub fn sort_satellites(items: &mut [Satellite], directive: SortDirective) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, directive.field);
        if directive.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтр по орбите, затем сортировка
pub fn derive_displayed(
    records: &[Satellite],
    active_orbit_codes: &[OrbitCode],
    sort: Option<SortDirective>,
) -> Vec<Satellite> {
    let mut items: Vec<Satellite> = records
        .iter()
        .filter(|s| matches_orbit(s, active_orbit_codes))
        .cloned()
        .collect();
    if let Some(directive) = sort {
        sort_satellites(&mut items, directive);
    }
    items
}

/// Состояние фильтров экрана каталога. Живёт, пока смонтирован экран.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub object_types: BTreeSet<ObjectType>,
    pub orbit_codes: Vec<OrbitCode>,
    pub search: String,
    pub sort: Option<SortDirective>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            object_types: ObjectType::all().into_iter().collect(),
            orbit_codes: Vec::new(),
            search: String::new(),
            sort: None,
        }
    }
}

impl FilterState {
    pub fn toggle_object_type(&mut self, object_type: ObjectType) {
        if !self.object_types.remove(&object_type) {
            self.object_types.insert(object_type);
        }
    }

    pub fn select_all_object_types(&mut self) {
        self.object_types = ObjectType::all().into_iter().collect();
    }

    /// Активные категории в порядке отображения
    pub fn active_object_types(&self) -> Vec<ObjectType> {
        ObjectType::all()
            .into_iter()
            .filter(|t| self.object_types.contains(t))
            .collect()
    }

    pub fn set_orbit_code(&mut self, code: OrbitCode, checked: bool) {
        if checked {
            if !self.orbit_codes.contains(&code) {
                self.orbit_codes.push(code);
            }
        } else {
            self.orbit_codes.retain(|c| *c != code);
        }
    }

    pub fn sort_by(&mut self, field: SatelliteField) {
        self.sort = Some(SortDirective::toggle(self.sort, field));
    }

    /// Поиск, фильтр по орбите и сортировка поверх загруженных данных
    pub fn apply(&self, raw: &[Satellite]) -> Vec<Satellite> {
        let searched = apply_search(raw, &self.search);
        derive_displayed(&searched, &self.orbit_codes, self.sort)
    }
}
