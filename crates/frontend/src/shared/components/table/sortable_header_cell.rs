//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     class="col col--name"
//!     is_active=Signal::derive(move || sort.get().map(|s| s.field) == Some(SatelliteField::Name))
//!     sort_ascending=Signal::derive(move || sort.get().map(|s| s.is_ascending()).unwrap_or(true))
//!     on_sort=Callback::new(move |_| toggle_sort(SatelliteField::Name))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;

/// Ячейка заголовка с индикатором сортировки (▲▼⇅)
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Колонка сейчас отсортирована
    #[prop(into)]
    is_active: Signal<bool>,

    /// Направление сортировки
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// CSS классы ячейки (ширина колонки)
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    view! {
        <div class=format!("table__header-cell {}", class)>
            <button
                class="table__sortable-header"
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class=move || get_sort_class(is_active.get())>
                    {move || get_sort_indicator(is_active.get(), sort_ascending.get())}
                </span>
            </button>
        </div>
    }
}
