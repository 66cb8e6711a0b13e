//! Компонент чекбокса в заголовке таблицы для выбора всех строк
//!
//! # Примеры
//!
//! ```ignore
//! <TableHeaderCheckbox
//!     state=Signal::derive(move || selection.page_state(&displayed.get()))
//!     on_change=Callback::new(move |check_all: bool| select_page(check_all))
//! />
//! ```

use contracts::domain::a001_satellite::selection::PageSelection;
use leptos::prelude::*;

/// Чекбокс "выбрать все" с тремя состояниями: unchecked, checked, indeterminate
#[component]
pub fn TableHeaderCheckbox(
    /// Состояние выбора относительно строк таблицы
    #[prop(into)]
    state: Signal<PageSelection>,

    /// Callback при изменении (true = выбрать все, false = снять все)
    on_change: Callback<bool>,

    /// Подпись рядом с чекбоксом
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate задаётся только через DOM-свойство
    Effect::new(move |_| {
        let current = state.get();
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(current == PageSelection::Partial);
            input.set_checked(current == PageSelection::All);
        }
    });

    view! {
        <label class="table__select-all">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == PageSelection::All
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                    // состояние могло не измениться (нет свободных мест)
                    let current = state.get_untracked();
                    let input = event_target::<web_sys::HtmlInputElement>(&ev);
                    input.set_checked(current == PageSelection::All);
                    input.set_indeterminate(current == PageSelection::Partial);
                }
            />
            <span>{label}</span>
        </label>
    }
}
