/// Универсальные утилиты для списков (поиск, индикаторы сортировки)
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Задержка фиксации поискового запроса после последнего ввода
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Компонент поиска с debounce, фиксацией по Enter и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Зафиксированное значение фильтра (для подсветки поля)
    #[prop(into)]
    value: Signal<String>,
    /// Callback с зафиксированным значением
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.try_get_value().flatten() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.try_set_value(None);
        }
    };

    let commit = move |new_value: String| {
        cancel_pending();
        on_change.run(new_value);
    };

    let schedule_commit = move |new_value: String| {
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        let callback = Closure::once_into_js(move || {
            debounce_timeout.try_set_value(None);
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    on_cleanup(move || cancel_pending());

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        commit(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    set_input_value.set(val.clone());
                    schedule_commit(val);
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        commit(input_value.get_untracked());
                    }
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(is_active: bool, ascending: bool) -> &'static str {
    if is_active {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS класс индикатора: активная колонка подсвечивается
pub fn get_sort_class(is_active: bool) -> &'static str {
    if is_active {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
