use contracts::domain::a001_satellite::dto::CategoryCounts;
use contracts::enums::{ObjectType, OrbitCode};
use leptos::prelude::*;
use std::collections::BTreeSet;

use crate::shared::icons::icon;

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

/// Чипы категорий со счётчиками из последнего успешного ответа
#[component]
pub fn ObjectTypeChips(
    #[prop(into)] active: Signal<BTreeSet<ObjectType>>,
    #[prop(into)] counts: Signal<Option<CategoryCounts>>,
    on_toggle: Callback<ObjectType>,
    on_select_all: Callback<()>,
) -> impl IntoView {
    let count_text = move |object_type: Option<ObjectType>| {
        counts.with(|c| match (c, object_type) {
            (Some(c), Some(t)) => format!(" ({})", c.count(t)),
            (Some(c), None) => format!(" ({})", c.total()),
            (None, _) => String::new(),
        })
    };

    let all_active = move || active.with(|a| a.len() == ObjectType::all().len());

    view! {
        <div class="chips">
            <button
                class=move || chip_class(all_active())
                on:click=move |_| on_select_all.run(())
            >
                "All Objects"
                {move || count_text(None)}
            </button>
            {ObjectType::all()
                .into_iter()
                .map(|object_type| {
                    view! {
                        <button
                            class=move || chip_class(active.with(|a| a.contains(&object_type)))
                            title=object_type.code()
                            on:click=move |_| on_toggle.run(object_type)
                        >
                            {object_type.display_name()}
                            {move || count_text(Some(object_type))}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Выпадающий список кодов орбит с множественным выбором
#[component]
pub fn OrbitCodeSelect(
    #[prop(into)] selected: Signal<Vec<OrbitCode>>,
    on_change: Callback<(OrbitCode, bool)>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let summary = move || {
        selected.with(|codes| match codes.len() {
            0 => "Orbit Code".to_string(),
            1 => codes[0].code().to_string(),
            n => format!("{} orbit codes", n),
        })
    };

    view! {
        <div class="dropdown">
            <button
                class="dropdown__toggle"
                on:click=move |_| is_open.update(|v| *v = !*v)
            >
                {summary}
                {icon("chevron-down")}
            </button>
            <Show when=move || is_open.get()>
                <div class="dropdown__menu">
                    {OrbitCode::all()
                        .into_iter()
                        .map(|code| {
                            view! {
                                <label class="dropdown__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || selected.with(|s| s.contains(&code))
                                        on:change=move |ev| {
                                            on_change.run((code, event_target_checked(&ev)));
                                        }
                                    />
                                    <span>{code.code()}</span>
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
