use crate::domain::a001_satellite::storage::use_selection;
use crate::shared::date_utils::{format_date, format_date_opt};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Итоговый список выбранных объектов (только чтение)
#[component]
pub fn SelectedSatellitesPage() -> impl IntoView {
    let selection = use_selection();

    // другая вкладка могла изменить выбор
    selection.reload();

    let items = Memo::new(move |_| selection.items());

    view! {
        <div class="page page--summary">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Selected Satellites"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        <span>{move || items.with(|i| i.len()).to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <a href="/" class="link-back">
                        {icon("arrow-left")}
                        " Back to Selection"
                    </a>
                </div>
            </div>

            <Show
                when=move || items.with(|i| !i.is_empty())
                fallback=|| view! { <div class="table__placeholder">"No satellites selected"</div> }
            >
                <ol class="summary-list">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, s)| {
                                view! {
                                    <li class="summary-list__item">
                                        <span class="summary-list__index">{index + 1}</span>
                                        <div class="summary-list__body">
                                            <div class="summary-list__name">{s.name.clone()}</div>
                                            <div class="summary-list__meta">
                                                <span>"NORAD ID: " {s.norad_cat_id.clone()}</span>
                                                <span>{s.object_type.code()}</span>
                                                <span>{s.country_code.clone()}</span>
                                                <span>"Launched " {format_date(&s.launch_date)}</span>
                                                <span>"Decay " {format_date_opt(s.decay_date.as_deref())}</span>
                                            </div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ol>
            </Show>
        </div>
    }
}
