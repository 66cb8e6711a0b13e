use crate::domain::a001_satellite::storage::use_selection;
use crate::shared::icons::icon;
use contracts::domain::a001_satellite::Satellite;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Боковая панель выбранных объектов на экране каталога
#[component]
pub fn SelectedAssets() -> impl IntoView {
    let selection = use_selection();
    let navigate = StoredValue::new_local(use_navigate());

    let items = Memo::new(move |_| selection.items());
    let is_empty = Signal::derive(move || items.with(|i| i.is_empty()));

    view! {
        <aside class="sidebar">
            <div class="sidebar__header">
                <span class="sidebar__title">"Selected Assets"</span>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || items.with(|i| i.len()).to_string()}</span>
                </Badge>
                <Show when=move || selection.is_full()>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                        "Max reached"
                    </Badge>
                </Show>
            </div>

            <div class="sidebar__list">
                <Show
                    when=move || !is_empty.get()
                    fallback=|| view! { <div class="text-muted">"No assets selected"</div> }
                >
                    <For
                        each=move || items.get()
                        key=|s: &Satellite| s.norad_cat_id.clone()
                        children=move |s: Satellite| {
                            let id = s.norad_cat_id.clone();
                            view! {
                                <div class="sidebar__item">
                                    <span class="sidebar__item-id">{s.norad_cat_id.clone()}</span>
                                    <span class="sidebar__item-name">{s.name.clone()}</span>
                                    <button
                                        class="sidebar__item-remove"
                                        title="Remove"
                                        on:click=move |_| selection.remove(&id)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            <div class="sidebar__actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| selection.clear()
                    disabled=is_empty
                >
                    "Clear all"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| navigate.with_value(|nav| nav("/selected", Default::default()))
                    disabled=is_empty
                >
                    "PROCEED"
                </Button>
            </div>
        </aside>
    }
}
