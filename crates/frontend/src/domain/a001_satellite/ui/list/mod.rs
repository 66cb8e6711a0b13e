mod filters;
mod state;

use crate::domain::a001_satellite::api::fetch_satellites;
use crate::domain::a001_satellite::storage::use_selection;
use crate::domain::a001_satellite::ui::selected_assets::SelectedAssets;
use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::components::virtual_list::VirtualList;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_satellite::filter::matches_search;
use contracts::domain::a001_satellite::selection::SELECTION_CAPACITY;
use contracts::domain::a001_satellite::{Satellite, SatelliteField, SelectionError};
use filters::{ObjectTypeChips, OrbitCodeSelect};
use leptos::prelude::*;
use state::create_state;
use thaw::*;

/// Предупреждение о лимите скрывается само
const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TableBody {
    Loading,
    Empty,
    Rows,
}

#[component]
fn CatalogHeader(
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] searched: Signal<usize>,
) -> impl IntoView {
    let summary = move || {
        let shown = shown.get();
        let searched = searched.get();
        if shown == searched {
            format!("{} objects", shown)
        } else {
            format!("{} objects (filtered from {})", shown, searched)
        }
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">"Create My Asset list"</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || shown.get().to_string()}</span>
                </Badge>
            </div>
            <div class="page__header-right">
                <span class="text-muted">{summary}</span>
            </div>
        </div>
    }
}

#[component]
pub fn SatelliteCatalogPage() -> impl IntoView {
    let selection = use_selection();
    let state = create_state();

    let is_loading = Signal::derive(move || state.with(|s| s.loader.loading));

    let displayed = Memo::new(move |_| state.with(|s| s.filters.apply(&s.loader.records)));

    let body = Memo::new(move |_| {
        if is_loading.get() {
            TableBody::Loading
        } else if displayed.with(|d| d.is_empty()) {
            TableBody::Empty
        } else {
            TableBody::Rows
        }
    });

    let searched_count = Signal::derive(move || {
        state.with(|s| {
            s.loader
                .records
                .iter()
                .filter(|r| matches_search(r, &s.filters.search))
                .count()
        })
    });

    let load_data = move || {
        let Some((token, object_types)) = state.try_update(|s| {
            let token = s.loader.begin();
            (token, s.filters.active_object_types())
        }) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = fetch_satellites(&object_types).await;
            if let Err(e) = &result {
                log::error!("Failed to load satellites: {}", e);
            }
            state.try_update(|s| {
                s.loader.finish(token, result);
                s.is_loaded = true;
            });
        });
    };

    // Initial load (once)
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let set_notice = move |notice: Option<String>| {
        let shown = notice.clone();
        state.update(|s| s.notice = notice);
        if let Some(shown) = shown {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                state.try_update(|s| {
                    if s.notice.as_deref() == Some(shown.as_str()) {
                        s.notice = None;
                    }
                });
            });
        }
    };

    let toggle_sort = move |field: SatelliteField| {
        state.update(|s| s.filters.sort_by(field));
    };

    let toggle_row = move |satellite: Satellite, checked: bool| -> bool {
        if !checked {
            selection.remove(&satellite.norad_cat_id);
            set_notice(None);
            return true;
        }
        match selection.add(satellite) {
            Ok(_) => {
                set_notice(None);
                true
            }
            Err(e) => {
                set_notice(Some(e.to_string()));
                false
            }
        }
    };

    let select_page = Callback::new(move |checked: bool| {
        let Some(records) = state.with_untracked(|s| s.selectable_rows()) else {
            return;
        };
        let wanted = records
            .iter()
            .filter(|r| !selection.is_selected(&r.norad_cat_id))
            .count();
        let changed = selection.select_page(&records, checked);
        if checked && changed < wanted {
            set_notice(Some(
                SelectionError::CapacityExceeded {
                    capacity: SELECTION_CAPACITY,
                }
                .to_string(),
            ));
        } else {
            set_notice(None);
        }
    });

    let sort_header = move |label: &'static str, field: SatelliteField, class: &'static str| {
        view! {
            <SortableHeaderCell
                label=label
                class=class
                is_active=Signal::derive(move || {
                    state.with(|s| s.filters.sort.map(|d| d.field) == Some(field))
                })
                sort_ascending=Signal::derive(move || {
                    state.with(|s| s.filters.sort.map(|d| d.is_ascending()).unwrap_or(true))
                })
                on_sort=Callback::new(move |_| toggle_sort(field))
            />
        }
    };

    let render_row = move |satellite: Satellite| {
        let id = satellite.norad_cat_id.clone();
        let checked_id = id.clone();
        let row_id = id.clone();
        view! {
            <div
                class="table__row"
                class:table__row--selected=move || selection.is_selected(&row_id)
            >
                <div class="table__cell col col--check">
                    <input
                        type="checkbox"
                        class="table__checkbox"
                        prop:checked=move || selection.is_selected(&checked_id)
                        on:change={
                            let satellite = satellite.clone();
                            move |ev| {
                                let checked = event_target_checked(&ev);
                                if !toggle_row(satellite.clone(), checked) {
                                    event_target::<web_sys::HtmlInputElement>(&ev)
                                        .set_checked(false);
                                }
                            }
                        }
                    />
                </div>
                <div class="table__cell col col--id">{id}</div>
                <div class="table__cell col col--name">{satellite.name.clone()}</div>
                <div class="table__cell col col--country">{satellite.country_code.clone()}</div>
                <div class="table__cell col col--date">{format_date(&satellite.launch_date)}</div>
                <div class="table__cell col col--type">{satellite.object_type.code()}</div>
                <div class="table__cell col col--orbit">{satellite.orbit_code.code()}</div>
            </div>
        }
    };

    view! {
        <div class="page page--catalog">
            <div class="catalog">
                <CatalogHeader
                    shown=Signal::derive(move || displayed.with(|d| d.len()))
                    searched=searched_count
                />

                <div class="filter-panel">
                    <ObjectTypeChips
                        active=Signal::derive(move || state.with(|s| s.filters.object_types.clone()))
                        counts=Signal::derive(move || state.with(|s| s.loader.counts.clone()))
                        on_toggle=Callback::new(move |object_type| {
                            state.update(|s| s.filters.toggle_object_type(object_type))
                        })
                        on_select_all=Callback::new(move |_| {
                            state.update(|s| s.filters.select_all_object_types())
                        })
                    />

                    <div class="filter-panel__row">
                        <SearchInput
                            value=Signal::derive(move || state.with(|s| s.filters.search.clone()))
                            on_change=Callback::new(move |term: String| {
                                state.update(|s| s.filters.search = term)
                            })
                            placeholder="Search by name/NORAD ID"
                        />
                        <OrbitCodeSelect
                            selected=Signal::derive(move || state.with(|s| s.filters.orbit_codes.clone()))
                            on_change=Callback::new(move |(code, checked)| {
                                state.update(|s| s.filters.set_orbit_code(code, checked))
                            })
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load_data()
                            disabled=is_loading
                        >
                            {icon("filter")}
                            " Apply"
                        </Button>
                    </div>
                </div>

                {move || {
                    state.with(|s| s.loader.error.clone()).map(|e| {
                        view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__icon">{icon("alert")}</span>
                                <span class="warning-box__text">{e}</span>
                            </div>
                        }
                    })
                }}

                {move || {
                    state.with(|s| s.notice.clone()).map(|notice| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">{icon("alert")}</span>
                                <span class="warning-box__text">{notice}</span>
                                <button class="warning-box__close" on:click=move |_| set_notice(None)>
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
                }}

                <div class="table">
                    <div class="table__header">
                        <div class="table__header-cell col col--check">
                            <Show when=move || !is_loading.get()>
                                <TableHeaderCheckbox
                                    state=Signal::derive(move || {
                                        displayed.with(|records| selection.page_state(records))
                                    })
                                    on_change=select_page
                                />
                            </Show>
                        </div>
                        {sort_header("NORAD ID", SatelliteField::NoradCatId, "col col--id")}
                        {sort_header("Name", SatelliteField::Name, "col col--name")}
                        {sort_header("Country", SatelliteField::CountryCode, "col col--country")}
                        {sort_header("Launch Date", SatelliteField::LaunchDate, "col col--date")}
                        <div class="table__header-cell col col--type">"Object Type"</div>
                        <div class="table__header-cell col col--orbit">"Orbit Code"</div>
                    </div>

                    {move || match body.get() {
                        TableBody::Loading => view! {
                            <div class="table__placeholder">
                                <Spinner />
                                <span>"Loading satellites..."</span>
                            </div>
                        }
                        .into_any(),
                        TableBody::Empty => view! {
                            <div class="table__placeholder">"No satellites found"</div>
                        }
                        .into_any(),
                        TableBody::Rows => view! {
                            <VirtualList
                                items=displayed
                                key=|s: &Satellite| s.norad_cat_id.clone()
                                row=render_row
                            />
                        }
                        .into_any(),
                    }}
                </div>
            </div>

            <SelectedAssets />
        </div>
    }
}
