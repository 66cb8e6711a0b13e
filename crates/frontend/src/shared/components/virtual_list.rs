//! Виртуализированный список с фиксированной высотой строки
//!
//! Рендерит только строки в области прокрутки плюс небольшой запас сверху и
//! снизу; остальное место занимают пустые блоки-распорки. Строки ключуются,
//! поэтому после пересортировки или фильтрации DOM-узел строки следует за
//! своей записью, а не за позицией.
//!
//! # Пример
//!
//! ```ignore
//! <VirtualList
//!     items=rows
//!     key=|row: &Row| row.id.clone()
//!     row=move |row: Row| view! { <RowView row=row /> }
//! />
//! ```

use leptos::prelude::*;
use std::ops::Range;

pub const ROW_HEIGHT: f64 = 50.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;
pub const OVERSCAN_ROWS: usize = 5;

/// Диапазон индексов, которые нужно отрендерить при текущей прокрутке
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    total: usize,
    overscan: usize,
) -> Range<usize> {
    if total == 0 || row_height <= 0.0 {
        return 0..0;
    }

    let visible = (viewport_height.max(0.0) / row_height).ceil() as usize;
    let max_first = total.saturating_sub(visible);
    let first = ((scroll_top.max(0.0) / row_height).floor() as usize).min(max_first);

    let start = first.saturating_sub(overscan);
    let end = (first + visible + overscan).min(total);
    start..end
}

#[component]
pub fn VirtualList<T, KF, RF, IV>(
    /// Все строки списка
    #[prop(into)]
    items: Signal<Vec<T>>,
    /// Уникальный ключ строки
    key: KF,
    /// Рендер одной строки
    row: RF,
    #[prop(optional, default = ROW_HEIGHT)]
    row_height: f64,
    #[prop(optional, default = VIEWPORT_HEIGHT)]
    viewport_height: f64,
    #[prop(optional, default = OVERSCAN_ROWS)]
    overscan: usize,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    KF: Fn(&T) -> String + Clone + Send + Sync + 'static,
    RF: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let (scroll_top, set_scroll_top) = signal(0.0_f64);

    let window = Memo::new(move |_| {
        let total = items.with(|v| v.len());
        visible_range(scroll_top.get(), viewport_height, row_height, total, overscan)
    });

    let visible_items = move || {
        let range = window.get();
        items.with(|v| {
            let end = range.end.min(v.len());
            v[range.start.min(end)..end].to_vec()
        })
    };

    let top_padding = move || window.get().start as f64 * row_height;
    let bottom_padding = move || {
        let total = items.with(|v| v.len());
        total.saturating_sub(window.get().end) as f64 * row_height
    };

    let row_style = format!("height: {}px;", row_height);

    view! {
        <div
            class="virtual-list"
            style=format!("max-height: {}px; overflow-y: auto;", viewport_height)
            on:scroll=move |ev| {
                let el = event_target::<web_sys::Element>(&ev);
                set_scroll_top.set(el.scroll_top() as f64);
            }
        >
            <div style=move || format!("height: {}px;", top_padding())></div>
            <For
                each=visible_items
                key=move |item: &T| key(item)
                children=move |item: T| {
                    view! {
                        <div class="virtual-list__row" style=row_style.clone()>
                            {row(item)}
                        </div>
                    }
                }
            />
            <div style=move || format!("height: {}px;", bottom_padding())></div>
        </div>
    }
}
