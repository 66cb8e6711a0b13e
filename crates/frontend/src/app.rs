use crate::domain::a001_satellite::storage::SelectionContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the selection repository to both pages via context.
    provide_context(SelectionContext::new());

    view! {
        <AppRoutes />
    }
}
