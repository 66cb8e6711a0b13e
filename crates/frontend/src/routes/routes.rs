use crate::domain::a001_satellite::ui::list::SatelliteCatalogPage;
use crate::domain::a001_satellite::ui::summary::SelectedSatellitesPage;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p class="text-muted">"Page not found"</p> }>
                    <Route path=path!("/") view=SatelliteCatalogPage />
                    <Route path=path!("/selected") view=SelectedSatellitesPage />
                </Routes>
            </main>
        </Router>
    }
}
