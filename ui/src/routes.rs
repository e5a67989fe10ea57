// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::prelude::Callback;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{not_found::NotFound, portfolio::Portfolio};
use crate::registry::SectionRegistry;
use crate::state::Section;

#[component]
pub fn RoutesMenu(registry: SectionRegistry, on_navigate: Callback<Section>) -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("") view=move || view! { <Portfolio registry on_navigate/> } />
      </Routes>
    }
}
