use chrono::Datelike;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::{footer::Footer, header::Header};
use crate::content::PROFILE;
use crate::registry::SectionRegistry;
use crate::routes::RoutesMenu;
use crate::state::{Section, UiState};
use crate::theme::{Theme, provide_theme};

/// `toggle_menu` and `scroll_to_section`, the only writers of `state`.
pub(crate) fn state_callbacks(
    state: RwSignal<UiState>,
    registry: SectionRegistry,
) -> (Callback<()>, Callback<Section>) {
    let toggle_menu = Callback::new(move |_: ()| state.update(UiState::toggle_menu));
    let scroll_to_section = Callback::new(move |section: Section| {
        state.update(|s| {
            registry.navigate(s, section);
        });
    });
    (toggle_menu, scroll_to_section)
}

/// Composition root. Owns the UI state and the section registry; everything
/// below gets derived signals and the two callbacks.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let theme = Theme::default();
    provide_theme(theme);

    let state = RwSignal::new(UiState::default());
    let registry = SectionRegistry::mounted();

    let menu_open = Memo::new(move |_| state.get().menu_open);
    let active = Memo::new(move |_| state.get().active_section);

    let (toggle_menu, scroll_to_section) = state_callbacks(state, registry);

    let year = chrono::Local::now().year();

    view! {
      <Title text=format!("{} | {}", PROFILE.name, PROFILE.role)/>
      <Meta name="description" content=PROFILE.tagline/>

      <Router>
        <div class=theme.page>
          <Header menu_open active on_toggle=toggle_menu on_navigate=scroll_to_section/>

          <main>
            <RoutesMenu registry on_navigate=scroll_to_section/>
          </main>

          <Footer year/>
        </div>
      </Router>
    }
}
