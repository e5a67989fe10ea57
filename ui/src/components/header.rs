use leptos::prelude::*;

use super::icons::{Icon, IconSvg};
use super::nav_link::{MobileNavLink, NavLink};
use super::social_link::ExternalAnchor;
use crate::content::{PROFILE, RESUME_PATH};
use crate::state::Section;
use crate::theme::use_theme;

#[component]
fn ResumeLink() -> impl IntoView {
    let theme = use_theme();

    view! {
        <ExternalAnchor
            href=RESUME_PATH
            class=format!("inline-flex items-center px-4 py-2 rounded-md {}", theme.accent_fill)
        >
            <IconSvg icon=Icon::FileText size=18 class="mr-2"/>
            "Resume"
        </ExternalAnchor>
    }
}

/// Fixed top bar: logo, desktop nav, menu toggle and the collapsible mobile
/// nav. Sees the UI state only through the derived signals it is given.
#[component]
pub fn Header(
    #[prop(into)] menu_open: Signal<bool>,
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_navigate: Callback<Section>,
) -> impl IntoView {
    let theme = use_theme();

    let desktop = move || {
        Section::ALL
            .into_iter()
            .map(|s| {
                view! {
                    <NavLink
                        active=Signal::derive(move || active.get() == s)
                        on_click=move |_| on_navigate.run(s)
                    >
                        {s.label()}
                    </NavLink>
                }
            })
            .collect_view()
    };

    let mobile = move || {
        Section::ALL
            .into_iter()
            .map(|s| {
                view! {
                    <MobileNavLink on_click=move |_| on_navigate.run(s)>{s.label()}</MobileNavLink>
                }
            })
            .collect_view()
    };

    view! {
        <header class=format!("fixed w-full {} shadow-sm z-50", theme.surface)>
            <div class=format!("{} py-4 flex justify-between items-center", theme.container)>
                <a
                    href=format!("#{}", Section::Home.id())
                    class=format!("text-2xl font-bold {}", theme.accent_text)
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_navigate.run(Section::Home);
                    }
                >
                    {PROFILE.name}
                </a>

                <button
                    type="button"
                    class=format!("{} p-2 focus:outline-none", theme.mobile_only)
                    aria-label=move || if menu_open.get() { Icon::Close.label() } else { Icon::Menu.label() }
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| on_toggle.run(())
                >
                    {move || {
                        let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
                        view! { <IconSvg icon=icon size=24/> }
                    }}
                </button>

                <nav class=format!("{} space-x-8 items-center", theme.desktop_only)>
                    {desktop()}
                    <ResumeLink/>
                </nav>
            </div>

            <Show when=move || menu_open.get()>
                <div class=format!("{} {} shadow-lg", theme.mobile_only, theme.surface)>
                    <div class=format!("{} py-4 flex flex-col space-y-4", theme.container)>
                        {mobile()}
                        <ResumeLink/>
                    </div>
                </div>
            </Show>
        </header>
    }
}
