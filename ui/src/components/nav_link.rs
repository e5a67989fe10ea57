use leptos::prelude::*;

use crate::theme::use_theme;

/// Desktop nav entry. Highlighted with the accent colour while `active`.
#[component]
pub fn NavLink(
    #[prop(into, default = Signal::stored(false))] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let class = move || {
        let tone = if active.get() {
            theme.accent_text
        } else {
            theme.body_text
        };
        format!("text-base font-medium {} transition-colors {tone}", theme.accent_hover)
    };

    view! {
        <button
            type="button"
            class=class
            aria-current=move || active.get().then_some("page")
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Entry of the collapsible mobile menu. No active state.
#[component]
pub fn MobileNavLink(#[prop(into)] on_click: Callback<()>, children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            class=format!(
                "text-base font-medium {} {} transition-colors py-2",
                theme.body_text, theme.accent_hover,
            )
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}
