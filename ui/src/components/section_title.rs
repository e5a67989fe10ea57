use leptos::prelude::*;

use crate::theme::use_theme;

/// Centered section heading with a short accent underline.
#[component]
pub fn SectionTitle(children: Children) -> impl IntoView {
    let theme = use_theme();

    view! {
        <h2 class="text-3xl font-bold text-center mb-12 relative">
            <span class="relative z-10">{children()}</span>
            <span class=format!(
                "absolute bottom-0 left-1/2 transform -translate-x-1/2 w-24 h-1 {}",
                theme.accent_bar(),
            )></span>
        </h2>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn wraps_label_with_accent_underline() {
        let html = render_html(|| view! { <SectionTitle>"My Projects"</SectionTitle> });

        assert!(html.contains("My Projects"));
        assert!(html.contains("bg-indigo-600"));
        assert!(html.contains("<h2"));
    }
}
