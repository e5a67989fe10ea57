use leptos::prelude::*;

use super::icons::{Icon, IconSvg};
use crate::theme::use_theme;

/// Every outbound link opens in a new browsing context without a referrer
/// and without `window.opener` access.
pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[component]
pub fn ExternalAnchor(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href target=EXTERNAL_TARGET rel=EXTERNAL_REL class=class aria-label=label>
            {children()}
        </a>
    }
}

/// Round icon button linking to a profile. `dark` is for the footer.
#[component]
pub fn SocialLink(
    #[prop(into)] href: String,
    icon: Icon,
    #[prop(optional)] dark: bool,
) -> impl IntoView {
    let theme = use_theme();
    let tone = if dark { theme.social_dark } else { theme.social_light };

    view! {
        <ExternalAnchor
            href=href
            class=format!("p-2 rounded-full {tone} transition-colors")
            label=icon.label()
        >
            <IconSvg icon=icon />
        </ExternalAnchor>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn always_opens_safely_in_new_context() {
        for dark in [false, true] {
            let html = render_html(move || {
                view! { <SocialLink href="https://github.com" icon=Icon::Github dark=dark /> }
            });
            assert!(html.contains("href=\"https://github.com\""));
            assert!(html.contains("target=\"_blank\""));
            assert!(html.contains("rel=\"noopener noreferrer\""));
            assert!(html.contains("aria-label=\"GitHub\""));
        }
    }

    #[test]
    fn dark_variant_uses_footer_tone() {
        let light = render_html(|| view! { <SocialLink href="mailto:a@b.c" icon=Icon::Mail /> });
        let dark = render_html(|| view! { <SocialLink href="mailto:a@b.c" icon=Icon::Mail dark=true /> });

        assert!(light.contains("bg-gray-200"));
        assert!(dark.contains("bg-gray-700"));
    }

    #[test]
    fn malformed_href_is_passed_through() {
        let html = render_html(|| view! { <SocialLink href="not a url" icon=Icon::Linkedin /> });
        assert!(html.contains("href=\"not a url\""));
    }
}
