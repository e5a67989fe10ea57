use leptos::prelude::*;

use super::social_link::SocialLink;
use crate::content::PROFILE;
use crate::theme::use_theme;

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    let theme = use_theme();

    view! {
        <footer class=format!("{} py-8", theme.footer)>
            <div class=theme.container>
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <p class="text-lg font-semibold">{PROFILE.name}</p>
                        <p class=theme.footer_muted>{PROFILE.role}</p>
                    </div>
                    <div class="flex space-x-4">
                        {PROFILE
                            .socials
                            .iter()
                            .map(|s| view! { <SocialLink href=s.href icon=s.icon dark=true/> })
                            .collect_view()}
                    </div>
                </div>
                <div class=format!("mt-8 text-center {}", theme.footer_muted)>
                    <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn shows_year_and_dark_social_links() {
        let html = render_html(|| view! { <Footer year=2031/> });

        assert!(html.contains("© 2031 Garvit Varshney. All rights reserved."));
        assert_eq!(html.matches("bg-gray-700").count(), PROFILE.socials.len());
    }
}
