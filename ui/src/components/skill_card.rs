use leptos::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn SkillCard(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class=format!("{} p-4 rounded-lg shadow-sm", theme.surface_alt)>
            <h4 class=format!("text-lg font-semibold mb-2 {}", theme.accent_text)>{title}</h4>
            <ul class="space-y-1">
                {items
                    .iter()
                    .map(|item| view! { <li class=theme.body_text>{*item}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn renders_one_entry_per_item_in_order() {
        const ITEMS: &[&str] = &["Git", "Webpack", "Vite", "Figma"];
        let html = render_html(|| view! { <SkillCard title="Tools" items=ITEMS /> });

        assert_eq!(html.matches("<li").count(), ITEMS.len());
        let positions: Vec<usize> = ITEMS.iter().map(|i| html.find(i).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_items_render_title_and_empty_list() {
        let html = render_html(|| view! { <SkillCard title="Nothing yet" items=&[] /> });

        assert!(html.contains("Nothing yet"));
        assert!(html.contains("<ul"));
        assert_eq!(html.matches("<li").count(), 0);
    }
}
