use leptos::prelude::*;

use super::icons::{Icon, IconSvg};
use super::social_link::ExternalAnchor;
use crate::theme::use_theme;

/// Gallery card: cover image, blurb, tag badges in input order, and links to
/// the live demo and the source.
#[component]
pub fn ProjectCard(
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    demo_url: &'static str,
    code_url: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let link_class = format!("inline-flex items-center text-sm {}", theme.link);

    view! {
        <article class=format!(
            "{} rounded-lg overflow-hidden shadow-md transition-transform hover:shadow-lg hover:-translate-y-1",
            theme.surface,
        )>
            <div class="h-48 overflow-hidden">
                <img src=image alt=title class="w-full h-full object-cover" loading="lazy"/>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class=format!("{} mb-4", theme.body_text)>{description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {tags
                        .iter()
                        .map(|tag| view! {
                            <span class=format!("px-2 py-1 {} text-xs rounded-md", theme.badge)>{*tag}</span>
                        })
                        .collect_view()}
                </div>
                <div class="flex space-x-3">
                    <ExternalAnchor href=demo_url class=link_class.clone()>
                        <IconSvg icon=Icon::ExternalLink size=16 class="mr-1"/>
                        "Live Demo"
                    </ExternalAnchor>
                    <ExternalAnchor href=code_url class=link_class>
                        <IconSvg icon=Icon::Github size=16 class="mr-1"/>
                        "View Code"
                    </ExternalAnchor>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    fn card() -> String {
        render_html(|| {
            view! {
                <ProjectCard
                    title="Apni Library"
                    description="A fully responsive e-commerce platform."
                    image="/assets/apnilib.jpg"
                    tags=&["React", "Node.js", "MongoDB"]
                    demo_url="https://e-book-platform.vercel.app/"
                    code_url="https://github.com/garvit0906/eBook-platform.git"
                />
            }
        })
    }

    #[test]
    fn tags_render_as_badges_in_input_order() {
        let html = card();

        assert_eq!(html.matches("bg-indigo-100").count(), 3);
        let react = html.find("React").unwrap();
        let node = html.find("Node.js").unwrap();
        let mongo = html.find("MongoDB").unwrap();
        assert!(react < node && node < mongo);
    }

    #[test]
    fn links_use_exact_urls_and_open_safely() {
        let html = card();

        assert!(html.contains("href=\"https://e-book-platform.vercel.app/\""));
        assert!(html.contains("href=\"https://github.com/garvit0906/eBook-platform.git\""));
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 2);
        assert!(html.contains("src=\"/assets/apnilib.jpg\""));
        assert!(html.contains("alt=\"Apni Library\""));
    }

    #[test]
    fn duplicate_tags_are_kept() {
        let html = render_html(|| {
            view! {
                <ProjectCard
                    title="t" description="d" image="i"
                    tags=&["CSS", "CSS"]
                    demo_url="https://a" code_url="https://b"
                />
            }
        });
        assert_eq!(html.matches("CSS").count(), 2);
    }
}
