use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::project_card::ProjectCard;
use crate::components::section_title::SectionTitle;
use crate::components::skill_card::SkillCard;
use crate::components::social_link::SocialLink;
use crate::content::{
    CONTACT_BLURB, CONTACT_FIELDS, ContactField, FieldKind, PROFILE, PROJECTS, SKILLS,
};
use crate::registry::SectionRegistry;
use crate::state::Section;
use crate::theme::use_theme;

#[component]
fn Hero(registry: SectionRegistry) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Home.id()
            node_ref=registry.node_ref(Section::Home)
            class="pt-24 md:pt-32 pb-16 md:pb-24"
        >
            <div class=format!("{} flex flex-col md:flex-row items-center", theme.container)>
                <div class="md:w-1/2 mb-8 md:mb-0">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Hi, I'm " <span class=theme.accent_text>{PROFILE.name}</span>
                    </h1>
                    <h2 class=format!("text-2xl md:text-3xl {} mb-6", theme.muted_text)>
                        {PROFILE.role}
                    </h2>
                    <p class=format!("text-lg {} mb-8 max-w-lg", theme.body_text)>{PROFILE.tagline}</p>
                    <div class="flex space-x-4">
                        {PROFILE
                            .socials
                            .iter()
                            .map(|s| view! { <SocialLink href=s.href icon=s.icon/> })
                            .collect_view()}
                    </div>
                </div>
                <div class="md:w-1/2 flex justify-center">
                    <div class=format!(
                        "relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 {}",
                        theme.portrait_ring,
                    )>
                        <img src=PROFILE.portrait alt=PROFILE.name class="w-full h-full object-cover"/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About(registry: SectionRegistry) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::About.id()
            node_ref=registry.node_ref(Section::About)
            class=format!("{} {}", theme.section_pad, theme.surface)
        >
            <div class=theme.container>
                <SectionTitle>"About Me"</SectionTitle>
                <div class="flex flex-col md:flex-row gap-8">
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-semibold mb-4">"My Background"</h3>
                        {PROFILE
                            .bio
                            .iter()
                            .map(|para| view! { <p class=format!("{} mb-4", theme.body_text)>{*para}</p> })
                            .collect_view()}
                    </div>
                    <div class="md:w-1/2">
                        <h3 class="text-2xl font-semibold mb-4">"Skills"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {SKILLS
                                .iter()
                                .map(|g| view! { <SkillCard title=g.title items=g.items/> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects(registry: SectionRegistry) -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Projects.id()
            node_ref=registry.node_ref(Section::Projects)
            class=format!("{} {}", theme.section_pad, theme.surface_alt)
        >
            <div class=theme.container>
                <SectionTitle>"My Projects"</SectionTitle>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|p| view! {
                            <ProjectCard
                                title=p.title
                                description=p.description
                                image=p.image
                                tags=p.tags
                                demo_url=p.demo_url
                                code_url=p.code_url
                            />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInput(field: &'static ContactField) -> impl IntoView {
    let theme = use_theme();
    let class = format!("w-full px-4 py-2 {}", theme.field);

    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea id=field.id name=field.id rows=rows class=class placeholder=field.placeholder></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                type=field.kind.input_type()
                id=field.id
                name=field.id
                class=class
                placeholder=field.placeholder
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=field.id class=format!("block text-sm font-medium {} mb-1", theme.body_text)>
                {field.label}
            </label>
            {control}
        </div>
    }
}

#[component]
fn Contact(registry: SectionRegistry) -> impl IntoView {
    let theme = use_theme();

    // No endpoint behind the form; keep the browser from navigating.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log!("contact form submitted, no endpoint configured");
    };

    // name and email share the first row
    let (first_row, rest) = CONTACT_FIELDS.split_at(2.min(CONTACT_FIELDS.len()));

    view! {
        <section
            id=Section::Contact.id()
            node_ref=registry.node_ref(Section::Contact)
            class=format!("{} {}", theme.section_pad, theme.surface)
        >
            <div class=theme.container>
                <SectionTitle>"Get In Touch"</SectionTitle>
                <div class="max-w-3xl mx-auto">
                    <p class=format!("text-center text-lg {} mb-8", theme.body_text)>{CONTACT_BLURB}</p>
                    <form class="space-y-6" on:submit=on_submit>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {first_row.iter().map(|f| view! { <ContactInput field=f/> }).collect_view()}
                        </div>
                        {rest.iter().map(|f| view! { <ContactInput field=f/> }).collect_view()}
                        <div class="flex justify-center">
                            <button type="submit" class=format!("px-6 py-3 rounded-md {}", theme.accent_fill)>
                                "Send Message"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

/// The single page: hero, about, projects and contact, each bound to its
/// slot in the section registry. A section named in the URL fragment is
/// navigated to once mounted.
#[component]
pub fn Portfolio(registry: SectionRegistry, on_navigate: Callback<Section>) -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        if let Some(section) = Section::from_fragment(&location.hash.get_untracked()) {
            on_navigate.run(section);
        }
    });

    view! {
        <Hero registry/>
        <About registry/>
        <Projects registry/>
        <Contact registry/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    #[test]
    fn each_section_carries_its_id() {
        let html = render_html(|| {
            let registry = SectionRegistry::mounted();
            view! {
                <Hero registry/>
                <About registry/>
                <Projects registry/>
                <Contact registry/>
            }
        });
        for s in Section::ALL {
            assert!(html.contains(&format!("id=\"{}\"", s.id())), "missing #{s}");
        }
    }

    #[test]
    fn about_lists_every_skill_group() {
        let html = render_html(|| {
            let registry = SectionRegistry::mounted();
            view! { <About registry/> }
        });
        let items: usize = SKILLS.iter().map(|g| g.items.len()).sum();
        assert_eq!(html.matches("<li").count(), items);
    }

    #[test]
    fn projects_render_in_order() {
        let html = render_html(|| {
            let registry = SectionRegistry::mounted();
            view! { <Projects registry/> }
        });
        assert_eq!(html.matches("<article").count(), PROJECTS.len());
        let positions: Vec<usize> = PROJECTS
            .iter()
            .map(|p| html.find(p.title).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn contact_form_renders_fields_and_submit() {
        let html = render_html(|| {
            let registry = SectionRegistry::mounted();
            view! { <Contact registry/> }
        });
        for f in CONTACT_FIELDS {
            assert!(html.contains(&format!("id=\"{}\"", f.id)));
            assert!(html.contains(f.placeholder));
        }
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("<textarea"));
        assert!(html.contains("type=\"submit\""));
        assert!(!html.contains("action="));
    }
}
