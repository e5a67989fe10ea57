pub mod footer;
pub mod header;
pub mod icons;
pub mod nav_link;
pub mod project_card;
pub mod section_title;
pub mod skill_card;
pub mod social_link;

#[cfg(test)]
pub(crate) fn render_html<V: leptos::IntoView + 'static>(f: impl FnOnce() -> V) -> String {
    use leptos::prelude::Owner;

    let owner = Owner::new_root(None);
    owner.with(|| f().to_html())
}
