use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="pt-32 pb-16 text-center">
            <p class="text-2xl font-bold mb-4">"404 – not found"</p>
            <A href="/">"Back to the start"</A>
        </section>
    }
}
