use leptos::prelude::*;

/// Line icons drawn on a 24×24 grid with a 2px round stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    FileText,
    Menu,
    Close,
    ExternalLink,
}

impl Icon {
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 \
                 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 \
                 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::FileText => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M10 9H8",
                "M16 13H8",
                "M16 17H8",
            ],
            Icon::Menu => &["M4 6h16M4 12h16M4 18h16"],
            Icon::Close => &["M18 6 6 18M6 6l12 12"],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
        }
    }

    /// Accessible name for icon-only links.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::Github => "GitHub",
            Icon::Linkedin => "LinkedIn",
            Icon::Mail => "Email",
            Icon::FileText => "Resume",
            Icon::Menu => "Open menu",
            Icon::Close => "Close menu",
            Icon::ExternalLink => "Open link",
        }
    }
}

#[component]
pub fn IconSvg(
    icon: Icon,
    #[prop(default = 20)] size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
