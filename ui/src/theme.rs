use leptos::prelude::*;

/// Tailwind class strings for every colour role, spacing step and breakpoint
/// the components use. `App` provides one through context; leaf components
/// read it with [`use_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // colour roles
    pub page: &'static str,
    pub accent_text: &'static str,
    pub accent_fill: &'static str,
    pub accent_hover: &'static str,
    pub body_text: &'static str,
    pub muted_text: &'static str,
    pub surface: &'static str,
    pub surface_alt: &'static str,
    pub badge: &'static str,
    pub link: &'static str,
    pub social_light: &'static str,
    pub social_dark: &'static str,
    pub portrait_ring: &'static str,
    pub footer: &'static str,
    pub footer_muted: &'static str,
    pub field: &'static str,

    // spacing
    pub container: &'static str,
    pub section_pad: &'static str,

    // breakpoints
    pub desktop_only: &'static str,
    pub mobile_only: &'static str,
}

impl Theme {
    pub const INDIGO: Theme = Theme {
        page: "min-h-screen bg-gray-50 text-gray-800 font-sans",
        accent_text: "text-indigo-600",
        accent_fill: "bg-indigo-600 text-white hover:bg-indigo-700 transition-colors",
        accent_hover: "hover:text-indigo-600",
        body_text: "text-gray-700",
        muted_text: "text-gray-600",
        surface: "bg-white",
        surface_alt: "bg-gray-50",
        badge: "bg-indigo-100 text-indigo-800",
        link: "text-indigo-600 hover:text-indigo-800",
        social_light: "bg-gray-200 hover:bg-gray-300",
        social_dark: "bg-gray-700 hover:bg-gray-600",
        portrait_ring: "border-indigo-200",
        footer: "bg-gray-800 text-white",
        footer_muted: "text-gray-400",
        field: "border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500",

        container: "container mx-auto px-4",
        section_pad: "py-16",

        desktop_only: "hidden md:flex",
        mobile_only: "md:hidden",
    };

    /// Underline bar under section titles, same hue as the accent.
    pub fn accent_bar(&self) -> String {
        let hue = self
            .accent_text
            .strip_prefix("text-")
            .unwrap_or("indigo-600");
        format!("bg-{hue}")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::INDIGO
    }
}

pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

/// The theme from context, or the default palette when none was provided
/// (e.g. a component rendered on its own).
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_bar_follows_accent_hue() {
        assert_eq!(Theme::INDIGO.accent_bar(), "bg-indigo-600");

        let teal = Theme {
            accent_text: "text-teal-500",
            ..Theme::INDIGO
        };
        assert_eq!(teal.accent_bar(), "bg-teal-500");
    }

    #[test]
    fn provided_theme_wins_over_default() {
        let owner = Owner::new_root(None);
        owner.with(|| {
            assert_eq!(use_theme(), Theme::INDIGO);

            let custom = Theme {
                accent_text: "text-rose-600",
                ..Theme::INDIGO
            };
            provide_theme(custom);
            assert_eq!(use_theme().accent_text, "text-rose-600");
        });
    }
}
