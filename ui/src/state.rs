use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four addressable regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// Nav order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section, also used as the URL fragment.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Accepts `"projects"` as well as `"#projects"`.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        Section::from_id(fragment.trim().trim_start_matches('#'))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The only mutable record of the page. Owned by `App`; children get
/// derived values and callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiState {
    pub active_section: Section,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// State half of `scroll_to_section`: select the section and close the
    /// mobile menu. Scrolling is done by the registry.
    pub fn select(&mut self, section: Section) {
        self.active_section = section;
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_state() -> Vec<UiState> {
        Section::ALL
            .into_iter()
            .flat_map(|s| {
                [false, true].map(|menu_open| UiState {
                    active_section: s,
                    menu_open,
                })
            })
            .collect()
    }

    #[test]
    fn initial_state_is_home_with_menu_closed() {
        let state = UiState::default();
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.menu_open);
    }

    #[test]
    fn select_sets_section_and_closes_menu_from_any_state() {
        for prior in every_state() {
            for target in Section::ALL {
                let mut state = prior;
                state.select(target);
                assert_eq!(state.active_section, target);
                assert!(!state.menu_open, "menu left open after {prior:?} -> {target}");
            }
        }
    }

    #[test]
    fn toggle_negates_and_double_toggle_restores() {
        for prior in every_state() {
            let mut state = prior;
            state.toggle_menu();
            assert_eq!(state.menu_open, !prior.menu_open);
            assert_eq!(state.active_section, prior.active_section);
            state.toggle_menu();
            assert_eq!(state, prior);
        }
    }

    #[test]
    fn ids_round_trip_and_unknown_ids_are_none() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
            assert_eq!(Section::ALL[s.index()], s);
        }
        assert_eq!(Section::from_fragment("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_fragment(""), None);
        assert_eq!(Section::from_id("Projects"), None);
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn displays_as_element_id() {
        let ids: Vec<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(ids, ["home", "about", "projects", "contact"]);
    }
}
