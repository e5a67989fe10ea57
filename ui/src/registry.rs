use leptos::html;
use leptos::logging::log;
use leptos::prelude::GetUntracked;
use leptos::prelude::NodeRef;

use crate::state::{Section, UiState};

/// Something the page can scroll to.
pub trait ScrollHandle {
    /// Smooth-scrolls the target into view. Returns `false` when nothing is
    /// mounted behind the handle.
    fn scroll_into_view(&self) -> bool;
}

impl ScrollHandle for NodeRef<html::Section> {
    fn scroll_into_view(&self) -> bool {
        match self.get_untracked() {
            Some(_el) => {
                #[cfg(feature = "web")]
                {
                    let opts = web_sys::ScrollIntoViewOptions::new();
                    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                    opts.set_block(web_sys::ScrollLogicalPosition::Start);
                    _el.scroll_into_view_with_scroll_into_view_options(&opts);
                }
                true
            }
            None => false,
        }
    }
}

/// Maps each section to the handle of its region. In the browser the handles
/// are node refs bound with `node_ref=` when the sections mount; a section
/// that is not mounted (e.g. on the 404 route) simply has nothing to scroll.
#[derive(Clone, Copy)]
pub struct SectionRegistry<H = NodeRef<html::Section>> {
    handles: [Option<H>; 4],
}

impl SectionRegistry<NodeRef<html::Section>> {
    /// One empty node ref per section, filled in at mount.
    pub fn mounted() -> Self {
        let mut registry = Self::empty();
        for section in Section::ALL {
            registry.register(section, NodeRef::new());
        }
        registry
    }

    /// The ref the section's `<section>` element binds to.
    pub fn node_ref(&self, section: Section) -> NodeRef<html::Section> {
        self.handles[section.index()].unwrap_or_else(NodeRef::new)
    }
}

impl<H> SectionRegistry<H> {
    pub fn empty() -> Self {
        Self {
            handles: [None, None, None, None],
        }
    }

    pub fn register(&mut self, section: Section, handle: H) {
        self.handles[section.index()] = Some(handle);
    }

    pub fn handle(&self, section: Section) -> Option<&H> {
        self.handles[section.index()].as_ref()
    }
}

impl<H: ScrollHandle> SectionRegistry<H> {
    /// Scrolls to `section` if it has a mounted handle. Absence is not an
    /// error; the scroll is skipped.
    pub fn scroll_to(&self, section: Section) -> bool {
        let scrolled = self
            .handle(section)
            .map(|h| h.scroll_into_view())
            .unwrap_or(false);
        if !scrolled {
            log!("section #{section} is not mounted, skipping scroll");
        }
        scrolled
    }

    /// Selects `section`, scrolls to it when possible and always closes the
    /// mobile menu.
    pub fn navigate(&self, state: &mut UiState, section: Section) -> bool {
        let scrolled = self.scroll_to(section);
        state.select(section);
        scrolled
    }
}
