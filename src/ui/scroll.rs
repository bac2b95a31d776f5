//! Smooth scrolling to page sections

use crate::core::Section;

/// Smooth-scroll to the element with the given id.
///
/// Does nothing if no such element exists, and always on the server.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            leptos::logging::debug_warn!("no section with id {id:?} to scroll to");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Scroll to one of the navigation sections
pub fn scroll_to(section: Section) {
    scroll_to_section(section.id());
}
