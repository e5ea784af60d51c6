//! The page navigator: scroll-spy highlighting, anchor scrolling and the
//! back-to-top control.
//!
//! A navigator collects its elements once at mount and keeps only the
//! handles. Section ids and offsets are read from the host on every call, so
//! layout shifts after mount are picked up by the next scroll event.
//!
//! Event registration is left to the host binding, which calls
//! [`PageNavigator::handle_scroll`], [`PageNavigator::handle_link_click`] and
//! [`PageNavigator::handle_back_to_top_click`] from its listeners.

use crate::active::{active_section, back_to_top_visible};
use crate::config::NavigatorConfig;
use crate::error::NavigatorError;
use log::{debug, trace};
use pagenav_traits::{PageHost, ScrollTarget};
use pagenav_types::{NavLink, ScrollState, Section, SectionId, fragment};
use serde::Serialize;

/// What the page looks like after a scroll event has been handled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub scroll_offset: f64,
    pub active_section: Option<SectionId>,
    /// `None` when the page has no back-to-top control.
    pub back_to_top_visible: Option<bool>,
}

pub struct PageNavigator<H: PageHost> {
    host: H,
    config: NavigatorConfig,
    links: Vec<H::Element>,
    sections: Vec<H::Element>,
    back_to_top: Option<H::Element>,
}

impl<H: PageHost> PageNavigator<H> {
    /// Collects the page's links, sections and back-to-top control and applies
    /// the initial highlight.
    ///
    /// Sections without a non-empty `id` are skipped; nothing could link to them.
    pub fn mount(host: H, config: NavigatorConfig) -> Result<Self, NavigatorError> {
        config.validate()?;

        let links = host.nav_links();
        let sections: Vec<_> = host
            .sections()
            .into_iter()
            .filter(|section| {
                host.attribute(section, "id")
                    .is_some_and(|id| !id.is_empty())
            })
            .collect();
        let back_to_top = host.back_to_top();

        debug!(
            "Mounting navigator on {}: {} links, {} sections, back-to-top {}",
            host.name(),
            links.len(),
            sections.len(),
            if back_to_top.is_some() { "present" } else { "absent" }
        );

        let navigator = Self {
            host,
            config,
            links,
            sections,
            back_to_top,
        };
        navigator.handle_scroll();
        Ok(navigator)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn links(&self) -> &[H::Element] {
        &self.links
    }

    pub fn sections(&self) -> &[H::Element] {
        &self.sections
    }

    pub fn back_to_top(&self) -> Option<&H::Element> {
        self.back_to_top.as_ref()
    }

    /// The sections as they are laid out right now, in document order.
    pub fn section_layout(&self) -> Vec<Section> {
        self.sections
            .iter()
            .filter_map(|el| {
                let id = self.host.attribute(el, "id")?;
                Some(Section::new(id, self.host.offset_top(el)))
            })
            .collect()
    }

    /// The navigation links with their current `href`s, in document order.
    pub fn nav_links(&self) -> Vec<NavLink> {
        self.links
            .iter()
            .map(|el| NavLink::new(self.host.attribute(el, "href").unwrap_or_default()))
            .collect()
    }

    /// Computes the active section for the current scroll position without
    /// touching any markers.
    pub fn active_section(&self) -> Option<SectionId> {
        let layout = self.section_layout();
        active_section(
            &layout,
            self.host.scroll_offset(),
            self.config.header_offset,
        )
        .map(|section| section.id.clone())
    }

    /// Recomputes the active section and sets the active marker on exactly the
    /// links pointing at it. Idempotent.
    pub fn refresh(&self) -> Option<SectionId> {
        let active = self.active_section();
        for el in &self.links {
            let href = self.host.attribute(el, "href").unwrap_or_default();
            let is_active = match (&active, fragment(&href)) {
                (Some(id), Some(target)) => id.matches_fragment(target),
                _ => false,
            };
            self.host.set_class(el, &self.config.active_class, is_active);
        }
        active
    }

    /// Shows the back-to-top control past the threshold and hides it otherwise.
    ///
    /// Returns the new visibility, or `None` if the page has no control.
    pub fn update_back_to_top(&self) -> Option<bool> {
        let control = self.back_to_top.as_ref()?;
        let visible = back_to_top_visible(
            self.host.scroll_offset(),
            self.config.back_to_top_threshold,
        );
        self.host
            .set_class(control, &self.config.visible_class, visible);
        Some(visible)
    }

    /// Scroll listener body.
    pub fn handle_scroll(&self) -> NavigationState {
        let scroll: ScrollState = self.host.scroll_offset();
        let active_section = self.refresh();
        let back_to_top_visible = self.update_back_to_top();
        trace!(
            "scroll={} active={:?} back_to_top={:?}",
            scroll.offset(),
            active_section,
            back_to_top_visible
        );
        NavigationState {
            scroll_offset: scroll.offset(),
            active_section,
            back_to_top_visible,
        }
    }

    /// Removes the active and visible markers this navigator set. Called when
    /// the navigator is detached so a replacement starts from a clean page.
    pub fn clear_markers(&self) {
        for el in &self.links {
            self.host.set_class(el, &self.config.active_class, false);
        }
        if let Some(control) = &self.back_to_top {
            self.host
                .set_class(control, &self.config.visible_class, false);
        }
    }

    /// Click listener body for a navigation link.
    ///
    /// The host binding suppresses the default jump navigation for every
    /// link before calling this. Requests one smooth scroll to the link's
    /// target and returns its id, or returns `None` without scrolling when
    /// the link has no fragment or the fragment matches no element.
    pub fn handle_link_click(&self, link: &H::Element) -> Option<SectionId> {
        let href = self.host.attribute(link, "href").unwrap_or_default();
        let Some(target_id) = fragment(&href) else {
            debug!("Link {href:?} has no fragment; ignoring click");
            return None;
        };
        let Some(target) = self.host.element_by_id(target_id) else {
            debug!("Link {href:?} points at a missing element; ignoring click");
            return None;
        };

        debug!("Smooth scrolling to #{target_id}");
        self.host.smooth_scroll(ScrollTarget::Element(&target));
        Some(SectionId::new(target_id))
    }

    /// Click listener body for the back-to-top control. Returns `false` (and
    /// does nothing) if the page has no control.
    pub fn handle_back_to_top_click(&self) -> bool {
        if self.back_to_top.is_none() {
            return false;
        }
        debug!("Smooth scrolling to top");
        self.host.smooth_scroll(ScrollTarget::Offset(0.0));
        true
    }
}
