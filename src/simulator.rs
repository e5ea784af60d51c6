//! Replays browser events against an in-memory page.

use crate::error::LayoutError;
use crate::layout::PageLayout;
use log::info;
use pagenav_core::{NavigationState, PageNavigator};
use pagenav_traits::{InMemoryPage, PageHost};
use pagenav_types::SectionId;
use serde::Serialize;
use std::fmt;

/// A user action the simulator can replay.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// The reader scrolls to an absolute offset.
    Scroll(f64),
    /// The reader clicks the first navigation link with this `href`.
    Click(String),
    /// The reader clicks the back-to-top control.
    BackToTop,
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Scroll(offset) => write!(f, "scroll {offset}"),
            SimEvent::Click(href) => write!(f, "click {href}"),
            SimEvent::BackToTop => write!(f, "back-to-top"),
        }
    }
}

/// The outcome of one replayed event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimStep {
    pub event: String,
    /// Section a link click scrolled to, if any.
    pub scrolled_to: Option<SectionId>,
    pub state: NavigationState,
}

impl fmt::Display for SimStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} scroll={:<8} active={:<12} back-to-top={}",
            self.event,
            self.state.scroll_offset,
            self.state
                .active_section
                .as_ref()
                .map_or("-", SectionId::as_str),
            match self.state.back_to_top_visible {
                Some(true) => "visible",
                Some(false) => "hidden",
                None => "-",
            }
        )?;
        if let Some(target) = &self.scrolled_to {
            write!(f, " (scrolled to #{target})")?;
        }
        Ok(())
    }
}

pub struct Simulator {
    navigator: PageNavigator<InMemoryPage>,
}

impl Simulator {
    pub fn new(layout: &PageLayout) -> Result<Self, LayoutError> {
        let navigator = PageNavigator::mount(layout.build_page(), layout.config.clone())?;
        Ok(Self { navigator })
    }

    pub fn page(&self) -> &InMemoryPage {
        self.navigator.host()
    }

    pub fn navigator(&self) -> &PageNavigator<InMemoryPage> {
        &self.navigator
    }

    /// State right after mount, before any event.
    pub fn initial_step(&self) -> SimStep {
        SimStep {
            event: "load".to_string(),
            scrolled_to: None,
            state: self.navigator.handle_scroll(),
        }
    }

    /// Replays one event. Every event ends with a scroll event, the way a
    /// browser reports the offset change after a (completed) smooth scroll.
    pub fn apply(&self, event: &SimEvent) -> SimStep {
        let mut scrolled_to = None;
        match event {
            SimEvent::Scroll(offset) => self.page().set_scroll_offset(*offset),
            SimEvent::Click(href) => {
                let link = self.navigator.links().iter().find(|el| {
                    self.page().attribute(el, "href").as_deref() == Some(href.as_str())
                });
                match link {
                    Some(link) => scrolled_to = self.navigator.handle_link_click(link),
                    None => info!("No navigation link with href {href:?} on this page"),
                }
            }
            SimEvent::BackToTop => {
                self.navigator.handle_back_to_top_click();
            }
        }

        SimStep {
            event: event.to_string(),
            scrolled_to,
            state: self.navigator.handle_scroll(),
        }
    }

    /// Replays events in order, starting with the initial state.
    pub fn run<'a>(&self, events: impl IntoIterator<Item = &'a SimEvent>) -> Vec<SimStep> {
        std::iter::once(self.initial_step())
            .chain(events.into_iter().map(|event| self.apply(event)))
            .collect()
    }
}
