#![allow(dead_code)]

pub mod fixtures;

use pagenav::{PageHost, PageLayout, Simulator};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn simulator(layout: &Value) -> Result<Simulator, pagenav::LayoutError> {
    let layout = PageLayout::from_json(&layout.to_string())?;
    Simulator::new(&layout)
}

/// The hrefs of the links currently carrying `class`.
pub fn links_with_class(sim: &Simulator, class: &str) -> Vec<String> {
    let page = sim.page();
    sim.navigator()
        .links()
        .iter()
        .filter(|link| page.has_class(**link, class))
        .filter_map(|link| page.attribute(link, "href"))
        .collect()
}

pub fn active_links(sim: &Simulator) -> Vec<String> {
    links_with_class(sim, &sim.navigator().config().active_class)
}
