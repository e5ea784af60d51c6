use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use log::debug;
use pagenav::{LayoutError, PageLayout, SimEvent, Simulator};
use std::path::PathBuf;

/// Replays scrolls and clicks against a page layout and reports which
/// navigation link is highlighted and whether the back-to-top control shows.
///
/// Events run in the order they appear on the command line.
#[derive(Parser, Debug)]
#[command(name = "pagenav", version)]
struct Cli {
    /// Path to the page layout JSON file.
    layout: PathBuf,

    /// Scroll to this offset (repeatable).
    #[arg(long = "scroll", value_name = "PX", allow_negative_numbers = true)]
    scrolls: Vec<f64>,

    /// Click the navigation link with this href, e.g. "#about" (repeatable).
    #[arg(long = "click", value_name = "HREF")]
    clicks: Vec<String>,

    /// Click the back-to-top control.
    #[arg(long)]
    back_to_top: bool,

    /// Print a JSON report instead of one line per event.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// The requested events in command-line order.
    fn events(&self, matches: &ArgMatches) -> Vec<SimEvent> {
        let mut events: Vec<(usize, SimEvent)> = Vec::new();
        if let Some(indices) = matches.indices_of("scrolls") {
            events.extend(indices.zip(self.scrolls.iter().copied().map(SimEvent::Scroll)));
        }
        if let Some(indices) = matches.indices_of("clicks") {
            events.extend(indices.zip(self.clicks.iter().cloned().map(SimEvent::Click)));
        }
        if self.back_to_top
            && let Some(index) = matches.index_of("back_to_top")
        {
            events.push((index, SimEvent::BackToTop));
        }
        events.sort_by_key(|(index, _)| *index);
        events.into_iter().map(|(_, event)| event).collect()
    }
}

fn main() -> Result<(), LayoutError> {
    env_logger::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let layout = PageLayout::from_path(&cli.layout)?;
    debug!(
        "Loaded {} with {} sections and {} links",
        cli.layout.display(),
        layout.sections.len(),
        layout.links.len()
    );

    let simulator = Simulator::new(&layout)?;
    let steps = simulator.run(&cli.events(&matches));

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("{step}");
        }
    }
    Ok(())
}
