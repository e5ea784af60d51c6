//! Active-section selection and back-to-top visibility.
//!
//! Both are pure functions of the scroll position and the section layout, so
//! they are recomputed in full on every scroll event.

use pagenav_types::{ScrollState, Section};

/// Picks the section the reader is currently in.
///
/// Among the sections whose top is at or above `scroll + header_offset`, the
/// one with the greatest top wins. Equal tops resolve to the later section in
/// document order. Returns `None` while the reader is above the first section.
pub fn active_section(
    sections: &[Section],
    scroll: ScrollState,
    header_offset: f64,
) -> Option<&Section> {
    let threshold = scroll.threshold(header_offset);
    sections
        .iter()
        .filter(|section| section.top <= threshold)
        .fold(None::<&Section>, |best, section| match best {
            Some(b) if b.top > section.top => Some(b),
            _ => Some(section),
        })
}

/// Whether the back-to-top control should be shown. The threshold itself hides it.
pub fn back_to_top_visible(scroll: ScrollState, threshold: f64) -> bool {
    scroll.offset() > threshold
}
