pub mod ids;
pub mod page;
pub mod scroll;

pub use ids::SectionId;
pub use page::{NavLink, Section, fragment};
pub use scroll::ScrollState;
