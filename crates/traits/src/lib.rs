pub mod host;
pub mod memory;

pub use host::{HostError, PageHost, ScrollTarget};
pub use memory::{ElementHandle, ElementRole, InMemoryPage, ScrollRequest};
