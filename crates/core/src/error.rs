use pagenav_traits::HostError;
use thiserror::Error;

/// Errors raised while setting up a navigator.
///
/// A mounted navigator never fails: missing optional elements and dangling
/// links are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigatorError {
    #[error("Invalid navigator configuration: {0}")]
    InvalidConfig(String),

    #[error("Host error: {0}")]
    Host(#[from] HostError),
}
