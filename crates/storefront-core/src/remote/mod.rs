//! Remote Layer
//!
//! Access to the remote item service, abstracted behind a trait so the
//! store can run against HTTP in the browser and a scripted double in tests.

mod error;
mod http;
mod traits;

#[cfg(test)]
mod tests;

pub use error::{RemoteError, RemoteResult};
pub use http::HttpItemRemote;
pub use traits::ItemRemote;
