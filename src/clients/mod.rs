//! Type-safe wrappers around [`ControllerClient`](crate::framework::ControllerClient).

pub mod collection_client;
pub mod form_client;

pub use collection_client::*;
pub use form_client::*;
