//! # Plant Collection
//!
//! The authoritative in-memory list of plants for the session.
//!
//! ## Structure
//!
//! - [`controller`] - [`CollectionController`] and its request/completion messages
//! - [`plants`] - [`PlantCollection`], the id-keyed ordered record list
//! - [`error`] - [`CollectionError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Lifecycle
//!
//! ```text
//! Loading ──ok──> Ready      (add_local, delete accepted)
//!    │
//!    └──err──> LoadError ──load_all()──> Loading
//! ```
//!
//! The first load starts as soon as the actor runs. There is no way back from
//! `Ready` to `Loading`.

pub mod controller;
pub mod error;
pub mod plants;

pub use controller::*;
pub use error::*;
pub use plants::*;

use crate::clients::CollectionClient;
use crate::framework::ControllerActor;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Loading,
    Ready,
    LoadError,
}

impl Display for CollectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Ready => write!(f, "ready"),
            Self::LoadError => write!(f, "load error"),
        }
    }
}

/// Creates a new collection actor and its client.
pub fn new() -> (ControllerActor<CollectionController>, CollectionClient) {
    let (actor, inner) = ControllerActor::new(CollectionController::new(), 32);
    (actor, CollectionClient::new(inner))
}
