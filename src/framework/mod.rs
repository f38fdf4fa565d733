//! Generic controller framework.
//!
//! This module provides the building blocks the session controllers are made of:
//! an actor loop that owns state, a client for request/reply round trips, and a
//! spawner that turns network calls into completion messages.
//!
//! # Main Components
//!
//! - [`Controller`] - Trait that session state implements to be driven by an actor
//! - [`ControllerActor`] - Generic actor that runs a controller
//! - [`ControllerClient`] - Cloneable handle used to send requests
//! - [`TaskSpawner`] - Runs request tasks and guarantees they settle
//! - [`FrameworkError`] - Errors of the plumbing itself

pub mod actor;
pub mod client;
pub mod controller;
pub mod error;
pub mod task;

pub use actor::ControllerActor;
pub use client::{ControllerClient, Response};
pub use controller::Controller;
pub use error::FrameworkError;
pub use task::TaskSpawner;
