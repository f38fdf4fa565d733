#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Plant Catalog
//!
//! > **A client for a remote plants catalog, built from controller actors.**
//!
//! The crate lists plants fetched from a REST service, creates new ones through a
//! validated form, filters the in-memory list by name and deletes plants. Local
//! state only ever follows changes the service has confirmed.
//!
//! ## 🏗️ Design
//!
//! Each piece of session state (the collection, the form) is a [`Controller`](framework::Controller)
//! driven by a [`ControllerActor`](framework::ControllerActor) on its own Tokio task.
//! Network calls are never awaited inside the message loop: they run as spawned
//! tasks and come back as completion messages. Two things follow:
//!
//! - State queries ("is it loading?", "is it submitting?") are answered while a
//!   request is in flight.
//! - A request task that panics still settles, so `submitting` and `Loading` are
//!   always released.
//!
//! Dependencies are injected when the actor is started (`run(context)`), so tests
//! swap the HTTP service for [`MockPlantService`](service::mock::MockPlantService)
//! or [`InMemoryPlantService`](service::InMemoryPlantService).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor loop, the request/reply client and the task spawner.
//!
//! ### 2. The State ([`collection`], [`form`])
//! - [`CollectionController`](collection::CollectionController): `Loading -> {Ready, LoadError}`,
//!   `add_local`, `delete`, search.
//! - [`FormController`](form::FormController): draft editing, validation, submission.
//!
//! ### 3. The Interface ([`clients`])
//! [`CollectionClient`](clients::CollectionClient) and [`FormClient`](clients::FormClient)
//! hide the message passing behind plain async methods.
//!
//! ### 4. The Outside World ([`service`], [`model`])
//! The [`PlantService`](service::PlantService) trait, its REST implementation and
//! the records exchanged with it.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`PlantSystem`](lifecycle::PlantSystem) starts and wires both controllers and
//! shuts them down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List plants from the default service at http://localhost:6001
//! RUST_LOG=info cargo run -- list --search fern
//!
//! # Add one
//! cargo run -- add --name Fern --image https://example.com/fern.png --price 9.99
//! ```

pub mod clients;
pub mod collection;
pub mod form;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod service;
