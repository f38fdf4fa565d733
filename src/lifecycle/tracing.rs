//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the whole
//! session: both controllers, the request tasks they spawn and the service calls.
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable. The compact format
//! hides the module prefix (`with_target(false)`); controller logs carry a
//! `controller_type` field instead.
//!
//! ```bash
//! # Lifecycle and state transitions
//! RUST_LOG=info plants list
//!
//! # Request messages and payloads
//! RUST_LOG=debug plants add --name Fern --image fern.png --price 9.99
//! ```
//!
//! ## What Gets Traced
//!
//! - **Controller lifecycle**: start and shutdown, tagged with `controller_type`
//! - **Collection**: load results with the collection size, adds and deletes
//! - **Form**: submissions, rejected drafts and failed creates
//! - **Service calls**: one span per HTTP call (`list`, `create`, `delete`)
//!
//! With `RUST_LOG=info` a successful add reads:
//!
//! ```text
//! INFO controller_type="CollectionController" Controller started
//! INFO Loading plants
//! INFO size=3 Loaded
//! INFO submit: name=Fern Submitting plant
//! INFO id=4 size=4 Added
//! INFO id=4 Plant added
//! ```
//!
//! Failures are logged with an `error` field holding the underlying
//! [`ServiceError`](crate::service::ServiceError).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - controllers log controller_type
        .compact() // Compact format shows spans inline (e.g., "submit:create")
        .init();
}
