//! # New-Plant Form
//!
//! Transient input state for one submission at a time.
//!
//! ## Submission flow
//!
//! 1. `update_field` edits the draft (refused while a submission is in flight).
//! 2. `submit` validates; an invalid draft sets the error and sends nothing.
//! 3. A valid draft is held back with `CollectionNotReady` until the collection
//!    has loaded, so the created record always has somewhere to go.
//! 4. A valid draft is sent as a create request while `submitting` is set.
//! 5. On success the created record goes to the collection and the draft resets;
//!    on failure the draft is kept and a generic error is shown.
//! 6. `submitting` is cleared once the request settles, even if its task panicked.

pub mod controller;
pub mod error;

pub use controller::*;
pub use error::*;

use crate::clients::FormClient;
use crate::framework::ControllerActor;

/// Creates a new form actor and its client.
pub fn new() -> (ControllerActor<FormController>, FormClient) {
    let (actor, inner) = ControllerActor::new(FormController::new(), 16);
    (actor, FormClient::new(inner))
}
