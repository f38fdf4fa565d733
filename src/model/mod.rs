//! Pure data structures shared by the service layer and the controllers.

pub mod draft;
pub mod plant;

pub use draft::*;
pub use plant::*;
