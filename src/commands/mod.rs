//! External Service Bindings
//!
//! Frontend bindings to the services the contact page talks to, organized by
//! domain.

mod email;
mod scene;

pub use email::*;
pub use scene::*;
