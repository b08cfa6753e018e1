//! Transport seam for delivering an [`EmailParams`] payload.

use std::fmt::Display;

use crate::payload::EmailParams;

/// Sends one transactional email.
///
/// Futures are not required to be `Send`: the page runs on a single-threaded
/// executor.
#[allow(async_fn_in_trait)]
pub trait Mailer {
    type Error: Display;

    async fn send(&self, params: &EmailParams) -> Result<(), Self::Error>;
}
