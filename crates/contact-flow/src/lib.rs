//! Contact Flow
//!
//! Interaction state of the portfolio contact page: form contents, the fox's
//! animation clip, the status banner and the submission lifecycle.
//! Pure state with no browser dependencies, so it runs and tests natively.

mod animation;
mod flow;
mod form;
mod mailer;
mod notification;
mod payload;

pub use animation::AnimationState;
pub use flow::{
    ContactFlow, FollowUp, Phase, SendRequest, SubmitRejected, Ticket, DEFAULT_FOLLOW_UP_DELAY,
    SENDING_LABEL, SEND_LABEL,
};
pub use form::{is_valid_email, FormData, FormError, FormField};
pub use mailer::Mailer;
pub use notification::{Alert, AlertKind, Notification, FOLLOW_UP_TEXT, SENT_TEXT};
pub use payload::{EmailParams, Recipient};
