//! Submission Coordinator
//!
//! `ContactFlow` owns every piece of page state and exposes the transitions the
//! view drives. Transitions that need the outside world return an effect value
//! ([`SendRequest`], [`FollowUp`]) instead of performing it, so the view decides
//! how to run the send and the timer.
//!
//! Success path: `Sending --ok--> AwaitingConfirmation --timer--> Ready`.

use std::fmt::Display;
use std::time::Duration;

use thiserror::Error;

use crate::animation::AnimationState;
use crate::form::{FormData, FormError, FormField};
use crate::notification::{Alert, Notification};
use crate::payload::{EmailParams, Recipient};

/// Default delay between the success banner and the follow-up reset
pub const DEFAULT_FOLLOW_UP_DELAY: Duration = Duration::from_millis(3000);

pub const SEND_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

/// Identifies one accepted submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Sending(Ticket),
    /// Delivery acknowledged, follow-up timer pending
    AwaitingConfirmation(Ticket),
}

/// Effect: perform exactly one outbound send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub ticket: Ticket,
    pub params: EmailParams,
}

/// Effect: call [`ContactFlow::follow_up_elapsed`] after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub ticket: Ticket,
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    AlreadySending,

    #[error(transparent)]
    Invalid(#[from] FormError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlow {
    form: FormData,
    animation: AnimationState,
    notification: Notification,
    phase: Phase,
    recipient: Recipient,
    follow_up_delay: Duration,
    last_ticket: u64,
}

impl ContactFlow {
    pub fn new(recipient: Recipient) -> Self {
        Self {
            form: FormData::default(),
            animation: AnimationState::Idle,
            notification: Notification::default(),
            phase: Phase::Ready,
            recipient,
            follow_up_delay: DEFAULT_FOLLOW_UP_DELAY,
            last_ticket: 0,
        }
    }

    pub fn with_follow_up_delay(mut self, delay: Duration) -> Self {
        self.follow_up_delay = delay;
        self
    }

    // ========================
    // Queries
    // ========================

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending(_))
    }

    /// Text of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_sending() {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    // ========================
    // Input events
    // ========================

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn focus_field(&mut self) {
        self.animation = AnimationState::Walk;
    }

    pub fn blur_field(&mut self) {
        self.animation = AnimationState::Idle;
    }

    pub fn dismiss_alert(&mut self) {
        self.notification.dismiss();
    }

    // ========================
    // Submission lifecycle
    // ========================

    /// Accept a submit and describe the send to perform.
    ///
    /// A pending follow-up from an earlier send is superseded.
    pub fn submit(&mut self) -> Result<SendRequest, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::AlreadySending);
        }
        self.form.validate()?;

        let ticket = self.next_ticket();
        self.phase = Phase::Sending(ticket);
        self.animation = AnimationState::Hit;
        log::debug!("[CONTACT] submit accepted, ticket {}", ticket);

        Ok(SendRequest {
            ticket,
            params: EmailParams::compose(&self.form, &self.recipient),
        })
    }

    /// Delivery acknowledged. Returns the timer to schedule, or `None` when
    /// `ticket` is stale.
    pub fn send_succeeded(&mut self, ticket: Ticket) -> Option<FollowUp> {
        if self.phase != Phase::Sending(ticket) {
            log::debug!("[CONTACT] ignoring stale success for {}", ticket);
            return None;
        }
        self.phase = Phase::AwaitingConfirmation(ticket);
        self.notification.show(Alert::sent());
        log::info!("[CONTACT] message {} delivered", ticket);

        Some(FollowUp {
            ticket,
            delay: self.follow_up_delay,
        })
    }

    /// Delivery failed. The form keeps its contents and nothing is shown to the
    /// visitor. Returns `false` when `ticket` is stale.
    pub fn send_failed(&mut self, ticket: Ticket, error: &impl Display) -> bool {
        if self.phase != Phase::Sending(ticket) {
            log::debug!("[CONTACT] ignoring stale failure for {}", ticket);
            return false;
        }
        self.phase = Phase::Ready;
        self.animation = AnimationState::Idle;
        log::warn!("[CONTACT] message {} failed: {}", ticket, error);
        true
    }

    /// Follow-up timer fired: swap the banner, clear the form, go idle.
    pub fn follow_up_elapsed(&mut self, ticket: Ticket) -> bool {
        if self.phase != Phase::AwaitingConfirmation(ticket) {
            return false;
        }
        self.notification.show(Alert::follow_up());
        self.form.reset();
        self.animation = AnimationState::Idle;
        self.phase = Phase::Ready;
        true
    }

    /// Invalidate any in-flight completion or pending timer.
    pub fn abandon(&mut self) {
        if self.phase != Phase::Ready {
            log::debug!("[CONTACT] abandoning {:?}", self.phase);
        }
        self.next_ticket();
        self.phase = Phase::Ready;
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{AlertKind, FOLLOW_UP_TEXT, SENT_TEXT};

    fn owner() -> Recipient {
        Recipient::new("Owner", "owner@example.com")
    }

    fn filled() -> ContactFlow {
        let mut flow = ContactFlow::new(owner());
        flow.update_field(FormField::Name, "Ann");
        flow.update_field(FormField::Email, "ann@x.com");
        flow.update_field(FormField::Message, "Hi");
        flow
    }

    #[test]
    fn test_initial_state() {
        let flow = ContactFlow::new(owner());
        assert_eq!(flow.phase(), Phase::Ready);
        assert_eq!(flow.animation(), AnimationState::Idle);
        assert!(flow.form().is_empty());
        assert!(!flow.notification().is_visible());
        assert_eq!(flow.submit_label(), "Send Message");
    }

    #[test]
    fn test_focus_and_blur() {
        let mut flow = ContactFlow::new(owner());
        flow.focus_field();
        flow.focus_field();
        assert_eq!(flow.animation(), AnimationState::Walk);
        flow.blur_field();
        assert_eq!(flow.animation(), AnimationState::Idle);
    }

    #[test]
    fn test_submit_maps_fields_and_hits() {
        let mut flow = filled();
        flow.focus_field();

        let request = flow.submit().unwrap();

        assert_eq!(flow.animation(), AnimationState::Hit);
        assert!(flow.is_sending());
        assert_eq!(flow.submit_label(), "Sending...");
        assert_eq!(
            request.params,
            EmailParams {
                from_name: "Ann".into(),
                to_name: "Owner".into(),
                from_email: "ann@x.com".into(),
                to_email: "owner@example.com".into(),
                message: "Hi".into(),
            }
        );
    }

    #[test]
    fn test_submit_rejects_duplicate_and_invalid() {
        let mut flow = filled();
        flow.submit().unwrap();
        assert_eq!(flow.submit(), Err(SubmitRejected::AlreadySending));

        let mut empty = ContactFlow::new(owner());
        assert_eq!(
            empty.submit(),
            Err(SubmitRejected::Invalid(FormError::Missing(FormField::Name)))
        );
        assert_eq!(empty.phase(), Phase::Ready);
        assert_eq!(empty.animation(), AnimationState::Idle);
    }

    #[test]
    fn test_whitespace_only_name_is_sent() {
        let mut flow = filled();
        flow.update_field(FormField::Name, "   ");

        let request = flow.submit().unwrap();

        assert_eq!(request.params.from_name, "   ");
        assert_eq!(flow.animation(), AnimationState::Hit);
        assert!(flow.is_sending());
    }

    #[test]
    fn test_success_then_follow_up() {
        let mut flow = filled().with_follow_up_delay(Duration::from_millis(50));
        let request = flow.submit().unwrap();

        let follow_up = flow.send_succeeded(request.ticket).unwrap();
        assert_eq!(follow_up.delay, Duration::from_millis(50));
        assert_eq!(flow.phase(), Phase::AwaitingConfirmation(request.ticket));
        assert_eq!(flow.submit_label(), "Send Message");
        let alert = flow.notification().current().unwrap();
        assert_eq!((alert.text.as_str(), alert.kind), (SENT_TEXT, AlertKind::Success));
        // Nothing resets until the timer fires
        assert_eq!(flow.form().name, "Ann");
        assert_eq!(flow.animation(), AnimationState::Hit);

        assert!(flow.follow_up_elapsed(follow_up.ticket));
        let alert = flow.notification().current().unwrap();
        assert_eq!((alert.text.as_str(), alert.kind), (FOLLOW_UP_TEXT, AlertKind::Danger));
        assert!(flow.form().is_empty());
        assert_eq!(flow.animation(), AnimationState::Idle);
        assert_eq!(flow.phase(), Phase::Ready);
    }

    #[test]
    fn test_failure_keeps_form_and_hides_nothing() {
        let mut flow = filled();
        let request = flow.submit().unwrap();

        assert!(flow.send_failed(request.ticket, &"network down"));

        assert_eq!(flow.phase(), Phase::Ready);
        assert_eq!(flow.animation(), AnimationState::Idle);
        assert_eq!(flow.form(), &FormData::new("Ann", "ann@x.com", "Hi"));
        assert!(!flow.notification().is_visible());
    }

    #[test]
    fn test_stale_completions_are_ignored() {
        let mut flow = filled();
        let first = flow.submit().unwrap();
        let follow_up = flow.send_succeeded(first.ticket).unwrap();

        // Resubmitting supersedes the pending follow-up
        let second = flow.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);
        assert!(!flow.follow_up_elapsed(follow_up.ticket));
        assert_eq!(flow.send_succeeded(first.ticket), None);
        assert!(!flow.send_failed(first.ticket, &"late"));
        assert!(flow.is_sending());
    }

    #[test]
    fn test_abandon_invalidates_in_flight() {
        let mut flow = filled();
        let request = flow.submit().unwrap();

        flow.abandon();

        assert_eq!(flow.phase(), Phase::Ready);
        assert_eq!(flow.send_succeeded(request.ticket), None);
        assert!(!flow.notification().is_visible());
    }

    #[test]
    fn test_dismiss_alert() {
        let mut flow = filled();
        let request = flow.submit().unwrap();
        flow.send_succeeded(request.ticket);
        flow.dismiss_alert();
        assert!(!flow.notification().is_visible());
    }
}
