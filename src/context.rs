//! Contact Page Context
//!
//! Shared state provided via Leptos Context API. Wraps the interaction state
//! machine in a signal and runs the effects it hands back.

use std::time::Duration;

use contact_flow::{ContactFlow, FormField, Mailer, Ticket};
use leptos::prelude::*;

use crate::commands::{EmailJsClient, SendError};
use crate::config::ContactConfig;
use crate::tasks::ViewTasks;

#[derive(Clone, Copy)]
pub struct ContactContext {
    /// Form, animation, banner and submission phase
    pub flow: RwSignal<ContactFlow>,
    mailer: StoredValue<EmailJsClient>,
    tasks: ViewTasks,
}

impl ContactContext {
    /// Must be called inside the page component so cleanup follows its owner.
    pub fn new(config: &ContactConfig) -> Self {
        let delay = Duration::from_millis(u64::from(config.follow_up_delay_ms));
        let flow = RwSignal::new(
            ContactFlow::new(config.recipient.clone()).with_follow_up_delay(delay),
        );
        on_cleanup(move || {
            flow.try_update_untracked(|flow| flow.abandon());
        });

        Self {
            flow,
            mailer: StoredValue::new(EmailJsClient::new(config.emailjs.clone())),
            tasks: ViewTasks::new(),
        }
    }

    pub fn update_field(&self, field: FormField, value: String) {
        self.flow.update(|flow| flow.update_field(field, value));
    }

    pub fn focus(&self) {
        self.flow.update(|flow| flow.focus_field());
    }

    pub fn blur(&self) {
        self.flow.update(|flow| flow.blur_field());
    }

    pub fn dismiss_alert(&self) {
        self.flow.update(|flow| flow.dismiss_alert());
    }

    /// Start a send if the flow accepts the submit
    pub fn submit(&self) {
        let request = match self.flow.try_update(|flow| flow.submit()) {
            Some(Ok(request)) => request,
            Some(Err(rejected)) => {
                log::debug!("[CONTACT] submit rejected: {}", rejected);
                return;
            }
            None => return,
        };

        let ctx = *self;
        self.tasks.spawn(async move {
            let Some(mailer) = ctx.mailer.try_get_value() else {
                return;
            };
            let outcome = mailer.send(&request.params).await;
            ctx.finish(request.ticket, outcome);
        });
    }

    fn finish(&self, ticket: Ticket, outcome: Result<(), SendError>) {
        match outcome {
            Ok(()) => {
                let Some(Some(follow_up)) = self.flow.try_update(|flow| flow.send_succeeded(ticket)) else {
                    return;
                };
                let flow = self.flow;
                let delay_ms = u32::try_from(follow_up.delay.as_millis()).unwrap_or(u32::MAX);
                self.tasks.schedule(delay_ms, move || {
                    flow.try_update(|flow| flow.follow_up_elapsed(follow_up.ticket));
                });
            }
            Err(err) => {
                self.flow.try_update(|flow| flow.send_failed(ticket, &err));
            }
        }
    }
}

/// Get the contact context provided by `ContactPage`
pub fn use_contact() -> ContactContext {
    expect_context::<ContactContext>()
}
