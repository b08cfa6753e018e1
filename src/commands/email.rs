//! Email Delivery
//!
//! EmailJS REST binding used as the page's [`Mailer`].

use contact_flow::{EmailParams, Mailer};
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsConfig;

// ========================
// Types
// ========================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Email provider rejected the message: {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// Body of `POST /api/v1.0/email/send`
#[derive(Serialize, Debug)]
struct SendArgs<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    user_id: &'a str,
    template_params: &'a EmailParams,
}

impl<'a> SendArgs<'a> {
    fn new(config: &'a EmailJsConfig, params: &'a EmailParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: params,
        }
    }
}

// ========================
// Client
// ========================

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { config }
    }
}

impl Mailer for EmailJsClient {
    type Error = SendError;

    async fn send(&self, params: &EmailParams) -> Result<(), SendError> {
        log::debug!("[EMAIL] sending via service {}", self.config.service_id);
        let response = Request::post(&self.config.endpoint)
            .json(&SendArgs::new(&self.config, params))
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(SendError::Rejected { status, message })
    }
}
