//! Contact Page Configuration
//!
//! Deployment settings resolved at build time and passed to the page as a
//! value. Components never read the environment themselves.

use contact_flow::{Recipient, DEFAULT_FOLLOW_UP_DELAY};
use thiserror::Error;

pub const SERVICE_ID_KEY: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const ENDPOINT_KEY: &str = "EMAILJS_ENDPOINT";
pub const OWNER_NAME_KEY: &str = "CONTACT_OWNER_NAME";
pub const OWNER_EMAIL_KEY: &str = "CONTACT_OWNER_EMAIL";
pub const FOLLOW_UP_KEY: &str = "CONTACT_FOLLOW_UP_MS";

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_OWNER_NAME: &str = "GuangHui";
pub const DEFAULT_OWNER_EMAIL: &str = "phamquanghuy2809@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("{key} must be a number of milliseconds, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// EmailJS credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub emailjs: EmailJsConfig,
    pub recipient: Recipient,
    /// Delay between the success banner and the follow-up reset
    pub follow_up_delay_ms: u32,
}

impl ContactConfig {
    /// Settings baked in by the build (`option_env!`).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                SERVICE_ID_KEY => option_env!("EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_KEY => option_env!("EMAILJS_TEMPLATE_ID"),
                PUBLIC_KEY_KEY => option_env!("EMAILJS_PUBLIC_KEY"),
                ENDPOINT_KEY => option_env!("EMAILJS_ENDPOINT"),
                OWNER_NAME_KEY => option_env!("CONTACT_OWNER_NAME"),
                OWNER_EMAIL_KEY => option_env!("CONTACT_OWNER_EMAIL"),
                FOLLOW_UP_KEY => option_env!("CONTACT_FOLLOW_UP_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let follow_up_delay_ms = match get(FOLLOW_UP_KEY) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidNumber {
                key: FOLLOW_UP_KEY,
                value: raw,
            })?,
            None => DEFAULT_FOLLOW_UP_DELAY.as_millis() as u32,
        };

        Ok(Self {
            emailjs: EmailJsConfig {
                service_id: require(SERVICE_ID_KEY)?,
                template_id: require(TEMPLATE_ID_KEY)?,
                public_key: require(PUBLIC_KEY_KEY)?,
                endpoint: get(ENDPOINT_KEY).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            },
            recipient: Recipient::new(
                get(OWNER_NAME_KEY).unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
                get(OWNER_EMAIL_KEY).unwrap_or_else(|| DEFAULT_OWNER_EMAIL.to_string()),
            ),
            follow_up_delay_ms,
        })
    }
}
