//! Outbound email payload.

use serde::{Deserialize, Serialize};

use crate::form::FormData;

/// Site owner who receives every message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Template parameters of one transactional email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

impl EmailParams {
    /// Map form fields 1:1, adding the fixed recipient
    pub fn compose(form: &FormData, recipient: &Recipient) -> Self {
        Self {
            from_name: form.name.clone(),
            to_name: recipient.name.clone(),
            from_email: form.email.clone(),
            to_email: recipient.email.clone(),
            message: form.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compose_payload() {
        let form = FormData::new("Ann", "ann@x.com", "Hi");
        let owner = Recipient::new("Owner", "owner@example.com");

        let params = EmailParams::compose(&form, &owner);

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "from_name": "Ann",
                "to_name": "Owner",
                "from_email": "ann@x.com",
                "to_email": "owner@example.com",
                "message": "Hi",
            })
        );
    }
}
