use serde::Deserialize;

/// Inbound contact-form payload.
///
/// Not a stored collection: submissions are forwarded to a third-party
/// CRM/email provider and never persisted here.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_interest")]
    pub interest: String,
    pub message: String,
    /// Listing the inquiry is about, if any
    #[serde(default)]
    pub property_id: Option<String>,
    /// Page the form was submitted from
    #[serde(default)]
    pub page_url: Option<String>,
}

fn default_interest() -> String {
    "General Inquiry".to_string()
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("email is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("email is not valid".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("message is required".to_string());
        }
        Ok(())
    }
}
