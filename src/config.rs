use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // Content
    pub content_dir: PathBuf,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Contact forwarding
    pub site_url: String,
    pub contact_to_email: String,
    pub submit_timeout_seconds: u64,

    // HubSpot Forms (both required for the provider to be active)
    pub hubspot_portal_id: Option<String>,
    pub hubspot_form_guid: Option<String>,

    // Web3Forms
    pub web3forms_access_key: Option<String>,

    // EmailJS (all three required for the provider to be active)
    pub emailjs_service_id: Option<String>,
    pub emailjs_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        // Content
        let content_dir =
            PathBuf::from(env::var("CONTENT_DIR").unwrap_or_else(|_| "content".to_string()));

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Contact forwarding
        let site_url =
            env::var("SITE_URL").unwrap_or_else(|_| "https://homeplaceflorida.com".to_string());
        let contact_to_email = env::var("CONTACT_TO_EMAIL")
            .unwrap_or_else(|_| "steve@homeplaceflorida.com".to_string());
        let submit_timeout_seconds = env::var("SUBMIT_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        // Provider credentials are all optional; the forwarder decides which
        // providers are active from what is present
        let hubspot_portal_id = env::var("HUBSPOT_PORTAL_ID").ok().filter(|s| !s.is_empty());
        let hubspot_form_guid = env::var("HUBSPOT_FORM_GUID").ok().filter(|s| !s.is_empty());
        let web3forms_access_key = env::var("WEB3FORMS_ACCESS_KEY")
            .ok()
            .filter(|s| !s.is_empty());
        let emailjs_service_id = env::var("EMAILJS_SERVICE_ID").ok().filter(|s| !s.is_empty());
        let emailjs_template_id = env::var("EMAILJS_TEMPLATE_ID")
            .ok()
            .filter(|s| !s.is_empty());
        let emailjs_public_key = env::var("EMAILJS_PUBLIC_KEY").ok().filter(|s| !s.is_empty());

        Ok(Settings {
            env,
            server_addr,
            content_dir,
            cors_allow_origins,
            site_url,
            contact_to_email,
            submit_timeout_seconds,
            hubspot_portal_id,
            hubspot_form_guid,
            web3forms_access_key,
            emailjs_service_id,
            emailjs_template_id,
            emailjs_public_key,
        })
    }
}
