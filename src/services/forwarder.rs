//! Contact submission forwarder.
//!
//! Relays structured form payloads to third-party CRM/email providers:
//! HubSpot Forms, Web3Forms, and EmailJS, in that priority order. Each
//! configured provider is tried once; on failure the next one is attempted.
//! There is no retry/backoff and no idempotency key - a submission that
//! fails every provider is surfaced to the caller.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;
use uuid::Uuid;

use crate::config::Settings;
use crate::domain::ContactRequest;

pub const HUBSPOT_SUBMIT_BASE: &str = "https://api.hsforms.com/submissions/v3/integration/submit";
pub const WEB3FORMS_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("no contact provider is configured")]
    NotConfigured,

    #[error("all contact providers failed; last error: {last_error}")]
    AllProvidersFailed { last_error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    HubSpot,
    Web3Forms,
    EmailJs,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HubSpot => "hubspot",
            Self::Web3Forms => "web3forms",
            Self::EmailJs => "emailjs",
        }
    }
}

#[derive(Debug, Clone)]
struct HubSpotConfig {
    portal_id: String,
    form_guid: String,
}

#[derive(Debug, Clone)]
struct Web3FormsConfig {
    access_key: String,
}

#[derive(Debug, Clone)]
struct EmailJsConfig {
    service_id: String,
    template_id: String,
    public_key: String,
}

/// Client for the contact submission providers.
#[derive(Clone)]
pub struct ContactForwarder {
    client: Client,
    hubspot: Option<HubSpotConfig>,
    web3forms: Option<Web3FormsConfig>,
    emailjs: Option<EmailJsConfig>,
    site_url: String,
    to_email: String,
}

impl ContactForwarder {
    /// Build the forwarder from settings. Providers with partial credentials
    /// are treated as not configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.submit_timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let hubspot = match (&settings.hubspot_portal_id, &settings.hubspot_form_guid) {
            (Some(portal_id), Some(form_guid)) => Some(HubSpotConfig {
                portal_id: portal_id.clone(),
                form_guid: form_guid.clone(),
            }),
            (None, None) => None,
            _ => {
                warn!("HubSpot partially configured; HUBSPOT_PORTAL_ID and HUBSPOT_FORM_GUID are both required");
                None
            }
        };

        let web3forms = settings
            .web3forms_access_key
            .as_ref()
            .map(|access_key| Web3FormsConfig {
                access_key: access_key.clone(),
            });

        let emailjs = match (
            &settings.emailjs_service_id,
            &settings.emailjs_template_id,
            &settings.emailjs_public_key,
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailJsConfig {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            }),
            (None, None, None) => None,
            _ => {
                warn!("EmailJS partially configured; EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID, and EMAILJS_PUBLIC_KEY are all required");
                None
            }
        };

        let forwarder = Self {
            client,
            hubspot,
            web3forms,
            emailjs,
            site_url: settings.site_url.clone(),
            to_email: settings.contact_to_email.clone(),
        };

        info!(
            providers = ?forwarder.providers().iter().map(Provider::name).collect::<Vec<_>>(),
            "Contact forwarder initialized"
        );

        Ok(forwarder)
    }

    /// Configured providers in priority order.
    pub fn providers(&self) -> Vec<Provider> {
        let mut providers = Vec::new();
        if self.hubspot.is_some() {
            providers.push(Provider::HubSpot);
        }
        if self.web3forms.is_some() {
            providers.push(Provider::Web3Forms);
        }
        if self.emailjs.is_some() {
            providers.push(Provider::EmailJs);
        }
        providers
    }

    /// Forward a submission through the provider chain, returning the
    /// provider that accepted it.
    #[instrument(skip(self, request), fields(submission_id))]
    pub async fn submit(&self, request: &ContactRequest) -> Result<Provider, ForwardError> {
        let submission_id = Uuid::new_v4();
        tracing::Span::current().record("submission_id", tracing::field::display(submission_id));

        let providers = self.providers();
        if providers.is_empty() {
            return Err(ForwardError::NotConfigured);
        }

        let mut last_error = String::new();
        for provider in providers {
            match self.dispatch(provider, request).await {
                Ok(()) => {
                    info!(provider = provider.name(), "Contact submission forwarded");
                    return Ok(provider);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "Provider submission failed; trying next"
                    );
                    last_error = format!("{}: {e:#}", provider.name());
                }
            }
        }

        Err(ForwardError::AllProvidersFailed { last_error })
    }

    async fn dispatch(&self, provider: Provider, request: &ContactRequest) -> Result<()> {
        match provider {
            Provider::HubSpot => self.submit_hubspot(request).await,
            Provider::Web3Forms => self.submit_web3forms(request).await,
            Provider::EmailJs => self.submit_emailjs(request).await,
        }
    }

    async fn submit_hubspot(&self, request: &ContactRequest) -> Result<()> {
        // providers() guarantees the config is present when dispatched
        let config = self.hubspot.as_ref().context("HubSpot not configured")?;
        let url = hubspot_submit_url(&config.portal_id, &config.form_guid)?;
        let payload = hubspot_payload(request, &self.site_url);
        self.post_json(url, &payload, Provider::HubSpot).await
    }

    async fn submit_web3forms(&self, request: &ContactRequest) -> Result<()> {
        let config = self.web3forms.as_ref().context("Web3Forms not configured")?;
        let url = Url::parse(WEB3FORMS_ENDPOINT).context("Invalid Web3Forms endpoint")?;
        let payload = web3forms_payload(request, &config.access_key);
        self.post_json(url, &payload, Provider::Web3Forms).await
    }

    async fn submit_emailjs(&self, request: &ContactRequest) -> Result<()> {
        let config = self.emailjs.as_ref().context("EmailJS not configured")?;
        let url = Url::parse(EMAILJS_ENDPOINT).context("Invalid EmailJS endpoint")?;
        let payload = emailjs_payload(
            request,
            &config.service_id,
            &config.template_id,
            &config.public_key,
            &self.to_email,
        );
        self.post_json(url, &payload, Provider::EmailJs).await
    }

    async fn post_json<T: Serialize>(&self, url: Url, payload: &T, provider: Provider) -> Result<()> {
        debug!(provider = provider.name(), url = %url, "Provider request");

        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .with_context(|| format!("{} request failed", provider.name()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{} returned {status}: {body}", provider.name())
    }
}

fn hubspot_submit_url(portal_id: &str, form_guid: &str) -> Result<Url> {
    Url::parse(&format!("{HUBSPOT_SUBMIT_BASE}/{portal_id}/{form_guid}"))
        .context("Invalid HubSpot submission URL")
}

#[derive(Debug, Serialize)]
struct HubSpotField {
    #[serde(rename = "objectTypeId")]
    object_type_id: &'static str,
    name: &'static str,
    value: String,
}

impl HubSpotField {
    fn contact(name: &'static str, value: String) -> Self {
        Self {
            object_type_id: "0-1",
            name,
            value,
        }
    }
}

#[derive(Debug, Serialize)]
struct HubSpotContext {
    #[serde(rename = "pageUri")]
    page_uri: String,
    #[serde(rename = "pageName")]
    page_name: String,
}

#[derive(Debug, Serialize)]
struct HubSpotPayload {
    fields: Vec<HubSpotField>,
    context: HubSpotContext,
}

fn hubspot_payload(request: &ContactRequest, site_url: &str) -> HubSpotPayload {
    let (first_name, last_name) = split_name(&request.name);
    HubSpotPayload {
        fields: vec![
            HubSpotField::contact("firstname", first_name),
            HubSpotField::contact("lastname", last_name),
            HubSpotField::contact("email", request.email.clone()),
            HubSpotField::contact("phone", request.phone.clone().unwrap_or_default()),
            HubSpotField::contact("message", request.message.clone()),
            HubSpotField::contact("interest_type", request.interest.clone()),
        ],
        context: HubSpotContext {
            page_uri: request
                .page_url
                .clone()
                .unwrap_or_else(|| site_url.to_string()),
            page_name: "Contact".to_string(),
        },
    }
}

#[derive(Debug, Serialize)]
struct Web3FormsPayload {
    access_key: String,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
}

fn web3forms_payload(request: &ContactRequest, access_key: &str) -> Web3FormsPayload {
    Web3FormsPayload {
        access_key: access_key.to_string(),
        name: request.name.clone(),
        email: request.email.clone(),
        phone: phone_or_placeholder(request),
        subject: format!("New Contact: {}", request.interest),
        message: compose_message(request),
    }
}

#[derive(Debug, Serialize)]
struct EmailJsPayload {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: EmailJsParams,
}

#[derive(Debug, Serialize)]
struct EmailJsParams {
    from_name: String,
    from_email: String,
    phone: String,
    interest: String,
    message: String,
    to_email: String,
}

fn emailjs_payload(
    request: &ContactRequest,
    service_id: &str,
    template_id: &str,
    public_key: &str,
    to_email: &str,
) -> EmailJsPayload {
    EmailJsPayload {
        service_id: service_id.to_string(),
        template_id: template_id.to_string(),
        user_id: public_key.to_string(),
        template_params: EmailJsParams {
            from_name: request.name.clone(),
            from_email: request.email.clone(),
            phone: phone_or_placeholder(request),
            interest: request.interest.clone(),
            message: request.message.clone(),
            to_email: to_email.to_string(),
        },
    }
}

fn phone_or_placeholder(request: &ContactRequest) -> String {
    request
        .phone
        .clone()
        .filter(|phone| !phone.is_empty())
        .unwrap_or_else(|| "Not provided".to_string())
}

// Plain-text digest sent to providers without structured fields
fn compose_message(request: &ContactRequest) -> String {
    let mut message = format!(
        "Interest: {}\nPhone: {}\n\nMessage:\n{}\n\n---\nFrom: {} ({})",
        request.interest,
        phone_or_placeholder(request),
        request.message,
        request.name,
        request.email,
    );
    if let Some(property_id) = &request.property_id {
        message.push_str(&format!("\nProperty ID: {property_id}"));
    }
    message
}

fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    match parts.next() {
        Some(first) => (first.to_string(), parts.collect::<Vec<_>>().join(" ")),
        None => (name.to_string(), String::new()),
    }
}
