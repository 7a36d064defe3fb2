//! Service layer modules for external integrations.
//!
//! Contains the outbound client that forwards contact submissions to
//! third-party CRM/email providers.

pub mod forwarder;

pub use forwarder::{ContactForwarder, ForwardError, Provider};
