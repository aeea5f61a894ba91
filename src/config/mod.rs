use anyhow::{Context, Result};
use std::env;

/// Server-to-Server OAuth credentials for a Zoom account.
///
/// Opaque strings supplied through the environment; immutable for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            account_id: env::var("ZOOM_ACCOUNT_ID").context("ZOOM_ACCOUNT_ID must be set")?,
            client_id: env::var("ZOOM_CLIENT_ID").context("ZOOM_CLIENT_ID must be set")?,
            client_secret: env::var("ZOOM_CLIENT_SECRET")
                .context("ZOOM_CLIENT_SECRET must be set")?,
        })
    }
}
