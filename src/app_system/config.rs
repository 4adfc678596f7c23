use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Runtime settings for a [`StorefrontSystem`](super::StorefrontSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Emails that get the admin role when signed in.
    pub admin_emails: Vec<String>,
    /// Products per catalog page.
    pub page_size: usize,
    /// Mailbox size of every actor.
    pub channel_buffer: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            admin_emails: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl StorefrontConfig {
    /// Reads `STOREFRONT_ADMIN_EMAILS`, `STOREFRONT_PAGE_SIZE` and
    /// `STOREFRONT_CHANNEL_BUFFER`. Missing or unparsable values fall back to
    /// the defaults with a log line.
    pub fn load() -> Self {
        let admin_emails = var("STOREFRONT_ADMIN_EMAILS")
            .map(|raw| parse_email_list(&raw))
            .unwrap_or_default();
        if admin_emails.is_empty() {
            warn!("No admin emails configured, the back office is unreachable");
        }

        Self {
            admin_emails,
            page_size: positive(try_load("STOREFRONT_PAGE_SIZE", DEFAULT_PAGE_SIZE), "STOREFRONT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            channel_buffer: positive(
                try_load("STOREFRONT_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER),
                "STOREFRONT_CHANNEL_BUFFER",
                DEFAULT_CHANNEL_BUFFER,
            ),
        }
    }

    pub fn with_admin(mut self, email: impl Into<String>) -> Self {
        self.admin_emails.push(email.into());
        self
    }
}

/// Splits a comma separated list, dropping blanks.
pub fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .collect()
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match var(key) {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}

fn positive(value: usize, key: &str, default: usize) -> usize {
    if value == 0 {
        warn!("{key} must be positive, using default: {default}");
        return default;
    }
    value
}
