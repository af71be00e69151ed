use crate::config::Config;

/// Outgoing mail handle shared through application state.
///
/// Delivery is stubbed: messages are logged, never sent. The SMTP settings
/// from the environment are carried along so the log line shows where the
/// message would have gone.
#[derive(Clone)]
pub struct Mailer {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
}

impl Mailer {
    /// Builds a mailer from the optional EMAIL_* settings in configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.email_host.clone(),
            port: config.email_port,
            username: config.email_username.clone(),
        }
    }

    /// Records an outgoing message.
    ///
    /// # Arguments
    /// - `to` - Recipient address
    /// - `subject` - Message subject line
    /// - `message` - Plain-text body
    pub fn send(&self, to: &str, subject: &str, message: &str) {
        tracing::debug!(
            host = self.host.as_deref().unwrap_or("<unset>"),
            port = self.port.unwrap_or(0),
            username = self.username.as_deref().unwrap_or("<unset>"),
            "smtp transport (stubbed)"
        );
        tracing::info!(to, subject, message, "outgoing email (delivery stubbed)");
    }
}
