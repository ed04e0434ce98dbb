use async_trait::async_trait;
use eyre::Result;

/// Delivers password-reset codes to account holders.
///
/// Actual delivery (SMTP, a provider API) is an external collaborator; the
/// server only needs something that accepts an address and a code.
#[async_trait]
pub trait OtpMailer: Send + Sync {
    async fn send_otp(&self, email: &str, otp: &str) -> Result<()>;
}

/// Development mailer that writes the code to the log instead of sending
/// mail.
pub struct LogMailer;

#[async_trait]
impl OtpMailer for LogMailer {
    async fn send_otp(&self, email: &str, otp: &str) -> Result<()> {
        tracing::info!("Password reset code for {}: {}", email, otp);
        Ok(())
    }
}
