use anyhow::Context;
use async_trait::async_trait;

use super::EmailProvider;

pub struct ResendEmailProvider {
    api_key: String,
    from_address: String,
    client: reqwest::Client,
}

impl ResendEmailProvider {
    pub fn new(api_key: String, from_address: String) -> Self {
        Self {
            api_key,
            from_address,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendEmailProvider {
    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<()> {
        // Fail closed when the credential is missing; callers decide whether
        // that is fatal (transition emails) or merely logged (admin notice).
        anyhow::ensure!(!self.api_key.is_empty(), "RESEND_API_KEY is not configured");

        self.client
            .post("https://api.resend.com/emails")
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "from": self.from_address,
                "to": to,
                "subject": subject,
                "html": html_body,
            }))
            .send()
            .await
            .context("failed to send email via Resend")?
            .error_for_status()
            .context("Resend API returned error")?;

        Ok(())
    }
}
