pub mod resend;

use async_trait::async_trait;

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> anyhow::Result<()>;

    /// Whether the provider holds a usable credential. Load-bearing sends
    /// check this up front and fail closed; best-effort sends just log the
    /// eventual send error.
    fn is_configured(&self) -> bool {
        true
    }
}
