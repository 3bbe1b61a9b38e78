pub mod client;

use anyhow::Result;

use crate::domain::email::RawEmail;

/// Seam between the board and the remote workflow engine. The board only
/// ever talks to the two webhook endpoints through this trait.
pub trait MailWebhook {
    /// Fetch the complete current unread batch.
    fn fetch_unread(&self) -> Result<Vec<RawEmail>>;

    /// Ask the remote summarizer for a digest of the unread batch.
    /// Errors cover network failure, non-success status and an
    /// empty/missing output field alike.
    fn summarize_unread(&self) -> Result<String>;
}
