use chrono::{DateTime, Local};
use serde::Deserialize;

/// Maximum snippet length in characters (not bytes).
pub const SNIPPET_CHARS: usize = 200;

/// Raw record as the unread-mail webhook returns it. Every field is
/// required: a record missing one fails the whole batch decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmail {
    pub subject: String,
    pub from: String,
    pub received_time: String,
    pub text_body: String,
}

/// One unread message. Built once at ingestion and immutable after that;
/// in particular `snippet` is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub subject: String,
    pub from: String,
    pub received_time: String,
    pub text_body: String,
    pub snippet: String,
}

impl Email {
    pub fn from_raw(raw: RawEmail) -> Self {
        let snippet = make_snippet(&raw.text_body);
        Self {
            subject: raw.subject,
            from: raw.from,
            received_time: format_received_time(&raw.received_time),
            text_body: raw.text_body,
            snippet,
        }
    }
}

/// First 200 characters of the body, with "..." appended when the body was
/// actually truncated.
pub fn make_snippet(body: &str) -> String {
    let mut out: String = body.chars().take(SNIPPET_CHARS).collect();
    if body.chars().count() > SNIPPET_CHARS {
        out.push_str("...");
    }
    out
}

/// Most deployments send ISO timestamps, but some call sites return an
/// already-formatted locale string. Reformat what parses, keep the rest.
fn format_received_time(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(body: &str) -> RawEmail {
        RawEmail {
            subject: "Subject".into(),
            from: "someone@example.com".into(),
            received_time: "yesterday".into(),
            text_body: body.into(),
        }
    }

    #[test]
    fn snippet_truncates_long_body_with_ellipsis() {
        let body = "x".repeat(201);
        let email = Email::from_raw(raw(&body));
        assert_eq!(email.snippet.chars().count(), 203);
        assert!(email.snippet.ends_with("..."));
        assert_eq!(&email.snippet[..200], &body[..200]);
    }

    #[test]
    fn snippet_keeps_short_body_unchanged() {
        let email = Email::from_raw(raw("short body"));
        assert_eq!(email.snippet, "short body");
    }

    #[test]
    fn snippet_of_exactly_200_chars_has_no_ellipsis() {
        let body = "y".repeat(200);
        let email = Email::from_raw(raw(&body));
        assert_eq!(email.snippet, body);
    }

    #[test]
    fn snippet_counts_characters_not_bytes() {
        // 250 two-byte characters: truncation must not split a char.
        let body = "é".repeat(250);
        let snippet = make_snippet(&body);
        assert_eq!(snippet.chars().count(), 203);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn unparseable_received_time_is_kept_verbatim() {
        let email = Email::from_raw(raw("body"));
        assert_eq!(email.received_time, "yesterday");
    }

    #[test]
    fn rfc3339_received_time_is_reformatted() {
        let mut r = raw("body");
        r.received_time = "2024-06-01T12:30:00Z".into();
        let email = Email::from_raw(r);
        // Local-time rendering, so only check the shape.
        assert_eq!(email.received_time.len(), "2024-06-01 12:30".len());
        assert!(email.received_time.starts_with("2024-"));
    }

    #[test]
    fn raw_email_decode_requires_every_field() {
        let missing_body = r#"{"subject":"s","from":"f","receivedTime":"t"}"#;
        assert!(serde_json::from_str::<RawEmail>(missing_body).is_err());

        let complete =
            r#"{"subject":"s","from":"f","receivedTime":"t","textBody":"b"}"#;
        let decoded: RawEmail = serde_json::from_str(complete).unwrap();
        assert_eq!(decoded.text_body, "b");
    }
}
