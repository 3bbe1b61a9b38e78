//! Local fallback digest, used when the remote summarizer is unavailable.

use crate::domain::email::Email;

/// Key points taken from each body, at most.
const MAX_KEY_POINTS: usize = 3;

/// Display-name part of a From header: the text before `<` (trimmed,
/// possibly empty) when an angle-bracket address is present, otherwise the
/// header unchanged.
pub fn display_name(from: &str) -> &str {
    match from.find('<') {
        Some(idx) => from[..idx].trim(),
        None => from,
    }
}

/// Deterministic digest of the unread batch. Pure: same list in, same text
/// out, no I/O.
pub fn local_summary(emails: &[Email]) -> String {
    if emails.is_empty() {
        return "No emails to summarize.".to_string();
    }

    let mut out = String::from("Unread email digest\n");
    for (i, email) in emails.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{}. From: {}\n", i + 1, display_name(&email.from)));
        out.push_str(&format!("   Received: {}\n", email.received_time));
        out.push_str(&format!("   Subject: {}\n", email.subject));

        let points: Vec<&str> = email
            .text_body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(MAX_KEY_POINTS)
            .collect();
        if !points.is_empty() {
            out.push_str("   Key points:\n");
            for point in points {
                out.push_str(&format!("   - {point}\n"));
            }
        }
    }

    out.push_str(&format!("\n{} unread email(s) summarized.\n", emails.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::email::RawEmail;

    fn email(from: &str, subject: &str, body: &str) -> Email {
        Email::from_raw(RawEmail {
            subject: subject.into(),
            from: from.into(),
            received_time: "2024-06-01 12:30".into(),
            text_body: body.into(),
        })
    }

    #[test]
    fn display_name_extracts_text_before_angle_bracket() {
        assert_eq!(display_name("Jane Doe <jane@x.com>"), "Jane Doe");
    }

    #[test]
    fn display_name_keeps_plain_address_unchanged() {
        assert_eq!(display_name("jane@x.com"), "jane@x.com");
    }

    #[test]
    fn display_name_is_empty_when_only_address_present() {
        assert_eq!(display_name("  <jane@x.com>"), "");
    }

    #[test]
    fn empty_list_yields_fixed_string() {
        assert_eq!(local_summary(&[]), "No emails to summarize.");
    }

    #[test]
    fn summary_is_idempotent() {
        let emails = vec![
            email("Jane Doe <jane@x.com>", "Hello", "line one\nline two"),
            email("bob@x.com", "Re: Hello", "reply"),
        ];
        assert_eq!(local_summary(&emails), local_summary(&emails));
    }

    #[test]
    fn one_block_per_email() {
        let emails = vec![
            email("a@x.com", "A", "a"),
            email("b@x.com", "B", "b"),
            email("c@x.com", "C", "c"),
        ];
        let text = local_summary(&emails);
        assert_eq!(text.matches("From: ").count(), 3);
        assert!(text.contains("3 unread email(s) summarized."));
    }

    #[test]
    fn at_most_three_key_points_per_block() {
        let body = "one\n\ntwo\n   \nthree\nfour\nfive";
        let text = local_summary(&[email("a@x.com", "A", body)]);
        assert_eq!(text.matches("   - ").count(), 3);
        assert!(text.contains("   - one\n"));
        assert!(text.contains("   - three\n"));
        assert!(!text.contains("four"));
    }

    #[test]
    fn blank_lines_are_not_key_points() {
        let body = "\n\n  \nonly real line\n";
        let text = local_summary(&[email("a@x.com", "A", body)]);
        assert_eq!(text.matches("   - ").count(), 1);
        assert!(text.contains("   - only real line\n"));
    }
}
