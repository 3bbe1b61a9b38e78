//! Unread email dashboard backed by a workflow-automation webhook.
//!
//! The board fetches the current unread batch from one webhook endpoint,
//! asks a second endpoint for an AI-generated digest, and falls back to a
//! locally computed digest when the summarizer is unavailable.

pub mod config;
pub mod domain;
pub mod summary;
pub mod terminal;
pub mod webhook;
