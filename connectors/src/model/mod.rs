//! Data transfer objects deserialized from upstream API responses.
//!
//! Entities carrying an upstream id compare equal by that id alone; the other
//! fields are a snapshot that may legitimately differ between fetches.

pub mod discord;
pub mod github;
pub mod gitlab;
