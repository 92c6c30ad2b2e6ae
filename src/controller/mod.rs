//! HTTP request handlers.
//!
//! Controllers extract the submitted form, consult the session for identity
//! and flash state, delegate to a service, and convert the outcome into a
//! response: a redirect after a successful mutation, or a page DTO carrying
//! form state, field errors, and any pending notice.

pub mod auth;
pub mod page;
pub mod team;
