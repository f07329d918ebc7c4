//! HTTP request handlers.

pub(crate) mod health;
pub(crate) mod toc;
pub(crate) mod topics;
