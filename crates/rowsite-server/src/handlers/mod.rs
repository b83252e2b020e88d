//! HTTP request handlers.

pub(crate) mod health;
pub(crate) mod html;
pub(crate) mod pages;
