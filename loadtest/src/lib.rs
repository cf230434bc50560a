//! Load-test scenario for the storefront microservices.
//!
//! A simulated user walks the storefront gateway: it picks one of five
//! read-only endpoints at random, issues a single GET request, and then
//! idles for 1-5 seconds before the next pick. Everything beyond that
//! single user iteration (concurrency, pacing, statistics) is handled by
//! [balter], which repeats [`storefront_user`] across as many concurrent
//! users as the requested load calls for.

pub mod endpoints;
pub mod session;

pub use session::storefront_user;
