//! Core types, validation rules and the integrity engine for the recruiting
//! pipeline.
//!
//! This crate is free of HTTP and database dependencies. Storage backends
//! implement [`store::RecruitStore`]; the request shell drives
//! [`registry::Registry`].

// Native `async fn` in traits; the `Send` bounds are spelled out on the
// returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod model;
pub mod registry;
pub mod store;
pub mod validate;

pub use error::{Error, Result, Write};
pub use registry::Registry;
