#![forbid(unsafe_code)]
#![warn(
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions, clippy::redundant_pub_crate)]
//! Yew front-end for the empleados API.
//!
//! Layout:
//! - `config`, `models`, `routes`: plain data and helpers, tested natively
//! - `app`: shell, contexts, and the adapters that bind core controllers to Yew
//! - `services`: `gloo-net` implementation of the API port
//! - `components`: prop-driven building blocks
//! - `features`: the listing page and the stepped form page

pub mod config;
pub mod models;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
