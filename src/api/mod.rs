//! Live-mode HTTP access to the Argus API

mod client;
pub mod wire;

pub use client::ApiClient;
