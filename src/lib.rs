//! colab-helper library
//!
//! Core functionality for the Google Colab notebook helper: the config and
//! recent-notebook stores, path-to-URL resolution, and notebook ID
//! extraction. The CLI in `main.rs` is a thin dispatcher over these.

pub mod colab;
pub mod config;
