//! URL handling module for Sumi-Sweep
//!
//! This module provides domain extraction for seeds and the same-origin
//! filter applied to discovered links.

mod domain;
mod resolve;

// Re-export main functions
pub use domain::{authority, extract_domain};
pub use resolve::{follow_target, resolve_link};
