//! Core library for replygen
//!
//! This crate implements the **Functional Core** of the replygen service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`replygen_core`** (this crate): Pure transformation functions with zero I/O
//! - **`replygen`**: Configuration, the provider call and the HTTP server (the Imperative Shell)
//!
//! Everything here is deterministic: the same request always yields the same
//! prompt, and the shell supplies anything random (such as session nonces).
//!
//! # Module Organization
//!
//! - [`reply`]: Request validation, tone resolution, prompt assembly and reply clean-up
//! - [`session`]: Session identifier policy for provider calls
//! - [`cors`]: Parsing of the allowed-origins setting
//!
//! # Example Usage
//!
//! ```rust
//! use replygen_core::reply::{build_prompt, validate_request, GenerationRequest, Tone};
//!
//! let request = GenerationRequest {
//!     situation: "Decline Tuesday's meeting and propose Thursday.".to_string(),
//!     tone: "formal".to_string(),
//! };
//!
//! let validated = validate_request(&request).unwrap();
//! assert_eq!(validated.tone, Tone::Formal);
//!
//! let prompt = build_prompt(&validated);
//! assert!(prompt.user_message.starts_with("Write a formal and professional email reply"));
//! ```

pub mod cors;
pub mod reply;
pub mod session;
