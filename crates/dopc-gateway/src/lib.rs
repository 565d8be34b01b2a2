//! # dopc-gateway: Venue Data Gateway for DOPC
//!
//! Fetches a venue's static location and dynamic delivery specs over HTTP,
//! normalizes them into `dopc_core::VenueData`, and hosts the quote service -
//! the one-operation calculation API the orchestration shell calls.
//!
//! ## Guarantees
//! - Exactly two sequential reads per venue fetch; either failure is atomic
//!   (no partial venue data is ever observable).
//! - One attempt per fetch; retry policy belongs to the caller.
//! - Validation failures are rejected before any network I/O.
//! - Venue data is cached for the session and treated as read-only; racing
//!   populates overwrite idempotently.
//!
//! ## Modules
//!
//! - [`config`] - Endpoint and timeout configuration (env over defaults)
//! - [`wire`] - Serde DTOs for the venue contract + normalization
//! - [`client`] - The two-GET venue fetch
//! - [`service`] - Quote orchestration + session venue cache
//! - [`error`] - `GatewayError` and `QuoteError`

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod wire;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::VenueClient;
pub use config::GatewayConfig;
pub use error::{GatewayError, QuoteError};
pub use service::{QuoteRequest, QuoteService};
