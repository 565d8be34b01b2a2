//! # dopc-core: Pure Pricing Logic for DOPC
//!
//! This crate is the **heart** of the Delivery Order Price Calculator. It
//! contains all pricing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          DOPC Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Orchestration Shell (apps/cli)                  │   │
//! │  │      raw input → validation → quote → rendered result           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 dopc-gateway (venue data + cache)               │   │
//! │  │      two HTTP reads per venue, normalized, fetched once          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ dopc-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │ distance  │  │  pricing  │  │ validation│  │   │
//! │  │   │   Money   │  │ haversine │  │ surcharge │  │ canonical │  │   │
//! │  │   │  (cents)  │  │  meters   │  │ tier fee  │  │ precedence│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO HIDDEN STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (`VenueData`, `CalculationResult`, tiers)
//! - [`money`] - Money type with integer cent arithmetic (no floating point!)
//! - [`distance`] - Haversine great-circle distance in whole meters
//! - [`pricing`] - Small-order surcharge + tiered delivery fee
//! - [`validation`] - The canonical, order-sensitive input validator
//! - [`error`] - Domain error types
//!
//! ## Example
//!
//! ```rust
//! use dopc_core::money::Money;
//! use dopc_core::pricing::small_order_surcharge;
//!
//! // 8.50 EUR cart against a 10.00 EUR minimum → 1.50 EUR surcharge
//! let surcharge = small_order_surcharge(Money::from_cents(850), Money::from_cents(1000));
//! assert_eq!(surcharge.cents(), 150);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod distance;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use dopc_core::Money` instead of
// `use dopc_core::money::Money`

pub use error::{CoreError, PricingError, ValidationError};
pub use money::Money;
pub use types::*;
