//! Trait definitions (hexagonal ports).
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  parser · resolvers ·   │
//!                    │  engine · scheduler     │
//!                    └───────────┬─────────────┘
//!        ┌──────────────┬────────┴─────┬──────────────┐
//!        ▼              ▼              ▼              ▼
//!  ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐
//!  │  Market   │  │  Ledger   │  │  Sports   │  │   Price   │
//!  │  Source   │  │  Writer   │  │ Provider  │  │ Provider  │
//!  └───────────┘  └───────────┘  └───────────┘  └───────────┘
//! ```

pub mod inbound;
pub mod outbound;
