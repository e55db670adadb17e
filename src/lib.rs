//! Web service managing a list of IPv4 network allocations.
//!
//! Every mutation passes through the submission gate in [`gate`] before it
//! reaches the store: address syntax, duplicate detection against the live
//! allocation set, and host-count sanity. The [`client`] module covers the
//! delete round-trip and the edit navigation target.

pub mod client;
pub mod config;
pub mod dtos;
pub mod error;
pub mod gate;
pub mod routes;
pub mod store;
pub mod validate;
