//! Request gating applied before routing.
//!
//! - [`origin::OriginGate`] -- Rejects requests whose `Origin` is not allow-listed.

pub mod origin;
