//! An in-memory ATM.
//!
//! The [`ledger`] module is the core: a capacity-bounded collection of
//! password-protected accounts, each with a balance and an append-only
//! transaction log. The [`run`] module is the interactive console loop on
//! top of it, written against generic `io` streams so it can be scripted
//! from tests and benchmarks.
//!
//! Everything lives in process memory and is gone on exit.

pub mod ledger;
pub mod run;
