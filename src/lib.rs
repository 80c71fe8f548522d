// Library target exists solely for the integration tests in tests/.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests can import types via `spelldr::store::*` / `spelldr::drill::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod drill;
pub mod lookup;
pub mod nav;
pub mod store;

// Private: required transitively (won't compile without them)
mod app;
mod config;
mod speech;
mod ui;
