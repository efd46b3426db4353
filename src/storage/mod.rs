//! Storage module
//!
//! Provides the named JSON slot files all persistent state lives in.

pub mod slot_store;

pub use slot_store::{Slot, SlotStore};
