//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure math from
//! page and component logic so they can be unit-tested natively.

pub mod auth;
pub mod chart;
pub mod markdown;
pub mod pagination;
pub mod storage;
pub mod validation;
