//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome, forms, and charts. Pages own data
//! fetching and hand components plain values, signals, and callbacks.

pub mod banner;
pub mod charts;
pub mod class_form;
pub mod confirm_dialog;
pub mod csv_upload;
pub mod guard;
pub mod layout;
pub mod pagination_bar;
pub mod search_box;
pub mod staff_form;
pub mod stat_card;
pub mod subject_form;
