//! Client state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Session state is app-wide; list, banner, and analytics state are owned by
//! the page that renders them.

pub mod analytics;
pub mod banner;
pub mod list;
pub mod session;
