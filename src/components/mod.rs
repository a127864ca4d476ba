//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`catalog`] - Product list with search, filters, sorting and pagination
//! - [`detail`] - Single product view
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`rating`] - Star rating display shared by both views

pub mod catalog;
pub mod detail;
pub mod icons;
pub mod rating;
pub mod router;

pub use router::AppRouter;
