//! Pages compose components into the application's top-level views.

pub mod dashboard;
pub mod transactions;
