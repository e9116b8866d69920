//! Client-side state shared by the data-access layer and the views.
//!
//! DESIGN
//! ======
//! Only the session is shared. Every view owns its own `Loadable` state and
//! replaces it wholesale on each fetch; nothing here is a cross-view cache.

pub mod loadable;
pub mod navigation;
pub mod session;
pub mod storage;
