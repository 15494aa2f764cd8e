//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `app::RouteView` picks one page per location. Each page owns its data
//! fetching and delegates rendering details to `components`.

pub mod home;
pub mod restaurant;
