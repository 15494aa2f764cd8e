//! Reusable UI components shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navbar` is rendered once by `app::App` for every route; the remaining
//! components are composed by `pages`.

pub mod navbar;
pub mod pizza_form;
pub mod restaurant_card;
