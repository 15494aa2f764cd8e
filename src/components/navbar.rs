//! Persistent navigation bar rendered above every route.
//!
//! The markup does not depend on the current location, so every route shows
//! the same navigation element.

use leptos::prelude::*;

use crate::routes::AppRoute;

/// Top navigation with the brand link and the restaurant list link.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <nav class="navbar__inner">
                <a href="/" class="navbar__brand">
                    "Pizza Restaurants"
                </a>
                <span class="navbar__spacer"></span>
                <a href=AppRoute::RestaurantList.href() class="navbar__link">
                    "Restaurants"
                </a>
            </nav>
        </header>
    }
}
