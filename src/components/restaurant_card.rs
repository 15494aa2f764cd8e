//! Card linking a restaurant in the list to its detail page.

use leptos::prelude::*;

use crate::net::types::Restaurant;
use crate::routes::AppRoute;

/// A clickable card for one restaurant.
#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let href = AppRoute::RestaurantDetail { id: restaurant.id.to_string() }.href();

    view! {
        <a class="restaurant-card" href=href>
            <span class="restaurant-card__name">{restaurant.name}</span>
            <span class="restaurant-card__address">{restaurant.address}</span>
        </a>
    }
}
