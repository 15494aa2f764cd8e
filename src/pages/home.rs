//! Landing page listing every restaurant.

use leptos::prelude::*;

use crate::components::restaurant_card::RestaurantCard;

/// Restaurant list, shown for both `/` and `/restaurants`.
#[component]
pub fn HomePage() -> impl IntoView {
    let restaurants = LocalResource::new(|| crate::net::api::fetch_restaurants());

    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Restaurants"</h1>
            <Suspense fallback=move || view! { <p>"Loading restaurants..."</p> }>
                {move || {
                    restaurants
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p class="home-page__empty">"No restaurants yet."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="home-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|r| view! { <RestaurantCard restaurant=r/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="page-error">{format!("Could not load restaurants: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
