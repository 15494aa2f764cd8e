//! Detail page for a single restaurant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives the raw `:id` route parameter from `app::RouteView`. Ids that are
//! not positive integers render the not-found state without a request, since
//! the backend only addresses restaurants by integer id.

#[cfg(test)]
#[path = "restaurant_test.rs"]
mod restaurant_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::pizza_form::PizzaForm;
use crate::net::api::ApiError;
use crate::net::types::{Pizza, Restaurant, RestaurantPizza};

fn parse_restaurant_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

fn format_price(price: u32) -> String {
    format!("${price}")
}

fn pizza_label(entry: &RestaurantPizza) -> String {
    entry
        .pizza
        .as_ref()
        .map_or_else(|| format!("Pizza #{}", entry.pizza_id), |p| p.name.clone())
}

/// Restaurant detail: menu, delete action, and add-pizza form.
#[component]
pub fn RestaurantPage(id: String) -> impl IntoView {
    let Some(restaurant_id) = parse_restaurant_id(&id) else {
        log::debug!("restaurant id {id:?} is not a positive integer");
        return view! { <NotFound/> }.into_any();
    };

    let restaurant = LocalResource::new(move || crate::net::api::fetch_restaurant(restaurant_id));
    let pizzas = LocalResource::new(|| crate::net::api::fetch_pizzas());
    let delete_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_delete = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_restaurant(restaurant_id).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(e) => delete_error.set(Some(e.to_string())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            delete_error.set(Some(ApiError::Unavailable.to_string()));
        }
    });

    let on_created = Callback::new(move |()| restaurant.refetch());

    view! {
        <div class="restaurant-page">
            <Suspense fallback=move || view! { <p>"Loading restaurant..."</p> }>
                {move || {
                    restaurant
                        .get()
                        .map(|result| match result {
                            Ok(r) => {
                                view! {
                                    <RestaurantDetail
                                        restaurant=r
                                        pizzas=pizzas
                                        delete_error=delete_error
                                        on_delete=on_delete
                                        on_created=on_created
                                    />
                                }
                                    .into_any()
                            }
                            Err(e) if e.is_not_found() => view! { <NotFound/> }.into_any(),
                            Err(e) => {
                                view! { <p class="page-error">{format!("Could not load restaurant: {e}")}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
    .into_any()
}

#[component]
fn RestaurantDetail(
    restaurant: Restaurant,
    pizzas: LocalResource<Result<Vec<Pizza>, ApiError>>,
    delete_error: RwSignal<Option<String>>,
    on_delete: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let restaurant_id = restaurant.id;
    let menu = restaurant
        .restaurant_pizzas
        .iter()
        .map(|entry| {
            let label = pizza_label(entry);
            let ingredients = entry.pizza.as_ref().map(|p| p.ingredients.clone()).unwrap_or_default();
            let price = format_price(entry.price);
            view! {
                <li class="restaurant-page__pizza">
                    <span class="restaurant-page__pizza-name">{label}</span>
                    <span class="restaurant-page__pizza-ingredients">{ingredients}</span>
                    <span class="restaurant-page__pizza-price">{price}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let menu = if menu.is_empty() {
        view! { <p>"No pizzas on the menu yet."</p> }.into_any()
    } else {
        view! { <ul class="restaurant-page__pizzas">{menu}</ul> }.into_any()
    };

    view! {
        <header class="restaurant-page__header">
            <h1>{restaurant.name}</h1>
            <p class="restaurant-page__address">{restaurant.address}</p>
            <button class="btn btn--danger" on:click=move |_| on_delete.run(())>
                "Delete restaurant"
            </button>
            {move || delete_error.get().map(|msg| view! { <p class="page-error">{msg}</p> })}
        </header>

        <section class="restaurant-page__menu">
            <h2>"Pizzas"</h2>
            {menu}
        </section>

        <section class="restaurant-page__add">
            <Suspense fallback=move || view! { <p>"Loading pizzas..."</p> }>
                {move || {
                    pizzas
                        .get()
                        .map(|result| match result {
                            Ok(list) => view! { <PizzaForm restaurant_id=restaurant_id pizzas=list on_created=on_created/> }.into_any(),
                            Err(e) => {
                                view! { <p class="page-error">{format!("Could not load pizzas: {e}")}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="restaurant-page">
            <h1>"Restaurant not found"</h1>
            <a href="/">"Back to restaurants"</a>
        </div>
    }
}
