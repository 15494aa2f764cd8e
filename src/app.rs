//! Root application component with routing.
//!
//! ARCHITECTURE
//! ============
//! `App` renders the navigation bar once and a `RouteView` below it. The
//! route view subscribes to the router's location and maps each pathname
//! through `routes::AppRoute::resolve`; no fallback route is declared, so an
//! unmatched location renders nothing below the navigation bar.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::navbar::Navbar;
use crate::pages::{home::HomePage, restaurant::RestaurantPage};
use crate::routes::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component. Takes no props.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/restaurants.css"/>
        <Title text="Pizza Restaurants"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <RouteView/>
            </main>
        </Router>
    }
}

/// Renders the page matching the current location.
///
/// Must be mounted inside a `Router`. `/` and `/restaurants` resolve to the
/// same route value, so moving between them keeps the list mounted.
#[component]
pub fn RouteView() -> impl IntoView {
    let location = use_location();
    let route = Memo::new(move |_| AppRoute::resolve(&location.pathname.get()));

    move || match route.get() {
        Some(AppRoute::RestaurantList) => view! { <HomePage/> }.into_any(),
        Some(AppRoute::RestaurantDetail { id }) => view! { <RestaurantPage id/> }.into_any(),
        None => ().into_any(),
    }
}
