//! Form for adding a pizza to a restaurant's menu.
//!
//! Input is validated locally before the request is sent; backend
//! validation messages are shown verbatim when the request is rejected.

#[cfg(test)]
#[path = "pizza_form_test.rs"]
mod pizza_form_test;

use leptos::prelude::*;

use crate::net::types::{NewRestaurantPizza, Pizza};

pub const MIN_PRICE: u32 = 1;
pub const MAX_PRICE: u32 = 30;

/// Check the raw form fields and build the request body.
fn validate(restaurant_id: u64, pizza_id: &str, price: &str) -> Result<NewRestaurantPizza, Vec<String>> {
    let mut errors = Vec::new();

    let pizza_id = match pizza_id.trim().parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push("Select a pizza.".to_owned());
            None
        }
    };

    let price = match price.trim().parse::<u32>() {
        Ok(p) if (MIN_PRICE..=MAX_PRICE).contains(&p) => Some(p),
        _ => {
            errors.push(format!("Price must be a whole number between {MIN_PRICE} and {MAX_PRICE}."));
            None
        }
    };

    match (pizza_id, price) {
        (Some(pizza_id), Some(price)) => Ok(NewRestaurantPizza { price, pizza_id, restaurant_id }),
        _ => Err(errors),
    }
}

/// Pizza picker plus price input. Calls `on_created` after a successful add.
#[component]
pub fn PizzaForm(restaurant_id: u64, pizzas: Vec<Pizza>, on_created: Callback<()>) -> impl IntoView {
    let pizza_id = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        let body = match validate(restaurant_id, &pizza_id.get_untracked(), &price.get_untracked()) {
            Ok(body) => body,
            Err(messages) => {
                errors.set(messages);
                return;
            }
        };
        errors.set(Vec::new());

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_restaurant_pizza(&body).await {
                    Ok(_) => {
                        pizza_id.set(String::new());
                        price.set(String::new());
                        on_created.run(());
                    }
                    Err(e) => errors.set(vec![e.to_string()]),
                }
                submitting.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, on_created);
        }
    });

    let options = pizzas
        .into_iter()
        .map(|p| {
            view! { <option value=p.id.to_string()>{p.name}</option> }
        })
        .collect::<Vec<_>>();

    view! {
        <form
            class="pizza-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <h3>"Add a pizza"</h3>
            <label class="pizza-form__label">
                "Pizza"
                <select
                    class="pizza-form__input"
                    prop:value=move || pizza_id.get()
                    on:change=move |ev| pizza_id.set(event_target_value(&ev))
                >
                    <option value="">"Select a pizza"</option>
                    {options}
                </select>
            </label>
            <label class="pizza-form__label">
                "Price"
                <input
                    class="pizza-form__input"
                    type="number"
                    min=MIN_PRICE.to_string()
                    max=MAX_PRICE.to_string()
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
            </label>
            <For each=move || errors.get() key=|msg| msg.clone() let:msg>
                <p class="pizza-form__error">{msg}</p>
            </For>
            <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                "Add"
            </button>
        </form>
    }
}
