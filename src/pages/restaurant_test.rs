use super::*;
use crate::net::types::Pizza;

fn entry(pizza: Option<Pizza>) -> RestaurantPizza {
    RestaurantPizza { id: 1, price: 12, pizza_id: 5, restaurant_id: 2, pizza }
}

#[test]
fn parse_restaurant_id_accepts_positive_integers() {
    assert_eq!(parse_restaurant_id("42"), Some(42));
}

#[test]
fn parse_restaurant_id_rejects_other_input() {
    assert_eq!(parse_restaurant_id("0"), None);
    assert_eq!(parse_restaurant_id("-3"), None);
    assert_eq!(parse_restaurant_id("abc"), None);
    assert_eq!(parse_restaurant_id(""), None);
}

#[test]
fn format_price_prefixes_dollar_sign() {
    assert_eq!(format_price(5), "$5");
}

#[test]
fn pizza_label_uses_expanded_name() {
    let pizza = Pizza { id: 5, name: "Emma".to_owned(), ingredients: "Dough".to_owned() };
    assert_eq!(pizza_label(&entry(Some(pizza))), "Emma");
}

#[test]
fn pizza_label_falls_back_to_id() {
    assert_eq!(pizza_label(&entry(None)), "Pizza #5");
}
