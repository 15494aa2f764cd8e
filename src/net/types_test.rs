use super::*;

// =============================================================
// Restaurant
// =============================================================

#[test]
fn restaurant_list_item_defaults_pizzas_to_empty() {
    let json = r#"{"id": 1, "name": "Karen's Pizza Shack", "address": "address1"}"#;
    let restaurant: Restaurant = serde_json::from_str(json).unwrap();
    assert_eq!(restaurant.id, 1);
    assert_eq!(restaurant.name, "Karen's Pizza Shack");
    assert_eq!(restaurant.address, "address1");
    assert!(restaurant.restaurant_pizzas.is_empty());
}

#[test]
fn restaurant_detail_includes_expanded_pizzas() {
    let json = serde_json::json!({
        "id": 3,
        "name": "Kiki's Pizza",
        "address": "address3",
        "restaurant_pizzas": [
            {
                "id": 7,
                "price": 5,
                "pizza_id": 2,
                "restaurant_id": 3,
                "pizza": { "id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce" }
            }
        ]
    });
    let restaurant: Restaurant = serde_json::from_value(json).unwrap();
    assert_eq!(restaurant.restaurant_pizzas.len(), 1);
    let entry = &restaurant.restaurant_pizzas[0];
    assert_eq!(entry.price, 5);
    assert_eq!(entry.pizza.as_ref().map(|p| p.name.as_str()), Some("Geri"));
}

#[test]
fn restaurant_pizza_without_expanded_pizza() {
    let json = r#"{"id": 1, "price": 3, "pizza_id": 1, "restaurant_id": 1}"#;
    let entry: RestaurantPizza = serde_json::from_str(json).unwrap();
    assert!(entry.pizza.is_none());
}

#[test]
fn restaurant_missing_name_is_rejected() {
    let json = r#"{"id": 1}"#;
    assert!(serde_json::from_str::<Restaurant>(json).is_err());
}

// =============================================================
// NewRestaurantPizza
// =============================================================

#[test]
fn new_restaurant_pizza_serializes_expected_fields() {
    let body = NewRestaurantPizza { price: 10, pizza_id: 2, restaurant_id: 3 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "price": 10, "pizza_id": 2, "restaurant_id": 3 })
    );
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_single_error() {
    let body: ErrorBody = serde_json::from_str(r#"{"error": "Restaurant not found"}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Restaurant not found"));
}

#[test]
fn error_body_error_list_is_joined() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"errors": ["Missing fields in request.", "bad price"]}"#).unwrap();
    assert_eq!(body.message().as_deref(), Some("Missing fields in request.; bad price"));
}

#[test]
fn error_body_empty_has_no_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message(), None);
}
