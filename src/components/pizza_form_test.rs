use super::*;

#[test]
fn validate_builds_request_body() {
    let body = validate(3, "2", "10").unwrap();
    assert_eq!(body, NewRestaurantPizza { price: 10, pizza_id: 2, restaurant_id: 3 });
}

#[test]
fn validate_trims_whitespace() {
    let body = validate(1, " 4 ", " 30 ").unwrap();
    assert_eq!(body.pizza_id, 4);
    assert_eq!(body.price, 30);
}

#[test]
fn validate_requires_pizza_selection() {
    let errors = validate(1, "", "5").unwrap_err();
    assert_eq!(errors, vec!["Select a pizza.".to_owned()]);
}

#[test]
fn validate_rejects_price_out_of_range() {
    assert!(validate(1, "1", "0").is_err());
    assert!(validate(1, "1", "31").is_err());
    assert!(validate(1, "1", &MIN_PRICE.to_string()).is_ok());
    assert!(validate(1, "1", &MAX_PRICE.to_string()).is_ok());
}

#[test]
fn validate_rejects_non_integer_price() {
    let errors = validate(1, "1", "9.50").unwrap_err();
    assert_eq!(errors, vec!["Price must be a whole number between 1 and 30.".to_owned()]);
}

#[test]
fn validate_reports_every_problem() {
    let errors = validate(1, "x", "-1").unwrap_err();
    assert_eq!(errors.len(), 2);
}
