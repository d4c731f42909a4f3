//! End-to-end resolver tests: build the real application context and drive it
//! through the GraphQL envelope, without binding a socket.

use axum::http::StatusCode;
use serde_json::{Value, json};

use storefront_api::app::schema::{GraphQlRequest, execute};
use storefront_api::app::services::{AppServices, build_services};

fn run(services: &AppServices, query: &str, variables: Value) -> (StatusCode, Value) {
    execute(
        services,
        &GraphQlRequest {
            query: query.to_string(),
            variables: Some(variables),
        },
    )
}

fn create_clothes_product(services: &AppServices, name: &str, amount: f64) -> String {
    let (status, body) = run(
        services,
        "mutation { createProduct(...) { id } }",
        json!({
            "name": name,
            "category": "clothes",
            "brand": "Acme",
            "attributes": [
                {"name": "Size", "items": [
                    {"value": "S", "displayValue": "Small"},
                    {"value": "M", "displayValue": "Medium"},
                ]},
            ],
            "price": {"amount": amount, "currency": {"label": "USD", "symbol": "$"}},
        }),
    );
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["data"]["createProduct"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn seeded_categories_are_listed() {
    let services = build_services();
    let (status, body) = run(&services, "{ categories { id name } }", json!({}));

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["data"]["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["tech", "clothes"]);
}

#[test]
fn created_product_round_trips_with_exact_price() {
    let services = build_services();
    let id = create_clothes_product(&services, "Plain Tee", 99.99);

    let (status, body) = run(
        &services,
        "query GetProduct($id: ID!) { product(id: $id) { price { amount } } }",
        json!({"id": id}),
    );

    assert_eq!(status, StatusCode::OK);
    let product = &body["data"]["product"];
    assert_eq!(product["name"], "Plain Tee");
    assert_eq!(product["inStock"], true);
    assert_eq!(product["price"]["amount"], 99.99);
    assert_eq!(product["price"]["currency"]["label"], "USD");
    assert_eq!(product["price"]["currency"]["symbol"], "$");
    assert_eq!(product["attributes"][0]["name"], "Size");
    assert_eq!(product["attributes"][0]["items"][1]["displayValue"], "Medium");
}

#[test]
fn create_product_rejects_disallowed_attribute() {
    let services = build_services();
    let (status, body) = run(
        &services,
        "mutation { createProduct }",
        json!({
            "name": "Weighted Tee",
            "category": "clothes",
            "attributes": [{"name": "Weight", "items": []}],
        }),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["errors"][0]["message"].as_str().unwrap();
    assert!(message.contains("Weight"), "unexpected message: {message}");

    // Nothing persisted.
    let (_, body) = run(&services, "{ products { id } }", json!({}));
    assert!(body["data"]["products"].as_array().unwrap().is_empty());
}

#[test]
fn create_product_in_unknown_category_is_not_found() {
    let services = build_services();
    let (status, _) = run(
        &services,
        "mutation { createProduct }",
        json!({"name": "Desk", "category": "furniture"}),
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn create_order_totals_two_products() {
    let services = build_services();
    let first = create_clothes_product(&services, "Tee", 10.00);
    let second = create_clothes_product(&services, "Hoodie", 25.50);

    let (status, body) = run(
        &services,
        "mutation CreateOrder($items: [OrderItemInput!]!) { createOrder(items: $items) { total } }",
        json!({"items": [
            {"productId": first, "quantity": 2, "selectedAttributes": {"Size": "S"}},
            {"productId": second, "quantity": 1},
        ]}),
    );

    assert_eq!(status, StatusCode::OK, "createOrder failed: {body}");
    let order = &body["data"]["createOrder"];
    assert_eq!(order["total"], 45.50);
    assert_eq!(order["orderedLines"].as_array().unwrap().len(), 2);
    assert_eq!(order["orderedLines"][0]["unitPrice"], 10.0);
    assert_eq!(order["orderedLines"][0]["lineTotal"], 20.0);
    assert_eq!(order["orderedLines"][0]["selectedAttributes"]["Size"], "S");

    let (_, body) = run(&services, "{ orders { id } }", json!({}));
    assert_eq!(body["data"]["orders"].as_array().unwrap().len(), 1);
}

#[test]
fn create_order_with_zero_quantity_is_rejected_and_not_persisted() {
    let services = build_services();
    let id = create_clothes_product(&services, "Tee", 10.00);

    let (status, body) = run(
        &services,
        "mutation { createOrder }",
        json!({"items": [{"productId": id, "quantity": 0}]}),
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("positive"));

    let (_, body) = run(&services, "{ orders { id } }", json!({}));
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[test]
fn create_order_with_priceless_product_is_rejected() {
    let services = build_services();
    let (_, body) = run(
        &services,
        "mutation { createProduct }",
        json!({"name": "Unpriced Tee", "category": "clothes"}),
    );
    let id = body["data"]["createProduct"]["id"].as_str().unwrap();

    let (status, _) = run(
        &services,
        "mutation { createOrder }",
        json!({"items": [{"productId": id, "quantity": 1}]}),
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = run(&services, "{ orders { id } }", json!({}));
    assert!(body["data"]["orders"].as_array().unwrap().is_empty());
}

#[test]
fn update_product_applies_partial_changes() {
    let services = build_services();
    let id = create_clothes_product(&services, "Tee", 10.00);

    let (status, body) = run(
        &services,
        "mutation { updateProduct }",
        json!({"id": id, "name": "Renamed Tee", "inStock": false}),
    );

    assert_eq!(status, StatusCode::OK);
    let product = &body["data"]["updateProduct"];
    assert_eq!(product["name"], "Renamed Tee");
    assert_eq!(product["inStock"], false);
    // Untouched fields survive.
    assert_eq!(product["brand"], "Acme");
    assert_eq!(product["price"]["amount"], 10.0);
}

#[test]
fn delete_product_then_lookup_resolves_null() {
    let services = build_services();
    let id = create_clothes_product(&services, "Tee", 10.00);

    let (status, body) = run(&services, "mutation { deleteProduct }", json!({"id": id}));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deleteProduct"], true);

    let (status, body) = run(&services, "{ product }", json!({"id": id}));
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["product"].is_null());

    let (status, _) = run(&services, "mutation { deleteProduct }", json!({"id": id}));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn unknown_operation_is_a_client_error() {
    let services = build_services();
    let (status, body) = run(&services, "{ fancyReport }", json!({}));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("fancyReport"));
}

#[test]
fn malformed_query_is_a_client_error() {
    let services = build_services();
    let (status, _) = run(&services, "products", json!({}));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
