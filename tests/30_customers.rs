mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use std::collections::HashSet;

#[tokio::test]
async fn listing_includes_specialization_columns() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/customer", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    let customers = payload["data"].as_array().cloned().unwrap_or_default();
    for customer in customers.iter() {
        assert!(customer["id"].is_number(), "missing id: {}", customer);
        assert!(customer["name"].is_string(), "missing name: {}", customer);
        // Null for customers outside the role, but the key is always present
        assert!(
            customer.get("cooking_history").is_some(),
            "missing cooking_history: {}",
            customer
        );
        assert!(
            customer.get("rating_history").is_some(),
            "missing rating_history: {}",
            customer
        );
    }

    Ok(())
}

#[tokio::test]
async fn select_customer_without_filters_returns_every_customer() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/select-customer", server.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let selected = res.json::<serde_json::Value>().await?;
    assert_eq!(selected["success"], true);

    let res = client
        .get(format!("{}/customer", server.base_url))
        .send()
        .await?;
    let listed = res.json::<serde_json::Value>().await?;

    let selected_len = selected["data"].as_array().map(Vec::len).unwrap_or(0);
    let listed_len = listed["data"].as_array().map(Vec::len).unwrap_or(0);
    assert_eq!(selected_len, listed_len, "filterless select should match the listing");

    Ok(())
}

// With identical filters, the AND rows must be a subset of the OR rows
#[tokio::test]
async fn select_customer_and_is_a_subset_of_or() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for op in ["AND", "OR"] {
        let res = client
            .post(format!("{}/select-customer", server.base_url))
            .json(&json!({ "type": "foodCritic", "name": "Bob Singh", "andOr": op }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK, "{} select failed", op);

        let payload = res.json::<serde_json::Value>().await?;
        assert_eq!(payload["success"], true);
        let set: HashSet<i64> = payload["data"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .filter_map(|c| c["id"].as_i64())
            .collect();
        ids.push(set);
    }

    assert!(
        ids[0].is_subset(&ids[1]),
        "AND rows {:?} should be contained in OR rows {:?}",
        ids[0],
        ids[1]
    );

    Ok(())
}

// The joiner is validated before any SQL is built, so no database is needed
#[tokio::test]
async fn select_customer_rejects_an_unknown_joiner() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/select-customer", server.base_url))
        .json(&json!({ "type": "foodCritic", "andOr": "UNION" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], false);
    assert!(
        payload["message"]
            .as_str()
            .unwrap_or("")
            .contains("Invalid boolean operator"),
        "unexpected message: {}",
        payload
    );

    Ok(())
}

#[tokio::test]
async fn update_requires_at_least_one_field() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/customer/1", server.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], false);
    assert_eq!(payload["message"], "newName or newEmail is required.");

    Ok(())
}

// A same-value update is a real UPDATE hitting one row, without disturbing
// data the other tests read.
#[tokio::test]
async fn update_with_an_existing_id_reports_success() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/customer", server.base_url))
        .send()
        .await?;
    let listed = res.json::<serde_json::Value>().await?;
    let customers = listed["data"].as_array().cloned().unwrap_or_default();
    let Some(first) = customers.first() else {
        eprintln!("skipping: no customers seeded");
        return Ok(());
    };
    let id = first["id"].as_i64().expect("customer id");
    let name = first["name"].as_str().expect("customer name");

    let res = client
        .put(format!("{}/customer/{}", server.base_url, id))
        .json(&json!({ "newName": name }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], true);

    Ok(())
}

#[tokio::test]
async fn update_of_an_unknown_customer_is_not_found() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/customer/999999", server.base_url))
        .json(&json!({ "newName": "Nobody" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], false);

    Ok(())
}

#[tokio::test]
async fn customers_by_recipe_requires_title_and_stars() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "recipeTitle": "   " }), json!({ "minStars": 3 })] {
        let res = client
            .post(format!("{}/customers-by-recipe", server.base_url))
            .json(&body)
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {}", body);

        let payload = res.json::<serde_json::Value>().await?;
        assert_eq!(payload["message"], "recipeTitle and minStars are required.");
    }

    Ok(())
}

#[tokio::test]
async fn customers_by_recipe_returns_critics_with_stars() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // minStars of zero is a legal threshold, and numeric strings coerce
    let res = client
        .post(format!("{}/customers-by-recipe", server.base_url))
        .json(&json!({ "recipeTitle": "a", "minStars": "0" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    let critics = payload["data"].as_array().cloned().unwrap_or_default();
    for critic in critics.iter() {
        assert!(critic["name"].is_string(), "missing name: {}", critic);
        let stars = critic["stars"].as_i64().expect("numeric stars");
        assert!(stars >= 0, "stars below threshold: {}", critic);
    }

    Ok(())
}
