mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn listing_returns_id_and_name() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/ingredients", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let payload = res.json::<serde_json::Value>().await?;
    let ingredients = payload["data"].as_array().cloned().unwrap_or_default();
    for ingredient in ingredients.iter() {
        assert!(ingredient["id"].is_number(), "missing id: {}", ingredient);
        assert!(ingredient["name"].is_string(), "missing name: {}", ingredient);
    }

    Ok(())
}

#[tokio::test]
async fn deleting_a_missing_ingredient_fails_cleanly() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .delete(format!("{}/ingredient/999999", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], false);
    assert_eq!(payload["message"], "Failed to delete ingredient.");

    Ok(())
}

// The pool holds at most three connections. If failed deletes leaked their
// connections, the fifth request here would exhaust the pool and the final
// listing would time out.
#[tokio::test]
async fn failed_operations_release_their_connections() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: no database configured");
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    for _ in 0..5 {
        let res = client
            .delete(format!("{}/ingredient/999999", server.base_url))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    let res = client
        .get(format!("{}/ingredients", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK, "pool should still have capacity");

    let payload = res.json::<serde_json::Value>().await?;
    assert!(payload["data"].is_array(), "unexpected payload: {}", payload);

    Ok(())
}
