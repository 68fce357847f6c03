use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::marketing_status::repo::MemoryMarketingStatusRepository;
use tokio::net::TcpListener;

/// Each test gets its own server over its own empty in-memory store.
struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    let app = server::app(Arc::new(MemoryMarketingStatusRepository::new()));
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Add a status through the API and return the created body.
async fn add(app: &TestApp, name: &str) -> anyhow::Result<Value> {
    let res = client()
        .post(app.url("/add/marketingstatus"))
        .json(&json!({"marketingStatusName": name}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    Ok(res.json::<Value>().await?)
}

fn assert_json_content_type(res: &reqwest::Response) {
    let ct = res.headers().get("content-type").and_then(|v| v.to_str().ok()).unwrap_or_default();
    assert!(ct.starts_with("application/json"), "content-type was {ct:?}");
}

#[tokio::test]
async fn e2e_add_then_get_by_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = add(&app, "ADDTESTMS").await?;
    let id = created["marketingStatusId"].as_i64().unwrap_or_default();
    assert!(id > 0);
    assert_eq!(created["marketingStatusName"], "ADDTESTMS");

    let res = client().get(app.url(&format!("/one/marketingstatus/byid/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_json_content_type(&res);
    let body = res.json::<Value>().await?;
    assert_eq!(body, created);
    Ok(())
}

#[tokio::test]
async fn e2e_full_lifecycle_by_name_update_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let created = add(&app, "TEST STATUS").await?;
    let id = created["marketingStatusId"].as_i64().unwrap_or_default();

    // by name, with the space percent-encoded
    let res = c.get(app.url("/one/marketingstatus/TEST%20STATUS")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_json_content_type(&res);
    assert_eq!(res.json::<Value>().await?["marketingStatusId"], id);

    let res = c
        .put(app.url("/update/marketingstatus"))
        .json(&json!({"marketingStatusId": id, "marketingStatusName": "UPDATETESTMS"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["marketingStatusName"], "UPDATETESTMS");

    let res = c.get(app.url(&format!("/one/marketingstatus/byid/{id}"))).send().await?;
    assert_eq!(res.json::<Value>().await?["marketingStatusName"], "UPDATETESTMS");

    let res = c.delete(app.url(&format!("/delete/marketingstatus/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(app.url(&format!("/one/marketingstatus/byid/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.bytes().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_is_idempotent() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let created = add(&app, "ONCE").await?;
    let id = created["marketingStatusId"].as_i64().unwrap_or_default();

    for _ in 0..2 {
        let res = c.delete(app.url(&format!("/delete/marketingstatus/{id}"))).send().await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }
    let res = c.delete(app.url("/delete/marketingstatus/424242")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_all_and_mapped() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(app.url("/all/marketingstatus")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_json_content_type(&res);
    assert_eq!(res.json::<Value>().await?, json!([]));

    for name in ["ONE", "TWO", "THREE"] {
        add(&app, name).await?;
    }

    let all = c.get(app.url("/all/marketingstatus")).send().await?.json::<Value>().await?;
    let all = all.as_array().cloned().unwrap_or_default();
    assert_eq!(all.len(), 3);

    let res = c.get(app.url("/all/marketingstatus/mapped")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_json_content_type(&res);
    let mapped = res.json::<Value>().await?;
    assert_eq!(mapped["2"]["marketingStatusId"], 2);
    for entry in &all {
        let key = entry["marketingStatusId"].to_string();
        assert_eq!(&mapped[key.as_str()], entry);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_not_found_and_bad_requests() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(app.url("/one/marketingstatus/NOPE")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.get(app.url("/one/marketingstatus/byid/x1")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(app.url("/add/marketingstatus"))
        .header("content-type", "application/json")
        .body(r#"{"marketingStatusId": 0}"#)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .put(app.url("/update/marketingstatus"))
        .json(&json!({"marketingStatusId": 999, "marketingStatusName": "GHOST"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["error"], "Not Found");

    let res = c
        .put(app.url("/update/marketingstatus"))
        .json(&json!({"marketingStatusName": "NO ID"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_duplicate_name_conflicts() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    add(&app, "TAKEN").await?;
    let other = add(&app, "FREE").await?;

    let res = c
        .post(app.url("/add/marketingstatus"))
        .json(&json!({"marketingStatusName": "TAKEN"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);

    let res = c
        .put(app.url("/update/marketingstatus"))
        .json(&json!({"marketingStatusId": other["marketingStatusId"], "marketingStatusName": "TAKEN"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
