use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes::build_router;
use server::state::ServerState;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// Migrations run once per test process even though every test boots its
// own server.
static MIGRATED: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

/// Boot the app against the database named by DATABASE_URL; tests skip
/// gracefully when no database is available.
async fn start_server() -> anyhow::Result<TestApp> {
    if std::env::var("DATABASE_URL").is_err() {
        anyhow::bail!("DATABASE_URL missing; skip e2e tests");
    }

    let db = models::db::connect().await?;
    MIGRATED
        .get_or_try_init(|| async {
            migration::Migrator::up(&db, None).await?;
            Ok::<_, anyhow::Error>(())
        })
        .await?;

    let state = ServerState::new(db);
    let app: Router = build_router(CorsLayer::very_permissive(), state);

    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {e}");
        }
    });

    Ok(TestApp { base_url: format!("http://{addr}"), client: reqwest::Client::new() })
}

fn property_payload() -> Value {
    json!({
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zipCode": "62701",
        "price": 100000,
        "bedrooms": 2,
        "bathrooms": 1,
        "squareFeet": 900,
        "propertyType": "House",
        "status": "",
        "realtorId": null,
        "description": "starter home"
    })
}

fn realtor_payload(email: &str, license: &str) -> Value {
    json!({
        "firstName": "Sarah",
        "lastName": "Johnson",
        "email": email,
        "phoneNumber": "555-0101",
        "licenseNumber": license,
        "agency": "Prime Realty Group",
        "yearsOfExperience": 8,
        "specialization": "Residential"
    })
}

#[tokio::test]
async fn property_lifecycle() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    // Create with blank status and no listing date: both default server-side.
    let res = app
        .client
        .post(app.url("/api/properties"))
        .json(&property_payload())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(location, format!("/api/properties/{id}"));
    assert_eq!(created["status"], "Available");
    assert_eq!(created["price"].as_f64(), Some(100000.0));
    let listed = created["listedDate"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(listed).is_ok());

    // Round trip.
    let fetched: Value = app.client.get(app.url(&format!("/api/properties/{id}"))).send().await?.json().await?;
    assert_eq!(fetched["address"], "1 Main St");
    assert_eq!(fetched["realtorId"], Value::Null);

    // Full replace overwrites mutable fields and keeps the id.
    let mut replacement = property_payload();
    replacement["city"] = json!("Shelbyville");
    replacement["status"] = json!("Pending");
    let res = app
        .client
        .put(app.url(&format!("/api/properties/{id}")))
        .json(&replacement)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["city"], "Shelbyville");
    assert_eq!(updated["status"], "Pending");

    // Patch touches only the supplied field.
    let res = app
        .client
        .patch(app.url(&format!("/api/properties/{id}")))
        .json(&json!({"bedrooms": 4}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let patched: Value = res.json().await?;
    assert_eq!(patched["bedrooms"].as_i64(), Some(4));
    assert_eq!(patched["city"], "Shelbyville");

    // Replace of an unknown id never creates a row.
    let res = app
        .client
        .put(app.url("/api/properties/999999999"))
        .json(&property_payload())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Delete, then every further access reports the absence.
    let res = app.client.delete(app.url(&format!("/api/properties/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.client.get(app.url(&format!("/api/properties/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = app.client.delete(app.url(&format!("/api/properties/{id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn validation_reports_every_field() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    let mut bad = property_payload();
    bad["address"] = json!("");
    bad["price"] = json!(-5);
    bad["bathrooms"] = json!(250);
    let res = app.client.post(app.url("/api/properties")).json(&bad).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Validation Error");
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"address"));
    assert!(fields.contains(&"price"));
    assert!(fields.contains(&"bathrooms"));

    // A property must reference a live realtor.
    let mut orphan = property_payload();
    orphan["realtorId"] = json!(999999999);
    let res = app.client.post(app.url("/api/properties")).json(&orphan).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["fields"][0]["field"], "realtorId");

    Ok(())
}

#[tokio::test]
async fn user_uniqueness_and_email_lookup() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    let email = format!("e2e_{}@example.com", Uuid::new_v4());
    let payload = json!({
        "firstName": "John",
        "lastName": "Smith",
        "email": email,
        "phoneNumber": "555-1001",
        "address": "123 Main St"
    });

    let res = app.client.post(app.url("/api/users")).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["isActive"], json!(true));
    assert!(created["createdDate"].is_string());

    let res = app
        .client
        .get(app.url(&format!("/api/users/by-email?email={email}")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let found: Value = res.json().await?;
    assert_eq!(found["id"], created["id"]);

    // Second create with the same email is rejected, not overwritten.
    let res = app.client.post(app.url("/api/users")).json(&payload).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let missing = format!("missing_{}@example.com", Uuid::new_v4());
    let res = app
        .client
        .get(app.url(&format!("/api/users/by-email?email={missing}")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn deleting_a_realtor_keeps_its_properties() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    let email = format!("agent_{}@realty.com", Uuid::new_v4());
    let license = format!("RE-{}", Uuid::new_v4());
    let res = app
        .client
        .post(app.url("/api/realtors"))
        .json(&realtor_payload(&email, &license))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let realtor: Value = res.json().await?;
    let realtor_id = realtor["id"].as_i64().unwrap();

    let mut listing = property_payload();
    listing["realtorId"] = json!(realtor_id);
    let res = app.client.post(app.url("/api/properties")).json(&listing).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let listed: Value = res.json().await?;
    let property_id = listed["id"].as_i64().unwrap();

    let res = app
        .client
        .get(app.url(&format!("/api/realtors/{realtor_id}/properties")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let owned: Value = res.json().await?;
    assert!(owned.as_array().unwrap().iter().any(|p| p["id"].as_i64() == Some(property_id)));

    let res = app.client.delete(app.url(&format!("/api/realtors/{realtor_id}"))).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    // The listing survives with its back-reference cleared.
    let survivor: Value = app
        .client
        .get(app.url(&format!("/api/properties/{property_id}")))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(survivor["realtorId"], Value::Null);

    let res = app
        .client
        .get(app.url(&format!("/api/realtors/{realtor_id}/properties")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn realtor_conflicts_on_email_and_license() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    let email = format!("agent_{}@realty.com", Uuid::new_v4());
    let license = format!("RE-{}", Uuid::new_v4());
    let res = app
        .client
        .post(app.url("/api/realtors"))
        .json(&realtor_payload(&email, &license))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let other_license = format!("RE-{}", Uuid::new_v4());
    let res = app
        .client
        .post(app.url("/api/realtors"))
        .json(&realtor_payload(&email, &other_license))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let other_email = format!("agent_{}@realty.com", Uuid::new_v4());
    let res = app
        .client
        .post(app.url("/api/realtors"))
        .json(&realtor_payload(&other_email, &license))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn health_endpoint_is_public() -> anyhow::Result<()> {
    let app = match start_server().await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("skip: {e}");
            return Ok(());
        }
    };

    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
