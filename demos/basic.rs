//! Small ruta service: city lookups over JSON, plus health checks.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/api/v1/cities/lyon
//!   curl http://localhost:3000/api/v1/cities/lyon/weather/monday
//!   curl -X DELETE http://localhost:3000/api/v1/cities/lyon
//!   curl -X TRACE http://localhost:3000/api/v1/cities/lyon     # 400
//!   curl http://localhost:3000/api/v1/healthz

use ruta::{HandlerError, Params, Router, Server, health};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct City {
    name: String,
    country: &'static str,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let app = Router::new()
        .base("/api/v1")
        .get("/cities/:name", get_city)
        .get("/cities/:name/weather/:day", get_weather)
        .delete("/cities/:name", delete_city)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

// GET /api/v1/cities/:name
fn get_city(params: Params) -> Result<Value, HandlerError> {
    let city = City { name: params["name"].clone(), country: "fr" };
    Ok(serde_json::to_value(&city)?)
}

// GET /api/v1/cities/:name/weather/:day
fn get_weather(params: Params) -> Value {
    json!({
        "city": params["name"],
        "day": params["day"],
        "forecast": "sunny",
    })
}

// DELETE /api/v1/cities/:name → 200, no body
fn delete_city(_params: Params) {}
