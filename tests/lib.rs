//! Shared helpers for façade integration tests: build the real router
//! wired to a mock upstream base URL.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use platform_upstream::{EmployeeClient, UpstreamSettings};
use serde_json::{Value, json};
use server::config::AppConfig;
use server::http::{AppState, build_router};
use server::service::EmployeeService;

/// Path prefix the mock upstream serves employees under.
pub const UPSTREAM_PATH: &str = "/api/v1/employee";

/// Full router wired against `base_url` (a mock server origin).
pub fn facade(base_url: &str) -> Router {
    let upstream = UpstreamSettings {
        base_url: format!("{base_url}{UPSTREAM_PATH}"),
        connect_timeout: Duration::from_millis(500),
        read_timeout: Duration::from_secs(2),
    };
    let config = AppConfig {
        cors_allowed_origins: Vec::new(),
        upstream,
    };
    let client = EmployeeClient::new(&config.upstream).expect("reqwest client");
    let state = AppState {
        service: EmployeeService::new(client),
        config: Arc::new(config),
    };
    build_router(state)
}

/// Upstream-shaped employee record.
pub fn upstream_employee(id: &str, name: &str, salary: Option<i64>) -> Value {
    json!({
        "id": id,
        "employee_name": name,
        "employee_salary": salary,
        "employee_age": 30,
        "employee_title": "Developer",
        "employee_email": null,
    })
}

/// Envelope the upstream wraps every payload in.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "status": "Successfully processed request." })
}
