use std::sync::Arc;

use entity::{Employee, EmployeeInput, selection};
use platform_api::{ApiError, ApiResult};
use platform_upstream::{EmployeeClient, UpstreamError};
use tracing::{info, warn};
use uuid::Uuid;

/// How many names the top-earner aggregate returns.
pub const TOP_EARNER_COUNT: usize = 10;

/// Request-scoped orchestration between the HTTP surface and the upstream
/// client: fetch, translate field names, filter, aggregate.
#[derive(Clone)]
pub struct EmployeeService {
    client: Arc<EmployeeClient>,
}

impl EmployeeService {
    pub fn new(client: EmployeeClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub async fn list(&self) -> ApiResult<Vec<Employee>> {
        let employees = self.fetch_mapped().await?;
        info!(count = employees.len(), "fetched employees");
        Ok(employees)
    }

    /// Case-insensitive substring match on employee name. Blank fragments
    /// are rejected at the handler before this is called.
    pub async fn search(&self, fragment: &str) -> ApiResult<Vec<Employee>> {
        let needle = fragment.to_lowercase();
        let matches = self
            .fetch_mapped()
            .await?
            .into_iter()
            .filter(|employee| employee.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>();
        Ok(matches)
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<Employee> {
        let record = self.client.fetch_by_id(id).await.map_err(|err| match err {
            UpstreamError::NotFound => {
                ApiError::not_found(format!("employee with id {id} not found"))
            }
            other => translate(other),
        })?;
        Ok(record.into())
    }

    pub async fn highest_salary(&self) -> ApiResult<i64> {
        let employees = self.fetch_mapped().await?;
        Ok(selection::highest_salary(&employees))
    }

    pub async fn top_earners(&self) -> ApiResult<Vec<String>> {
        let employees = self.fetch_mapped().await?;
        let names = selection::top_earners(&employees, TOP_EARNER_COUNT);
        info!(count = names.len(), "selected top earners");
        Ok(names)
    }

    pub async fn create(&self, input: EmployeeInput) -> ApiResult<Employee> {
        input
            .validate()
            .map_err(|err| ApiError::invalid_input(err.to_string()))?;
        let record = self.client.create(&input).await.map_err(translate)?;
        info!(id = %record.id, "created employee");
        Ok(record.into())
    }

    /// Deletion is a two-step delegation: resolve the id to a name (the
    /// upstream deletes by name), then delete. Returns the deleted name.
    pub async fn delete(&self, id: Uuid) -> ApiResult<String> {
        let employee = self.get(id).await?;
        let deleted = self
            .client
            .delete_by_name(&employee.name)
            .await
            .map_err(translate)?;
        if !deleted {
            warn!(%id, "upstream reported nothing deleted");
            return Err(ApiError::upstream(anyhow::anyhow!(
                "employee {id} was not deleted upstream"
            )));
        }
        info!(%id, name = %employee.name, "deleted employee");
        Ok(employee.name)
    }

    /// Health probe: is the upstream answering its list endpoint.
    pub async fn probe(&self) -> bool {
        self.client.fetch_all().await.is_ok()
    }

    async fn fetch_mapped(&self) -> ApiResult<Vec<Employee>> {
        let records = self.client.fetch_all().await.map_err(translate)?;
        Ok(records.into_iter().map(Employee::from).collect())
    }
}

fn translate(err: UpstreamError) -> ApiError {
    match err {
        UpstreamError::RateLimited => ApiError::RateLimited,
        UpstreamError::NotFound => ApiError::not_found("employee resource not found"),
        other => ApiError::upstream(other.into()),
    }
}
