use entity::Employee;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Employee as the upstream service serializes it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmployeeRecord {
    pub id: Uuid,
    pub employee_name: String,
    pub employee_salary: Option<i64>,
    pub employee_age: Option<i64>,
    pub employee_title: String,
    pub employee_email: Option<String>,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Employee {
            id: record.id,
            name: record.employee_name,
            salary: record.employee_salary,
            age: record.employee_age,
            title: record.employee_title,
            email: record.employee_email,
        }
    }
}

/// Every upstream response wraps its payload; `data` may be absent.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub status: Option<String>,
}

/// Body of the upstream delete call. Deletion is by name, not id.
#[derive(Debug, Serialize)]
pub struct DeleteByName<'a> {
    pub name: &'a str,
}
