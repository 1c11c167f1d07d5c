use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// External-facing employee record. Immutable once fetched; owned by the
/// request that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    pub title: String,
    pub email: Option<String>,
}

/// Payload accepted when creating an employee. Mirrors the body the
/// upstream service expects, so it is forwarded as-is after validation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub name: String,
    pub salary: Option<i64>,
    pub age: Option<i64>,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidEmployee {
    #[error("name cannot be blank")]
    BlankName,
    #[error("salary is required")]
    MissingSalary,
    #[error("salary must be greater than 0")]
    NonPositiveSalary,
    #[error("age is required")]
    MissingAge,
    #[error("age must be between 16 and 75")]
    AgeOutOfRange,
    #[error("title cannot be blank")]
    BlankTitle,
}

impl EmployeeInput {
    /// Check the constraints the upstream service enforces, so bad input is
    /// rejected before a request is spent on it.
    pub fn validate(&self) -> Result<(), InvalidEmployee> {
        if self.name.trim().is_empty() {
            return Err(InvalidEmployee::BlankName);
        }
        match self.salary {
            None => return Err(InvalidEmployee::MissingSalary),
            Some(salary) if salary < 1 => return Err(InvalidEmployee::NonPositiveSalary),
            Some(_) => {}
        }
        match self.age {
            None => return Err(InvalidEmployee::MissingAge),
            Some(age) if !(16..=75).contains(&age) => return Err(InvalidEmployee::AgeOutOfRange),
            Some(_) => {}
        }
        if self.title.trim().is_empty() {
            return Err(InvalidEmployee::BlankTitle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> EmployeeInput {
        EmployeeInput {
            name: "Jane Doe".into(),
            salary: Some(64000),
            age: Some(34),
            title: "Engineer".into(),
        }
    }

    #[test]
    fn valid_input_passes() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn blank_name_rejected() {
        let mut bad = input();
        bad.name = "   ".into();
        assert_eq!(bad.validate(), Err(InvalidEmployee::BlankName));
    }

    #[test]
    fn missing_salary_rejected() {
        let mut bad = input();
        bad.salary = None;
        assert_eq!(bad.validate(), Err(InvalidEmployee::MissingSalary));
    }

    #[test]
    fn zero_salary_rejected() {
        let mut bad = input();
        bad.salary = Some(0);
        assert_eq!(bad.validate(), Err(InvalidEmployee::NonPositiveSalary));
    }

    #[test]
    fn age_bounds_enforced() {
        let mut bad = input();
        bad.age = Some(15);
        assert_eq!(bad.validate(), Err(InvalidEmployee::AgeOutOfRange));
        bad.age = Some(76);
        assert_eq!(bad.validate(), Err(InvalidEmployee::AgeOutOfRange));
        bad.age = Some(16);
        assert_eq!(bad.validate(), Ok(()));
        bad.age = Some(75);
        assert_eq!(bad.validate(), Ok(()));
    }

    #[test]
    fn blank_title_rejected() {
        let mut bad = input();
        bad.title = String::new();
        assert_eq!(bad.validate(), Err(InvalidEmployee::BlankTitle));
    }

    #[test]
    fn missing_body_fields_default_to_blank() {
        let parsed: EmployeeInput = serde_json::from_str(r#"{"salary": 100, "age": 30}"#).unwrap();
        assert_eq!(parsed.validate(), Err(InvalidEmployee::BlankName));
    }
}
