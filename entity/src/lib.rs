//! Domain types for the employee directory, plus the pure salary
//! aggregations computed over them. No I/O lives here.

pub mod employee;
pub mod selection;

pub use employee::{Employee, EmployeeInput, InvalidEmployee};
pub use selection::{highest_salary, top_earners};
