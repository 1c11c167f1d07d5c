//! Salary aggregations over an in-memory employee list.
//!
//! Both functions skip employees without a salary; an absent salary is not
//! treated as zero.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::employee::Employee;

/// Names of the (up to) `k` highest-paid employees, ascending by salary.
///
/// Keeps a min-heap bounded at `k` entries keyed by `(salary, position)`:
/// each qualifying record is pushed, then the minimum is evicted once the
/// heap exceeds `k`. O(n log k) time, O(k) space. Draining the heap yields
/// the selected names lowest-salary first; callers that want the biggest
/// earner last get it at the tail. Ties at the cut are resolved by input
/// position and are not part of the contract.
pub fn top_earners(employees: &[Employee], k: usize) -> Vec<String> {
    let mut heap: BinaryHeap<Reverse<(i64, usize)>> = BinaryHeap::with_capacity(k + 1);
    for (position, employee) in employees.iter().enumerate() {
        let Some(salary) = employee.salary else {
            continue;
        };
        heap.push(Reverse((salary, position)));
        if heap.len() > k {
            heap.pop();
        }
    }

    let mut names = Vec::with_capacity(heap.len());
    while let Some(Reverse((_, position))) = heap.pop() {
        names.push(employees[position].name.clone());
    }
    names
}

/// Highest salary present, or `-1` when no employee carries one. The
/// sentinel is part of the wire contract and distinct from any valid salary.
pub fn highest_salary(employees: &[Employee]) -> i64 {
    employees
        .iter()
        .filter_map(|employee| employee.salary)
        .max()
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn employee(name: &str, salary: Option<i64>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.into(),
            salary,
            age: Some(30),
            title: "Engineer".into(),
            email: None,
        }
    }

    /// Fifteen employees, salaries 30000..=100000 in steps of 5000, named
    /// after their one-based index so salary order matches name order.
    fn ladder() -> Vec<Employee> {
        (1..=15)
            .map(|i| employee(&format!("Employee {i}"), Some(30000 + (i - 1) * 5000)))
            .collect()
    }

    #[test]
    fn selects_ten_highest_ascending() {
        let names = top_earners(&ladder(), 10);
        let expected: Vec<String> = (6..=15).map(|i| format!("Employee {i}")).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn excluded_records_all_earn_less() {
        let employees = ladder();
        let names = top_earners(&employees, 10);
        assert_eq!(names.len(), 10);
        for i in 1..=5 {
            assert!(!names.contains(&format!("Employee {i}")));
        }
    }

    #[test]
    fn result_length_is_min_of_k_and_qualifying() {
        let employees = vec![
            employee("a", Some(10)),
            employee("b", None),
            employee("c", Some(20)),
        ];
        assert_eq!(top_earners(&employees, 10).len(), 2);
        assert_eq!(top_earners(&employees, 1), vec!["c".to_string()]);
        assert_eq!(top_earners(&employees, 0), Vec::<String>::new());
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(top_earners(&[], 10), Vec::<String>::new());
    }

    #[test]
    fn all_missing_salaries_yield_empty() {
        let employees = vec![employee("a", None), employee("b", None)];
        assert_eq!(top_earners(&employees, 10), Vec::<String>::new());
    }

    #[test]
    fn equal_salaries_are_deterministic_for_a_given_order() {
        let employees = vec![
            employee("first", Some(100)),
            employee("second", Some(100)),
            employee("third", Some(100)),
        ];
        // Cut falls on a tie: which duplicate survives is positional, but
        // repeated runs over the same input agree.
        let once = top_earners(&employees, 2);
        let again = top_earners(&employees, 2);
        assert_eq!(once, again);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn highest_salary_over_values() {
        let employees = vec![
            employee("a", Some(30000)),
            employee("b", Some(75000)),
            employee("c", Some(60000)),
        ];
        assert_eq!(highest_salary(&employees), 75000);
    }

    #[test]
    fn highest_salary_sentinel_when_empty() {
        assert_eq!(highest_salary(&[]), -1);
    }

    #[test]
    fn highest_salary_sentinel_when_all_missing() {
        let employees = vec![employee("a", None), employee("b", None)];
        assert_eq!(highest_salary(&employees), -1);
    }

    #[test]
    fn missing_salary_is_not_zero() {
        // A lone zero-salary record must beat the sentinel, and a missing
        // salary must not be selected over a present one.
        let employees = vec![employee("paid", Some(0)), employee("unpaid", None)];
        assert_eq!(highest_salary(&employees), 0);
        assert_eq!(top_earners(&employees, 10), vec!["paid".to_string()]);
    }
}
