use crate::api::Employee;

/// Case-insensitive substring match over the fields the search box covers.
/// A blank query matches everyone.
pub fn matches_search(employee: &Employee, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    [
        &employee.full_name,
        &employee.employee_id,
        &employee.email,
        &employee.department,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&query))
}

pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| matches_search(employee, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(employee_id: &str, full_name: &str, email: &str, department: &str) -> Employee {
        Employee {
            id: 0,
            employee_id: employee_id.into(),
            full_name: full_name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee("EMP-001", "Priya Sharma", "priya@company.com", "Engineering"),
            employee("EMP-002", "Marcus Webb", "marcus@company.com", "Design"),
            employee("EMP-003", "Ana Costa", "ana@company.com", "HR"),
        ]
    }

    #[test]
    fn blank_query_matches_everyone() {
        assert_eq!(filter_employees(&roster(), "").len(), 3);
        assert_eq!(filter_employees(&roster(), "   ").len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let roster = roster();
        assert_eq!(filter_employees(&roster, "PRIYA").len(), 1);
        assert_eq!(filter_employees(&roster, "emp-002").len(), 1);
        assert_eq!(filter_employees(&roster, "ana@").len(), 1);
        assert_eq!(filter_employees(&roster, "design").len(), 1);
    }

    #[test]
    fn substring_match_can_hit_multiple_employees() {
        assert_eq!(filter_employees(&roster(), "emp-0").len(), 3);
        assert_eq!(filter_employees(&roster(), "company.com").len(), 3);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter_employees(&roster(), "zzz").is_empty());
    }
}
