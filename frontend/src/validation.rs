//! Synchronous form validation. Validators are pure: they take a snapshot of
//! the form and return the complete set of field errors, never touching the
//! network or any signal.

use std::collections::BTreeMap;

use crate::api::AttendanceStatus;

/// The closed set the department select offers. Membership is enforced here
/// as well, so a tampered select value still fails validation.
pub const DEPARTMENTS: [&str; 8] = [
    "Engineering",
    "HR",
    "Finance",
    "Marketing",
    "Sales",
    "Operations",
    "Legal",
    "Design",
];

/// Field-name → message. Empty means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Editing a field clears that field's error only; the rest stay until
    /// the next submit re-validates.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

pub fn validate_employee(form: &EmployeeForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let employee_id = form.employee_id.trim();
    if employee_id.is_empty() {
        errors.insert("employee_id", "Required");
    } else if !is_valid_employee_id(employee_id) {
        errors.insert(
            "employee_id",
            "Only letters, numbers, hyphens and underscores",
        );
    }

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.insert("full_name", "Required");
    } else if full_name.chars().count() < 2 {
        errors.insert("full_name", "Name too short");
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Required");
    } else if !is_valid_email(&form.email) {
        errors.insert("email", "Enter a valid email address");
    }

    if !DEPARTMENTS.contains(&form.department.as_str()) {
        errors.insert("department", "Pick a department");
    }

    errors
}

pub fn validate_attendance(form: &AttendanceForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.employee_id.is_empty() {
        errors.insert("employee_id", "Please select an employee");
    }
    if form.date.trim().is_empty() {
        errors.insert("date", "Date is required");
    }
    errors
}

pub fn is_valid_employee_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Permissive `local@domain.tld` shape: exactly one `@`, no whitespace, and a
/// dot strictly inside the domain part. Real deliverability is the server's
/// problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee() -> EmployeeForm {
        EmployeeForm {
            employee_id: "EMP-001".into(),
            full_name: "Priya Sharma".into(),
            email: "priya@company.com".into(),
            department: "Engineering".into(),
        }
    }

    #[test]
    fn valid_employee_form_yields_no_errors() {
        assert!(validate_employee(&valid_employee()).is_empty());
    }

    #[test]
    fn employee_id_is_required_and_pattern_checked() {
        let mut form = valid_employee();
        form.employee_id = "   ".into();
        assert_eq!(
            validate_employee(&form).get("employee_id"),
            Some("Required")
        );

        form.employee_id = "EMP 001".into();
        assert_eq!(
            validate_employee(&form).get("employee_id"),
            Some("Only letters, numbers, hyphens and underscores")
        );

        form.employee_id = "emp_01-X".into();
        assert_eq!(validate_employee(&form).get("employee_id"), None);

        // Surrounding whitespace is trimmed before the pattern check.
        form.employee_id = "  EMP-001  ".into();
        assert_eq!(validate_employee(&form).get("employee_id"), None);
    }

    #[test]
    fn full_name_requires_two_characters_after_trim() {
        let mut form = valid_employee();
        form.full_name = "".into();
        assert_eq!(validate_employee(&form).get("full_name"), Some("Required"));

        form.full_name = " A ".into();
        assert_eq!(
            validate_employee(&form).get("full_name"),
            Some("Name too short")
        );

        form.full_name = "Al".into();
        assert_eq!(validate_employee(&form).get("full_name"), None);
    }

    #[test]
    fn email_shape_check() {
        let cases = [
            ("a@b.co", true),
            ("first.last@sub.domain.com", true),
            ("", false),
            ("plainaddress", false),
            ("two@@b.co", false),
            ("a@b", false),
            ("a@.co", false),
            ("a@co.", false),
            ("a b@c.co", false),
            ("@b.co", false),
            ("a@", false),
        ];
        for (email, expected) in cases {
            assert_eq!(is_valid_email(email), expected, "email: {:?}", email);
        }
    }

    #[test]
    fn email_errors_use_the_right_message() {
        let mut form = valid_employee();
        form.email = "  ".into();
        assert_eq!(validate_employee(&form).get("email"), Some("Required"));

        form.email = "not-an-email".into();
        assert_eq!(
            validate_employee(&form).get("email"),
            Some("Enter a valid email address")
        );
    }

    #[test]
    fn department_must_come_from_the_fixed_set() {
        let mut form = valid_employee();
        form.department = "".into();
        assert_eq!(
            validate_employee(&form).get("department"),
            Some("Pick a department")
        );

        form.department = "Astronomy".into();
        assert_eq!(
            validate_employee(&form).get("department"),
            Some("Pick a department")
        );

        for department in DEPARTMENTS {
            form.department = department.into();
            assert_eq!(validate_employee(&form).get("department"), None);
        }
    }

    #[test]
    fn empty_employee_form_reports_every_field() {
        let errors = validate_employee(&EmployeeForm::default());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn attendance_form_requires_employee_and_date() {
        let errors = validate_attendance(&AttendanceForm::default());
        assert_eq!(
            errors.get("employee_id"),
            Some("Please select an employee")
        );
        assert_eq!(errors.get("date"), Some("Date is required"));

        let errors = validate_attendance(&AttendanceForm {
            employee_id: "EMP-001".into(),
            date: "2024-01-10".into(),
            status: AttendanceStatus::Absent,
        });
        assert!(errors.is_empty());
    }

    #[test]
    fn clearing_one_field_error_keeps_the_others() {
        let mut errors = validate_employee(&EmployeeForm::default());
        let before = errors.len();
        errors.clear("email");
        assert_eq!(errors.get("email"), None);
        assert_eq!(errors.len(), before - 1);
        assert_eq!(errors.get("full_name"), Some("Required"));
    }
}
