//! Field rules for the employee schema.
//!
//! Every rule reads the raw draft string, so the same checks gate step
//! advancement, per-field re-validation, and the final payload build.

use std::collections::BTreeMap;

use empleados_api_models::{Department, EmployeePayload};

use crate::form::draft::EmployeeDraft;
use crate::i18n::TranslationBundle;

/// Editable employee fields in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// `nombre`.
    FirstName,
    /// `apellido`.
    LastName,
    /// `edad`.
    Age,
    /// `departamento`.
    Department,
    /// `salario`.
    Salary,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Age,
        Self::Department,
        Self::Salary,
    ];

    /// Wire/input name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::Age => "edad",
            Self::Department => "departamento",
            Self::Salary => "salario",
        }
    }

    /// Translation key for the input label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::FirstName => "form.fields.first_name",
            Self::LastName => "form.fields.last_name",
            Self::Age => "form.fields.age",
            Self::Department => "form.fields.department",
            Self::Salary => "form.fields.salary",
        }
    }
}

/// Reason a field value was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Blank first name.
    FirstNameRequired,
    /// Blank last name.
    LastNameRequired,
    /// Age is not numeric.
    AgeNotANumber,
    /// Age has a fractional part.
    AgeNotInteger,
    /// Age is zero, negative, or empty.
    AgeNotPositive,
    /// Age does not fit the wire type.
    AgeOutOfRange,
    /// No department chosen.
    DepartmentRequired,
    /// Department outside the closed list.
    DepartmentUnknown,
    /// Salary is not numeric.
    SalaryNotANumber,
    /// Salary below zero.
    SalaryNegative,
}

impl FieldError {
    /// Translation key of the message.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstNameRequired => "validation.first_name_required",
            Self::LastNameRequired => "validation.last_name_required",
            Self::AgeNotANumber => "validation.age_not_a_number",
            Self::AgeNotInteger => "validation.age_not_integer",
            Self::AgeNotPositive => "validation.age_not_positive",
            Self::AgeOutOfRange => "validation.age_out_of_range",
            Self::DepartmentRequired => "validation.department_required",
            Self::DepartmentUnknown => "validation.department_unknown",
            Self::SalaryNotANumber => "validation.salary_not_a_number",
            Self::SalaryNegative => "validation.salary_negative",
        }
    }

    /// Spanish text used when no bundle entry exists.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::FirstNameRequired => "Nombre requerido",
            Self::LastNameRequired => "Apellido requerido",
            Self::AgeNotANumber => "Edad debe ser un número",
            Self::AgeNotInteger => "Edad debe ser un número entero",
            Self::AgeNotPositive => "Edad debe ser mayor que 0",
            Self::AgeOutOfRange => "Edad fuera de rango",
            Self::DepartmentRequired => "Departamento requerido",
            Self::DepartmentUnknown => "Departamento no válido",
            Self::SalaryNotANumber => "Salario debe ser un número",
            Self::SalaryNegative => "Salario debe ser positivo",
        }
    }

    /// Localized message.
    #[must_use]
    pub fn message(self, bundle: &TranslationBundle) -> String {
        bundle.text(self.key(), self.default_text())
    }
}

/// Field errors currently surfaced, one per field.
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Check one field of the draft.
///
/// # Errors
///
/// Returns the first rule the field's raw value breaks.
pub fn validate_field(draft: &EmployeeDraft, field: Field) -> Result<(), FieldError> {
    let raw = draft.get(field);
    match field {
        Field::FirstName => required(raw, FieldError::FirstNameRequired).map(drop),
        Field::LastName => required(raw, FieldError::LastNameRequired).map(drop),
        Field::Age => parse_age(raw).map(drop),
        Field::Department => parse_department(raw).map(drop),
        Field::Salary => parse_salary(raw).map(drop),
    }
}

/// Check a subset of fields, collecting every failure.
#[must_use]
pub fn validate_fields(draft: &EmployeeDraft, fields: &[Field]) -> FieldErrors {
    fields
        .iter()
        .filter_map(|&field| {
            validate_field(draft, field)
                .err()
                .map(|error| (field, error))
        })
        .collect()
}

/// Convert a draft into the request body, validating the whole schema.
///
/// # Errors
///
/// Returns every failing field when the draft is not persistable.
pub fn build_payload(draft: &EmployeeDraft) -> Result<EmployeePayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let first_name = capture(
        &mut errors,
        Field::FirstName,
        required(&draft.first_name, FieldError::FirstNameRequired),
    );
    let last_name = capture(
        &mut errors,
        Field::LastName,
        required(&draft.last_name, FieldError::LastNameRequired),
    );
    let age = capture(&mut errors, Field::Age, parse_age(&draft.age));
    let department = capture(
        &mut errors,
        Field::Department,
        parse_department(&draft.department),
    );
    let salary = capture(&mut errors, Field::Salary, parse_salary(&draft.salary));
    match (first_name, last_name, age, department, salary) {
        (Some(first_name), Some(last_name), Some(age), Some(department), Some(salary)) => {
            Ok(EmployeePayload {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                age,
                department,
                salary,
            })
        }
        _ => Err(errors),
    }
}

fn capture<T>(errors: &mut FieldErrors, field: Field, result: Result<T, FieldError>) -> Option<T> {
    result
        .map_err(|error| {
            errors.insert(field, error);
        })
        .ok()
}

fn required(raw: &str, error: FieldError) -> Result<&str, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed)
    }
}

/// Blank input counts as zero and so fails positivity.
fn parse_age(raw: &str) -> Result<u32, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::AgeNotPositive);
    }
    let value = match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() && value <= 0.0 => Err(FieldError::AgeNotPositive),
                Ok(value) if value.is_finite() => Err(FieldError::AgeNotInteger),
                _ => Err(FieldError::AgeNotANumber),
            };
        }
    };
    if value <= 0 {
        return Err(FieldError::AgeNotPositive);
    }
    u32::try_from(value).map_err(|_| FieldError::AgeOutOfRange)
}

fn parse_department(raw: &str) -> Result<Department, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::DepartmentRequired);
    }
    raw.parse::<Department>()
        .map_err(|_| FieldError::DepartmentUnknown)
}

/// Blank input counts as zero, which is a valid salary.
fn parse_salary(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err(FieldError::SalaryNotANumber),
        Ok(value) if value < 0.0 => Err(FieldError::SalaryNegative),
        Ok(value) => Ok(value),
        Err(_) => Err(FieldError::SalaryNotANumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            age: "30".into(),
            department: "San Salvador".into(),
            salary: "1200".into(),
        }
    }

    fn with(field: Field, value: &str) -> EmployeeDraft {
        let mut draft = valid();
        draft.set(field, value);
        draft
    }

    #[test]
    fn names_must_not_be_blank() {
        assert_eq!(
            validate_field(&with(Field::FirstName, ""), Field::FirstName),
            Err(FieldError::FirstNameRequired)
        );
        assert_eq!(
            validate_field(&with(Field::LastName, "   "), Field::LastName),
            Err(FieldError::LastNameRequired)
        );
    }

    #[test]
    fn age_rules() {
        let cases = [
            ("-1", Err(FieldError::AgeNotPositive)),
            ("0", Err(FieldError::AgeNotPositive)),
            ("", Err(FieldError::AgeNotPositive)),
            ("abc", Err(FieldError::AgeNotANumber)),
            ("30.5", Err(FieldError::AgeNotInteger)),
            ("-2.5", Err(FieldError::AgeNotPositive)),
            ("99999999999", Err(FieldError::AgeOutOfRange)),
            (" 42 ", Ok(())),
        ];
        for (raw, expected) in cases {
            assert_eq!(validate_field(&with(Field::Age, raw), Field::Age), expected, "{raw}");
        }
    }

    #[test]
    fn department_must_be_in_the_closed_list() {
        assert_eq!(
            validate_field(&with(Field::Department, "Atlantis"), Field::Department),
            Err(FieldError::DepartmentUnknown)
        );
        assert_eq!(
            validate_field(&with(Field::Department, ""), Field::Department),
            Err(FieldError::DepartmentRequired)
        );
        assert!(validate_field(&with(Field::Department, "La Unión"), Field::Department).is_ok());
    }

    #[test]
    fn salary_rules() {
        assert_eq!(
            validate_field(&with(Field::Salary, "-5"), Field::Salary),
            Err(FieldError::SalaryNegative)
        );
        assert_eq!(
            validate_field(&with(Field::Salary, "mucho"), Field::Salary),
            Err(FieldError::SalaryNotANumber)
        );
        assert_eq!(
            validate_field(&with(Field::Salary, "NaN"), Field::Salary),
            Err(FieldError::SalaryNotANumber)
        );
        assert!(validate_field(&with(Field::Salary, ""), Field::Salary).is_ok());
        assert!(validate_field(&with(Field::Salary, "0"), Field::Salary).is_ok());
    }

    #[test]
    fn subset_validation_reports_each_failure() {
        let mut draft = EmployeeDraft::default();
        draft.set(Field::Age, "40");
        let errors = validate_fields(&draft, &[Field::FirstName, Field::LastName, Field::Age]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(&Field::FirstName), Some(&FieldError::FirstNameRequired));
        assert!(!errors.contains_key(&Field::Age));
    }

    #[test]
    fn payload_is_typed_and_trimmed() {
        let mut draft = valid();
        draft.set(Field::FirstName, "  Ana ");
        let payload = build_payload(&draft).expect("valid draft");
        assert_eq!(payload.first_name, "Ana");
        assert_eq!(payload.age, 30);
        assert_eq!(payload.department, Department::SanSalvador);
        assert!((payload.salary - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn payload_build_fails_with_all_errors() {
        let errors = build_payload(&EmployeeDraft::default()).expect_err("blank draft");
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            [Field::FirstName, Field::LastName, Field::Age, Field::Department]
        );
    }

    #[test]
    fn messages_resolve_through_bundle() {
        let bundle = TranslationBundle::default();
        for error in [FieldError::FirstNameRequired, FieldError::SalaryNegative] {
            assert_eq!(error.message(&bundle), error.default_text());
        }
    }
}
