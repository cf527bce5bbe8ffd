//! Raw form values and the step sequence that partitions them.

use empleados_api_models::Employee;

use crate::form::schema::Field;

/// Field values exactly as typed; converted only when validated.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EmployeeDraft {
    /// `nombre` input.
    pub first_name: String,
    /// `apellido` input.
    pub last_name: String,
    /// `edad` input.
    pub age: String,
    /// `departamento` selection.
    pub department: String,
    /// `salario` input.
    pub salary: String,
}

impl EmployeeDraft {
    /// Prime the inputs from a fetched record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            age: employee.age.to_string(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
        }
    }

    /// Raw value of one input.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Age => &self.age,
            Field::Department => &self.department,
            Field::Salary => &self.salary,
        }
    }

    /// Replace one input's value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Age => &mut self.age,
            Field::Department => &mut self.department,
            Field::Salary => &mut self.salary,
        };
        *slot = value.into();
    }
}

/// Wizard pages in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Step {
    /// Names.
    #[default]
    PersonalData,
    /// Age and department.
    Department,
    /// Salary, then submit.
    Salary,
}

/// Render status of a step relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Already passed.
    Completed,
    /// Currently shown.
    Active,
    /// Not reached yet.
    Upcoming,
}

impl Step {
    /// Steps in display order.
    pub const ALL: [Self; 3] = [Self::PersonalData, Self::Department, Self::Salary];

    /// 1-based position for the indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PersonalData => 1,
            Self::Department => 2,
            Self::Salary => 3,
        }
    }

    /// Fields validated when leaving this step.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::PersonalData => &[Field::FirstName, Field::LastName],
            Self::Department => &[Field::Age, Field::Department],
            Self::Salary => &[Field::Salary],
        }
    }

    /// Step owning `field`.
    #[must_use]
    pub fn of(field: Field) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| step.fields().contains(&field))
            .unwrap_or_default()
    }

    /// Translation key for the indicator title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::PersonalData => "form.steps.personal",
            Self::Department => "form.steps.department",
            Self::Salary => "form.steps.salary",
        }
    }

    /// Following step, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::PersonalData => Some(Self::Department),
            Self::Department => Some(Self::Salary),
            Self::Salary => None,
        }
    }

    /// Preceding step, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::PersonalData => None,
            Self::Department => Some(Self::PersonalData),
            Self::Salary => Some(Self::Department),
        }
    }

    /// Whether this is the submit step.
    #[must_use]
    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Status of this step while `active` is shown.
    #[must_use]
    pub fn status(self, active: Self) -> StepStatus {
        match self.cmp(&active) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::employee;

    #[test]
    fn steps_partition_every_field_once() {
        for field in Field::ALL {
            let owners = Step::ALL
                .iter()
                .filter(|step| step.fields().contains(&field))
                .count();
            assert_eq!(owners, 1, "{field:?}");
        }
        assert_eq!(Step::of(Field::Age), Step::Department);
        assert_eq!(Step::of(Field::Salary), Step::Salary);
    }

    #[test]
    fn navigation_is_linear() {
        assert_eq!(Step::default(), Step::PersonalData);
        assert_eq!(Step::PersonalData.next(), Some(Step::Department));
        assert_eq!(Step::Salary.previous(), Some(Step::Department));
        assert_eq!(Step::PersonalData.previous(), None);
        assert!(Step::Salary.is_last());
        assert_eq!(
            Step::ALL.map(Step::number),
            [1, 2, 3]
        );
    }

    #[test]
    fn indicator_status_tracks_active_step() {
        let statuses = Step::ALL.map(|step| step.status(Step::Department));
        assert_eq!(
            statuses,
            [StepStatus::Completed, StepStatus::Active, StepStatus::Upcoming]
        );
    }

    #[test]
    fn draft_primes_from_record() {
        let draft = EmployeeDraft::from_employee(&employee("a1"));
        assert_eq!(draft.get(Field::FirstName), "Nombre a1");
        assert_eq!(draft.age, "30");
        assert_eq!(draft.salary, "1200");
        assert_eq!(draft.get(Field::Department), "San Salvador");
    }

    #[test]
    fn set_replaces_one_field() {
        let mut draft = EmployeeDraft::default();
        draft.set(Field::Salary, "950.5");
        assert_eq!(draft.get(Field::Salary), "950.5");
        assert!(draft.first_name.is_empty());
    }
}
