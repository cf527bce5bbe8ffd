//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use empleados_api_models::{Department, Employee};
use empleados_core::i18n::TranslationBundle;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_employee_list(
    rows: &[Employee],
    format: OutputFormat,
    bundle: &TranslationBundle,
) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => to_json(rows)?,
        OutputFormat::Table => employee_table(rows, bundle),
    };
    println!("{text}");
    Ok(())
}

pub(crate) fn render_employee(
    employee: &Employee,
    format: OutputFormat,
    bundle: &TranslationBundle,
) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => to_json(employee)?,
        OutputFormat::Table => employee_detail(employee, bundle),
    };
    println!("{text}");
    Ok(())
}

pub(crate) fn render_departments(format: OutputFormat) -> CliResult<()> {
    let text = match format {
        OutputFormat::Json => to_json(&Department::ALL)?,
        OutputFormat::Table => Department::ALL
            .iter()
            .enumerate()
            .map(|(index, department)| format!("{:>2}  {department}", index + 1))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    println!("{text}");
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}

/// Fixed-width table with a `Total` footer.
pub(crate) fn employee_table(rows: &[Employee], bundle: &TranslationBundle) -> String {
    let column = |key: &str, default: &str| {
        bundle
            .text(&format!("listing.columns.{key}"), default)
            .to_uppercase()
    };
    let mut lines = vec![format!(
        "{:<26} {:<16} {:<16} {:>4} {:<16} {:>12}",
        column("id", "ID"),
        column("first_name", "Nombre"),
        column("last_name", "Apellido"),
        column("age", "Edad"),
        column("department", "Departamento"),
        column("salary", "Salario"),
    )];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<26} {:<16} {:<16} {:>4} {:<16} {:>12}",
            row.id,
            row.first_name,
            row.last_name,
            row.age,
            row.department,
            format_salary(row.salary)
        )
    }));
    lines.push(format!(
        "{}: {}",
        bundle.text("listing.total", "Total"),
        rows.len()
    ));
    lines.join("\n")
}

fn employee_detail(employee: &Employee, bundle: &TranslationBundle) -> String {
    let label = |key: &str, default: &str| bundle.text(&format!("listing.columns.{key}"), default);
    [
        format!("{}: {}", label("id", "ID"), employee.id),
        format!("{}: {}", label("first_name", "Nombre"), employee.first_name),
        format!("{}: {}", label("last_name", "Apellido"), employee.last_name),
        format!("{}: {}", label("age", "Edad"), employee.age),
        format!("{}: {}", label("department", "Departamento"), employee.department),
        format!("{}: {}", label("salary", "Salario"), format_salary(employee.salary)),
    ]
    .join("\n")
}

#[must_use]
pub(crate) fn format_salary(amount: f64) -> String {
    format!("{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use empleados_api_models::EmployeePayload;

    fn sample(id: &str) -> Employee {
        EmployeePayload {
            first_name: "Ana".into(),
            last_name: "Lopez".into(),
            age: 30,
            department: Department::SanSalvador,
            salary: 1200.0,
        }
        .into_employee(id)
    }

    #[test]
    fn table_ends_with_total_footer() {
        let bundle = TranslationBundle::default();
        let table = employee_table(&[sample("a1"), sample("b2")], &bundle);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("San Salvador"));
        assert!(lines[1].ends_with("1200.00"));
        assert_eq!(lines[3], "Total: 2");
    }

    #[test]
    fn empty_table_reports_zero() {
        let table = employee_table(&[], &TranslationBundle::default());
        assert!(table.ends_with("Total: 0"));
    }

    #[test]
    fn detail_uses_localized_labels() {
        let bundle = TranslationBundle::new(empleados_core::i18n::LocaleCode::En);
        let detail = employee_detail(&sample("a1"), &bundle);
        assert!(detail.contains("First name: Ana"));
        assert!(detail.contains("Salary: 1200.00"));
    }
}
