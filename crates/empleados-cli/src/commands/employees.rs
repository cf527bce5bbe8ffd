use anyhow::anyhow;
use empleados_api_models::Employee;
use empleados_core::form::{Field, FormController, FormMode, FormPhase, SubmitOutcome};
use empleados_core::listing::state::{is_selected, select_row, select_visible_rows};
use empleados_core::listing::{BulkDeletePolicy, ListingController, LoadState};
use empleados_core::{EmployeesApi, Navigator, Notifier};

use crate::cli::{CreateArgs, EmployeeFields, OutputFormat, RemoveArgs, ShowArgs, UpdateArgs};
use crate::client::{AppContext, CliError, CliResult, HttpEmployeesApi, classify_api_error};
use crate::commands::{ConsoleNotifier, TracingNavigator};
use crate::output::{render_employee, render_employee_list};

type CliListing = ListingController<HttpEmployeesApi, ConsoleNotifier, TracingNavigator>;

fn listing(ctx: &AppContext, notifier: &ConsoleNotifier, policy: BulkDeletePolicy) -> CliListing {
    ListingController::new(
        ctx.api.clone(),
        notifier.clone(),
        TracingNavigator,
        ctx.bundle.clone(),
    )
    .with_bulk_policy(policy)
}

async fn load_listing(listing: &CliListing) -> CliResult<()> {
    listing.load().await;
    match listing.state().load {
        LoadState::Failed(message) => Err(CliError::failure(anyhow!(message))),
        LoadState::Loading | LoadState::Ready => Ok(()),
    }
}

pub(crate) async fn handle_list(ctx: &AppContext, format: OutputFormat) -> CliResult<()> {
    let listing = listing(ctx, &ConsoleNotifier::default(), BulkDeletePolicy::default());
    load_listing(&listing).await?;
    let rows: Vec<Employee> = select_visible_rows(&listing.state())
        .iter()
        .map(|row| row.as_ref().clone())
        .collect();
    render_employee_list(&rows, format, &ctx.bundle)
}

pub(crate) async fn handle_show(
    ctx: &AppContext,
    args: ShowArgs,
    format: OutputFormat,
) -> CliResult<()> {
    match ctx.api.get(&args.id).await {
        Ok(employee) => render_employee(&employee, format, &ctx.bundle),
        Err(err) => {
            let message = err.user_message(|| {
                ctx.bundle
                    .text("form.load_failed", "No se pudo cargar el empleado")
            });
            Err(classify_api_error(&err, message))
        }
    }
}

pub(crate) async fn handle_create(
    ctx: &AppContext,
    args: CreateArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let saved = run_form(ctx, FormMode::Create, &args.fields).await?;
    render_employee(&saved, format, &ctx.bundle)
}

pub(crate) async fn handle_update(
    ctx: &AppContext,
    args: UpdateArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let saved = run_form(ctx, FormMode::Edit(args.id), &args.fields).await?;
    render_employee(&saved, format, &ctx.bundle)
}

/// Drive the wizard the way a user would: prime, fill, step forward, submit.
async fn run_form(ctx: &AppContext, mode: FormMode, fields: &EmployeeFields) -> CliResult<Employee> {
    let notifier = ConsoleNotifier::default();
    let form = FormController::new(
        mode,
        ctx.api.clone(),
        notifier.clone(),
        TracingNavigator,
        ctx.bundle.clone(),
    );
    form.prime().await;
    if let FormPhase::LoadFailed(message) = form.state().phase {
        return Err(CliError::failure(anyhow!(message)));
    }

    for (field, value) in [
        (Field::FirstName, &fields.nombre),
        (Field::LastName, &fields.apellido),
        (Field::Age, &fields.edad),
        (Field::Department, &fields.departamento),
        (Field::Salary, &fields.salario),
    ] {
        if let Some(value) = value {
            form.set_field(field, value.clone());
        }
    }

    while !form.state().step.is_last() {
        if !form.next() {
            return Err(field_errors(&form));
        }
    }

    match form.submit().await {
        SubmitOutcome::Saved(employee) => Ok(employee),
        SubmitOutcome::Invalid => Err(field_errors(&form)),
        SubmitOutcome::Rejected(err) => {
            let message = notifier.last_error().unwrap_or_else(|| err.to_string());
            Err(classify_api_error(&err, message))
        }
        SubmitOutcome::Ignored => Err(CliError::failure(anyhow!(
            "form is not ready for submission"
        ))),
    }
}

fn field_errors<A, N, R>(form: &FormController<A, N, R>) -> CliError
where
    A: EmployeesApi,
    N: Notifier,
    R: Navigator,
{
    let message = form
        .state()
        .errors
        .keys()
        .filter_map(|field| {
            form.error_text(*field)
                .map(|text| format!("{}: {text}", field.name()))
        })
        .collect::<Vec<_>>()
        .join("; ");
    CliError::validation(message)
}

pub(crate) async fn handle_remove(ctx: &AppContext, args: RemoveArgs) -> CliResult<()> {
    let notifier = ConsoleNotifier::default();
    let policy = if args.reconcile {
        BulkDeletePolicy::Reconcile
    } else {
        BulkDeletePolicy::AllOrNothing
    };
    let listing = listing(ctx, &notifier, policy);

    if let [id] = args.ids.as_slice() {
        if listing.delete_one(id).await {
            return Ok(());
        }
        return Err(CliError::failure(anyhow!(
            notifier.last_error().unwrap_or_default()
        )));
    }

    load_listing(&listing).await?;
    let state = listing.state();
    let unknown: Vec<&str> = args
        .ids
        .iter()
        .filter(|id| select_row(&state, id).is_none())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(CliError::validation(format!(
            "unknown employee id(s): {}",
            unknown.join(", ")
        )));
    }
    for id in &args.ids {
        if !is_selected(&listing.state(), id) {
            listing.toggle(id);
        }
    }

    let report = listing.delete_selected().await;
    if report.is_complete() {
        Ok(())
    } else {
        Err(CliError::failure(anyhow!(
            notifier.last_error().unwrap_or_default()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::context_for;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use serde_json::{Value, json};

    fn record(id: &str) -> Value {
        json!({
            "_id": id,
            "nombre": "Ana",
            "apellido": "Lopez",
            "edad": 30,
            "departamento": "San Salvador",
            "salario": 1200
        })
    }

    fn fields(edad: &str) -> EmployeeFields {
        EmployeeFields {
            nombre: Some("Ana".into()),
            apellido: Some("Lopez".into()),
            edad: Some(edad.into()),
            departamento: Some("San Salvador".into()),
            salario: Some("1200".into()),
        }
    }

    #[tokio::test]
    async fn list_renders_rows() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/empleados");
            then.status(200).json_body(json!([record("a1"), record("b2")]));
        });

        handle_list(&context_for(&server), OutputFormat::Table)
            .await
            .expect("list should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn list_failure_is_operational() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/empleados");
            then.status(500);
        });

        let err = handle_list(&context_for(&server), OutputFormat::Json)
            .await
            .expect_err("list should fail");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "Ocurrió un error al cargar los empleados"
        );
    }

    #[tokio::test]
    async fn create_posts_validated_payload() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/empleados").json_body(json!({
                "nombre": "Ana",
                "apellido": "Lopez",
                "edad": 30,
                "departamento": "San Salvador",
                "salario": 1200.0
            }));
            then.status(201).json_body(record("new-1"));
        });

        let args = CreateArgs { fields: fields("30") };
        handle_create(&context_for(&server), args, OutputFormat::Json)
            .await
            .expect("create should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn invalid_fields_never_reach_the_server() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/empleados");
            then.status(201).json_body(record("new-1"));
        });

        let args = CreateArgs { fields: fields("-1") };
        let err = handle_create(&context_for(&server), args, OutputFormat::Table)
            .await
            .expect_err("validation should fail");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "edad: Edad debe ser mayor que 0");
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn missing_names_are_reported_together() {
        let server = MockServer::start_async().await;
        let err = handle_create(&context_for(&server), CreateArgs::default(), OutputFormat::Table)
            .await
            .expect_err("validation should fail");
        assert_eq!(
            err.display_message(),
            "nombre: Nombre requerido; apellido: Apellido requerido"
        );
    }

    #[tokio::test]
    async fn server_rejection_surfaces_reason() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/empleados");
            then.status(409)
                .json_body(json!({ "error": "Empleado duplicado" }));
        });

        let args = CreateArgs { fields: fields("30") };
        let err = handle_create(&context_for(&server), args, OutputFormat::Table)
            .await
            .expect_err("conflict");
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "Empleado duplicado");
    }

    #[tokio::test]
    async fn update_merges_flags_over_primed_record() {
        let server = MockServer::start_async().await;
        let get = server.mock(|when, then| {
            when.method(GET).path("/empleados/a1");
            then.status(200).json_body(record("a1"));
        });
        let put = server.mock(|when, then| {
            when.method(PUT).path("/empleados/a1").json_body(json!({
                "nombre": "Ana",
                "apellido": "Lopez",
                "edad": 30,
                "departamento": "San Salvador",
                "salario": 1500.0
            }));
            then.status(200).json_body(record("a1"));
        });

        let args = UpdateArgs {
            id: "a1".into(),
            fields: EmployeeFields {
                salario: Some("1500".into()),
                ..EmployeeFields::default()
            },
        };
        handle_update(&context_for(&server), args, OutputFormat::Table)
            .await
            .expect("update should succeed");
        get.assert();
        put.assert();
    }

    #[tokio::test]
    async fn update_of_missing_record_fails_before_put() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/empleados/zz");
            then.status(404);
        });

        let args = UpdateArgs {
            id: "zz".into(),
            fields: EmployeeFields::default(),
        };
        let err = handle_update(&context_for(&server), args, OutputFormat::Table)
            .await
            .expect_err("missing");
        assert_eq!(err.display_message(), "No se pudo cargar el empleado");
    }

    #[tokio::test]
    async fn show_missing_record_reports_server_reason() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/empleados/zz");
            then.status(404)
                .json_body(json!({ "error": "Empleado no encontrado" }));
        });

        let args = ShowArgs { id: "zz".into() };
        let err = handle_show(&context_for(&server), args, OutputFormat::Table)
            .await
            .expect_err("missing");
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.display_message(), "Empleado no encontrado (status 404)");
    }

    #[tokio::test]
    async fn single_remove_issues_one_delete() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/empleados/a1");
            then.status(204);
        });

        let args = RemoveArgs {
            ids: vec!["a1".into()],
            reconcile: false,
        };
        handle_remove(&context_for(&server), args)
            .await
            .expect("delete should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn bulk_remove_reports_partial_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/empleados");
            then.status(200).json_body(json!([record("a1"), record("b2")]));
        });
        let first = server.mock(|when, then| {
            when.method(DELETE).path("/empleados/a1");
            then.status(204);
        });
        let second = server.mock(|when, then| {
            when.method(DELETE).path("/empleados/b2");
            then.status(500);
        });

        let args = RemoveArgs {
            ids: vec!["a1".into(), "b2".into()],
            reconcile: true,
        };
        let err = handle_remove(&context_for(&server), args)
            .await
            .expect_err("partial failure");
        first.assert();
        second.assert();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.display_message(),
            "No se pudieron eliminar 1 de 2 empleados seleccionados."
        );
    }

    #[tokio::test]
    async fn bulk_remove_rejects_unknown_ids() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/empleados");
            then.status(200).json_body(json!([record("a1")]));
        });
        let delete = server.mock(|when, then| {
            when.method(DELETE);
            then.status(204);
        });

        let args = RemoveArgs {
            ids: vec!["a1".into(), "ghost".into()],
            reconcile: false,
        };
        let err = handle_remove(&context_for(&server), args)
            .await
            .expect_err("unknown id");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("ghost"));
        delete.assert_hits(0);
    }
}
