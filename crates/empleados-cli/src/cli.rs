//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand, ValueEnum};
use empleados_core::i18n::{LocaleCode, TranslationBundle};
use reqwest::Url;
use uuid::Uuid;

use crate::client::{AppContext, CliDependencies, CliResult, parse_url};
use crate::commands::departments::handle_departments;
use crate::commands::employees::{
    handle_create, handle_list, handle_remove, handle_show, handle_update,
};
use crate::logging::init_logging;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_API_URL: &str = "http://127.0.0.1:4000";

/// Parses arguments, runs the requested command, and reports failures on stderr.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(err) = init_logging(cli.verbose) {
        eprintln!("warning: {err:#}");
    }
    let command_name = command_label(&cli.command);
    let trace_id = Uuid::new_v4().to_string();
    tracing::debug!(command = command_name, trace_id = %trace_id, "dispatching command");

    let result = match CliDependencies::from_env(&cli, &trace_id) {
        Ok(deps) => dispatch(cli, &deps).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            let exit_code = err.exit_code();
            tracing::debug!(command = command_name, exit_code, "command failed");
            eprintln!("error: {}", err.display_message());
            exit_code
        }
    }
}

async fn dispatch(cli: Cli, deps: &CliDependencies) -> CliResult<()> {
    let ctx = AppContext::new(
        deps.client.clone(),
        cli.api_url,
        TranslationBundle::new(cli.locale.into()),
    );

    match cli.command {
        Command::Ls => handle_list(&ctx, cli.output).await,
        Command::Show(args) => handle_show(&ctx, args, cli.output).await,
        Command::Create(args) => handle_create(&ctx, args, cli.output).await,
        Command::Update(args) => handle_update(&ctx, args, cli.output).await,
        Command::Rm(args) => handle_remove(&ctx, args).await,
        Command::Departamentos => handle_departments(cli.output),
    }
}

#[derive(Parser)]
#[command(name = "empleados", about = "Administrative CLI for the empleados API")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "EMPLEADOS_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "EMPLEADOS_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render structured data"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "EMPLEADOS_LOCALE",
        value_enum,
        default_value_t = LocaleArg::Es
    )]
    pub(crate) locale: LocaleArg,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List every employee.
    Ls,
    /// Show one employee.
    Show(ShowArgs),
    /// Create an employee.
    Create(CreateArgs),
    /// Update an existing employee.
    Update(UpdateArgs),
    /// Delete one or more employees.
    Rm(RemoveArgs),
    /// List the accepted departments.
    Departamentos,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    #[arg(help = "Employee identifier")]
    pub(crate) id: String,
}

/// Field values as typed; validated by the form rules, not by clap.
#[derive(Args, Default, Clone)]
pub(crate) struct EmployeeFields {
    #[arg(long)]
    pub(crate) nombre: Option<String>,
    #[arg(long)]
    pub(crate) apellido: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) edad: Option<String>,
    #[arg(long)]
    pub(crate) departamento: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) salario: Option<String>,
}

#[derive(Args, Default)]
pub(crate) struct CreateArgs {
    #[command(flatten)]
    pub(crate) fields: EmployeeFields,
}

#[derive(Args)]
pub(crate) struct UpdateArgs {
    #[arg(help = "Employee identifier")]
    pub(crate) id: String,
    #[command(flatten)]
    pub(crate) fields: EmployeeFields,
}

#[derive(Args)]
pub(crate) struct RemoveArgs {
    #[arg(required = true, help = "Employee identifiers")]
    pub(crate) ids: Vec<String>,
    #[arg(
        long,
        help = "Drop confirmed deletes even when others fail (default: all or nothing)"
    )]
    pub(crate) reconcile: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LocaleArg {
    #[default]
    Es,
    En,
}

impl From<LocaleArg> for LocaleCode {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::Es => Self::Es,
            LocaleArg::En => Self::En,
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Ls => "ls",
        Command::Show(_) => "show",
        Command::Create(_) => "create",
        Command::Update(_) => "update",
        Command::Rm(_) => "rm",
        Command::Departamentos => "departamentos",
    }
}
