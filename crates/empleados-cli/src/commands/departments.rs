use crate::cli::OutputFormat;
use crate::client::CliResult;
use crate::output::render_departments;

pub(crate) fn handle_departments(format: OutputFormat) -> CliResult<()> {
    render_departments(format)
}
