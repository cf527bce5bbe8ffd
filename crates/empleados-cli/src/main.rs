//! Binary entrypoint for the empleados CLI.

#[tokio::main]
async fn main() {
    let exit_code = empleados_cli::run().await;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
