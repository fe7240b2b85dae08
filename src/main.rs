use clap::Parser;
use intellicode::errors::ErrorHandler;
use intellicode::structs::cli::Cli;
use intellicode::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    // Failures end the current action only; the process still exits cleanly.
    let outcome = ErrorHandler::run_guarded("command", async move { runner.run_command(cli.command).await }).await;
    if let Err(error) = outcome {
        ErrorHandler::handle_error(&error);
    }

    Ok(())
}
