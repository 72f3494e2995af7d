//! Student roster entry point.

use std::io;

use roster::config::Config;
use roster::prompt::TerminalPrompt;
use roster::terminal::Terminal;
use student_api::HttpStudentApi;
use student_list::StudentList;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> roster::Result<()> {
    let config = Config::from_env();

    // Logs go to stderr so they do not interleave with the table on stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let api = HttpStudentApi::new(&config.api_url)?;
    tracing::info!(api_url = %config.api_url, "starting student roster");

    let terminal = Terminal::new(io::BufReader::new(io::stdin()), io::stdout());
    let list = StudentList::new(api, TerminalPrompt::new(terminal.clone()));
    roster::run(&list, &terminal).await?;

    tracing::info!("student roster closed");
    Ok(())
}
