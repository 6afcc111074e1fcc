use clap::Parser;
use tracing_subscriber::EnvFilter;

mod client;
mod view;

#[derive(Parser)]
#[command(name = "pulse", about = "Pulse CLI - fetch and display the backend health report")]
struct Cli {
    /// Pulse server URL
    #[arg(long, env = "PULSE_URL", default_value = "http://localhost:3000")]
    url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = client::HttpHealthSource::new(cli.url);
    let mut view = view::HealthView::new();
    view.load(&source).await;

    println!("{}", view.render());

    Ok(())
}
