use clap::Parser;
use zonekit::cli::{self, Cli};
use zonekit::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging()?;
    tracing::debug!("zonekit {} (built {})", zonekit::VERSION, zonekit::BUILD_DATE);

    let output = cli::run(cli).await?;
    println!("{}", output.text);

    if !output.success {
        std::process::exit(1);
    }
    Ok(())
}
