//! Runman - terminal Postman collection runner
//!
//! Thin entry point: load settings, set up file logging, download the
//! collection, then hand the session over to the interactive menu loop.

use std::ffi::OsStr;
use std::path::Path;

use tokio::io::BufReader;

use runman::app::App;
use runman::constants::DEFAULT_LOG_FILE;
use runman::network::{self, FetchError};
use runman::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration comes first; a missing settings file aborts the run
    // before any network activity.
    let settings = Settings::load()?;

    // Log to a file so the interactive surface stays clean.
    let log_path = settings
        .application
        .log_file_path
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    let log_path = Path::new(&log_path);
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_file = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    println!("App: {}", settings.application.name);
    println!(
        "Default collection URL: {}",
        settings.application.default_collection_url
    );

    let client = network::create_client();

    println!("Downloading collection...");
    match network::fetch_collection(&client, &settings.application.default_collection_url).await {
        Ok(collection) => {
            println!("Success: collection received.");
            println!();
            println!("Collection: {}", collection.info.name);

            let mut app = App::new(client, collection);
            app.run(BufReader::new(tokio::io::stdin())).await?;
        }
        Err(FetchError::Empty) => {
            println!("Failed: collection response is empty!");
        }
        Err(e) => {
            tracing::error!(error = %e, "Collection download failed");
            println!("Failed to retrieve collection: {e}");
        }
    }

    Ok(())
}
