//! Fitplan
//!
//! An MCP server for meal and workout planning.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitplan::build_info;
use fitplan::catalog::ExerciseCatalog;
use fitplan::config;
use fitplan::mcp::FitplanService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let exercises_path = config::exercises_path();
    eprintln!("Exercise catalog: {}", exercises_path.display());

    // A missing or broken catalog leaves the exercise tools reporting
    // "data unavailable"; nutrition tools keep working
    let catalog = ExerciseCatalog::load_or_empty(&exercises_path);
    eprintln!("Loaded {} exercises", catalog.len());

    let service = FitplanService::new(exercises_path, catalog);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
