use audit_page::Analysis;
use audit_page::config::BackendConfigType;
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page to analyze
    url: String,

    /// Path to backend configuration file
    #[arg(short, long)]
    config: String,

    /// Override page fetch timeout in seconds
    #[arg(short, long)]
    fetch_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config_path = PathBuf::from(&args.config);
    let config = BackendConfigType::from_file(config_path)?;

    // Print the loaded configuration (for debugging)
    match &config {
        BackendConfigType::OpenAi(openai_config) => {
            println!("Hosted backend configuration:");
            println!("  Endpoint: {}", openai_config.endpoint);
            println!("  Model: {}", openai_config.model);
            println!("  Temperature: {}", openai_config.temperature);
        }
        BackendConfigType::Ollama(ollama_config) => {
            println!("Ollama backend configuration:");
            println!("  Server URL: {}", ollama_config.url);
            println!("  Model: {}", ollama_config.model);
        }
    }

    // Create an Analysis builder with the URL and configuration
    let mut analysis = Analysis::new(&args.url).with_backend(config);

    // Apply overrides if specified
    if let Some(fetch_timeout) = args.fetch_timeout {
        println!("Overriding fetch timeout: {}s", fetch_timeout);
        analysis = analysis.with_fetch_timeout(fetch_timeout);
    }

    // Run the analysis
    let start_time = std::time::Instant::now();
    let report = analysis.run().await?;

    println!("{}", report.markdown);
    println!(
        "Analysis complete for \"{}\" in {:.2} seconds.",
        report.title,
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
