use audit_page::Analysis;
use audit_page::config::BackendConfigType;
use clap::Parser;
use std::path::PathBuf;

mod args;
use args::{Args, convert_backend};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting SEO analysis for: {}", args.url);

    // Resolve the backend configuration from a file or from flags
    let backend_config = match &args.config {
        Some(path) => match BackendConfigType::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                eprintln!("Error: could not load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => convert_backend(&args),
    };

    // Print server info message for the local backend
    if let BackendConfigType::Ollama(ollama_config) = &backend_config {
        println!("Note: The ollama backend requires a running Ollama server.");
        println!(
            "Set OLLAMA_URL environment variable if not using the default {}",
            ollama_config.url
        );
    }

    let analysis = Analysis::new(&args.url)
        .with_backend(backend_config)
        .with_fetch_timeout(args.fetch_timeout);

    let start_time = std::time::Instant::now();

    let report = match analysis.run().await {
        Ok(report) => report,
        Err(e) => {
            ::log::error!("Analysis failed: {}", e);
            eprintln!("Error: {}", e);
            eprintln!(
                "Please check the URL, your API key, and that the selected backend is reachable."
            );
            std::process::exit(1);
        }
    };

    let duration = start_time.elapsed();
    ::log::info!(
        "Analysis complete for {} in {:.2} seconds",
        report.url,
        duration.as_secs_f64()
    );

    println!("{}", report.markdown);

    // Offer the report as a downloadable file
    if args.save || args.output.is_some() {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(report.suggested_filename()));

        match report.save(&path) {
            Ok(()) => println!("Report saved to {}", path.display()),
            Err(e) => {
                ::log::error!("Failed to save report: {}", e);
                eprintln!("Error: could not save report: {}", e);
                std::process::exit(1);
            }
        }
    }
}
