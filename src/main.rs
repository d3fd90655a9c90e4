use anyhow::{Context, Result};
use clap::Parser;
use recprep::app::{handle_fatal_error, init_logging, AppConfig};
use recprep::cli::Cli;
use recprep::config::{load_config, DEFAULT_CONFIG_FILE};
use recprep::pipeline::{self, RunReport};
use tracing::{debug, warn};

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut app_config = AppConfig::new(cli.verbose)?;
    if let Some(dir) = &cli.work_dir {
        app_config = app_config.with_working_dir(dir.clone());
    }

    let loaded = load_config(&app_config.working_dir, cli.config.as_deref())
        .context("Failed to load configuration")?;
    let mut config = loaded.config;
    cli.apply_overrides(&mut config);

    let app_config = app_config.with_log_level(config.log_level.clone());
    init_logging(&app_config);

    match &loaded.source {
        Some(path) => debug!("Loaded configuration from {}", path.display()),
        None => debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE),
    }
    for ignored in &loaded.ignored_env {
        warn!("{}", ignored);
    }

    let config = config.resolve_paths(&app_config.working_dir);
    debug!("Resolved configuration: {:?}", config);

    let report = pipeline::run(&config).context("Cleaning run failed")?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &RunReport) {
    println!("📊 After cleaning:");
    println!("   - Products: {}", report.products);
    println!("   - Valid reviews: {}", report.reviews_kept);
    println!("   - Reviewers: {}", report.distinct_reviewers);
    println!(
        "💾 Saved {} and {}",
        report.products_output.display(),
        report.reviews_output.display()
    );
    for path in &report.json_exports {
        println!("   - Exported {}", path.display());
    }
}
