use clap::{CommandFactory, Parser};
use sitecmp::comparison::compare_sites_with;
use sitecmp::config::{CliConfig, Config};
use sitecmp::core::constants::output_formats;
use sitecmp::core::types::{Site, Summary};
use sitecmp::discovery::{demo_urls, load_urls};
use sitecmp::reporting::{logging, write_report};
use sitecmp::ui::{Cli, Commands, cli_to_config, display_results, print_completions};

fn main() {
    let cli = Cli::parse();

    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_sitecmp_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main comparison logic extracted from main() for testing
pub fn run_sitecmp_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let (old_urls, new_urls) = load_inputs(cli)?;
    let options = config.compare_options()?;

    if config.output_format() == output_formats::TEXT && !cli_config.quiet {
        println!("Comparing sites...");
    }

    let comparison = compare_sites_with(&old_urls, &new_urls, &options);

    let report_file = match config.report_path() {
        Some(path) => {
            write_report(&comparison, path).inspect_err(|e| {
                logging::log_error(&format!("Could not write report '{path}'"), Some(e));
            })?;
            Some(path)
        }
        None => None,
    };

    display_results(&comparison, &config, cli_config.quiet, report_file)?;

    let summary = comparison.summary();
    logging::log_summary(&summary);

    Ok(determine_exit_code(&summary, &config))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Read both URL lists, or hand out the demo inventories
pub fn load_inputs(cli: &Cli) -> Result<(Vec<String>, Vec<String>), Box<dyn std::error::Error>> {
    if cli.demo {
        return Ok(demo_urls());
    }

    match (&cli.old, &cli.new) {
        (Some(old_path), Some(new_path)) => {
            let old_urls = load_urls(old_path)?;
            logging::log_input_loaded(Site::Old, old_path, old_urls.len());
            let new_urls = load_urls(new_path)?;
            logging::log_input_loaded(Site::New, new_path, new_urls.len());
            Ok((old_urls, new_urls))
        }
        _ => Err("Both OLD and NEW URL lists are required (or use --demo)".into()),
    }
}

/// Determine the exit code based on the configured minimum match
pub fn determine_exit_code(summary: &Summary, config: &Config) -> i32 {
    match config.min_match {
        Some(threshold) if !summary.meets_threshold(threshold) => 1,
        _ => 0,
    }
}
