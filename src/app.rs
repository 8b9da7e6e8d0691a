use crate::cli::{Cli, Commands};
use bloom::catalog::Catalog;
use bloom::nav::Screen;
use bloom::{config, logging, ui};
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Catalog { json } => handle_catalog(json),
            Commands::Routes => handle_routes(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}", e);
        eprintln!("Using built-in defaults.");
        config::Config::default()
    });

    // Logging problems shouldn't keep the UI from starting
    match config.log_path() {
        Ok(path) => {
            if let Err(e) = logging::init(&config.logging, &path) {
                eprintln!("Warning: logging disabled: {:#}", e);
            }
        }
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    // Start screen: CLI flag > config > default
    let start = cli.start.unwrap_or(config.startup.start_screen);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), %start, "starting bloom");

    let mut state = ui::AppState::new(Catalog::garden(), start);
    if let Err(e) = ui::run_ui(&mut state, &config) {
        tracing::error!(error = %e, "ui failed");
        eprintln!("Error running UI: {}", e);
        process::exit(1);
    }

    tracing::info!(
        selected = ?state.catalog.selected_names(),
        screen = %state.current_screen(),
        "exiting"
    );
}

fn handle_catalog(json: bool) {
    let catalog = Catalog::garden();

    if json {
        match serde_json::to_string_pretty(&catalog) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize catalog: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    for (i, entry) in catalog.iter().enumerate() {
        // Quote names so the trailing whitespace stays visible
        println!(
            "{:>2}. {:<20} image={} description={}",
            i + 1,
            format!("{:?}", entry.name),
            entry.image,
            entry.description.0
        );
    }
    println!("Total entries: {}", catalog.len());
}

fn handle_routes() {
    for screen in Screen::all() {
        let marker = if screen == Screen::default() { " (start)" } else { "" };
        println!("{}{}", screen, marker);
    }
    println!();
    for (from, action, to) in Screen::transitions() {
        println!("{} --{:?}--> {}", from, action, to);
    }
}

fn handle_init_config() {
    match config::Config::config_path() {
        Ok(path) if path.exists() => match config::Config::load_from(&path) {
            Ok(cfg) => {
                println!("Config loaded successfully from {}", path.display());
                println!("{:#?}", cfg);
            }
            Err(e) => {
                eprintln!("Config invalid: {:#}", e);
                process::exit(1);
            }
        },
        Ok(path) => {
            println!("Config missing, creating default at {}", path.display());
            if let Err(e) = config::Config::default().save_to(&path) {
                eprintln!("Failed to save default config: {:#}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Could not determine config path: {:#}", e);
            process::exit(1);
        }
    }
}
