pub mod config;
pub mod inspect;
pub mod samples;

use std::path::PathBuf;

use config::DemoConfig;
use json_codec::{Deserializer, JsonValue, Serializer};
use logging::{LogLevel, Logger};

fn main() {
    let config = load_config();
    let logger = initialize_logger(&config);

    logger.info("json-demo starting...");

    let parser_logger = logger.for_component("Parser");
    let status = match std::env::args().nth(1) {
        Some(path) => inspect_file(&path, &config, &parser_logger),
        None => {
            run_samples(&config, &parser_logger);
            0
        }
    };

    logger.info(&format!("json-demo finished with status {}", status));
    logger.flush();
    std::process::exit(status);
}

/// Loads configuration from the environment or disk, falling back to defaults
fn load_config() -> DemoConfig {
    // 1. CONFIG environment variable holding the JSON itself
    // 2. json-demo.json in the locations config_loader searches
    // 3. Defaults
    if let Ok(json_str) = std::env::var("CONFIG") {
        match json_codec::from_str::<DemoConfig>(&json_str) {
            Ok(cfg) => return cfg,
            Err(e) => eprintln!("CONFIG env is not valid JSON: {}", e),
        }
    }

    match DemoConfig::find() {
        Ok(cfg) => cfg,
        Err(config_loader::ConfigError::FileNotFound(_)) => DemoConfig::default(),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            eprintln!("Using default values...");
            DemoConfig::default()
        }
    }
}

/// Builds the main logger; a file that cannot be opened degrades to stderr
fn initialize_logger(config: &DemoConfig) -> Logger {
    let log_level = config.logging.log_level.parse::<LogLevel>().unwrap_or_else(|e| {
        eprintln!("{}, using info", e);
        LogLevel::Info
    });

    if !config.logging.enable_file {
        return Logger::console(log_level).for_component("Main");
    }

    let log_path = PathBuf::from(&config.logging.log_file_path);
    match Logger::with_component(
        log_path,
        log_level,
        "Main".to_string(),
        config.logging.enable_console,
    ) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!(
                "Failed to create logger at {}: {}",
                config.logging.log_file_path, e
            );
            Logger::console(log_level).for_component("Main")
        }
    }
}

fn parse(text: &str, config: &DemoConfig, logger: &Logger) -> json_codec::Result<JsonValue> {
    Deserializer::new(text)
        .strict(config.strict)
        .with_logger(logger.clone())
        .deserialize()
}

fn print_tree(label: &str, value: &JsonValue) {
    println!("{}", inspect::summary(label, value));
    for line in inspect::examine(value) {
        println!("{}", line);
    }
}

/// Parses and prints one file, returning the process exit status
fn inspect_file(path: &str, config: &DemoConfig, logger: &Logger) -> i32 {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path, e);
            return 1;
        }
    };

    match parse(&text, config, logger) {
        Ok(value) => {
            print_tree(path, &value);
            let serializer = Serializer::new().escape_strings(config.escape_strings);
            println!("{}", serializer.serialize(&value));
            0
        }
        Err(e) => {
            eprintln!("{}: {}", path, e);
            2
        }
    }
}

fn run_samples(config: &DemoConfig, logger: &Logger) {
    for (label, text) in samples::DOCUMENTS {
        match parse(text, config, logger) {
            Ok(value) => print_tree(label, &value),
            Err(e) => eprintln!("Sample '{}' failed: {}", label, e),
        }
    }

    println!();
    let serializer = Serializer::new().escape_strings(config.escape_strings);
    for (label, json) in samples::serialize_natives(&serializer) {
        println!("{:<12} {}", label, json);
    }
}
