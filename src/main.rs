//! Olelo - Main entrypoint.
//!
//! Command-line front end over a keyword file: it loads the dictionary, runs
//! one command against it and, for mutating commands, writes it back.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use olelo_lib::config::{self, ConfigLoader, LogConfig, OleloConfig, ENV_PREFIX};
use olelo_lib::data_structures::kilo_ranker::RankingError;
use olelo_lib::data_structures::lanai_trie::{InsertOutcome, LanaiTrie};
use olelo_lib::error::keywords::KeywordStoreError;
use olelo_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, OleloError, OleloResult,
    TracingErrorReporter,
};
use olelo_lib::keywords;
use olelo_lib::restore::{RestoreMode, TextRestorer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Olelo.
#[derive(Parser, Debug)]
#[clap(name = "olelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the keyword file (word,frequency per line)
    #[clap(short, long, value_parser)]
    keywords: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Add a keyword, or reinforce an existing one
    Add {
        /// Keyword to add
        word: String,

        /// Frequency to add
        #[clap(short, long, default_value_t = 1)]
        frequency: u64,
    },

    /// Delete a keyword
    Delete {
        /// Keyword to delete
        word: String,
    },

    /// Check whether a keyword exists
    Search {
        /// Keyword to look up
        word: String,
    },

    /// Overwrite the frequency of an existing keyword
    SetFrequency {
        /// Keyword to edit
        word: String,

        /// New frequency
        frequency: u64,
    },

    /// List every keyword matching a wildcard pattern
    Matches {
        /// Pattern, e.g. c*t
        pattern: String,

        /// Print the matches as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the best keyword matching a wildcard pattern
    Best {
        /// Pattern, e.g. c*t
        pattern: String,
    },

    /// Show every match for a pattern with a confidence score
    Confidence {
        /// Pattern, e.g. C*t
        pattern: String,
    },

    /// List keywords starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,
    },

    /// Display the trie structure
    Dump {
        /// Write the dump to a file instead of stdout
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,
    },

    /// Restore a damaged text file
    Restore {
        /// Text file containing damaged words
        input: PathBuf,

        /// Write the restored text to a file instead of stdout
        #[clap(short, long, value_parser)]
        output: Option<PathBuf>,

        /// Use the best match or list all matches
        #[clap(long, value_enum, default_value_t = RestoreMode::Best)]
        mode: RestoreMode,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> OleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(std::io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| OleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Load the configuration named on the command line, or the default one.
fn load_config(path: Option<&Path>) -> OleloResult<Arc<OleloConfig>> {
    match path {
        Some(path) => config::init_global_config(ConfigLoader::new(Some(path), ENV_PREFIX).load()?),
        None => config::init_default_config()?,
    }
    Ok(config::get_global_config())
}

/// Resolve the keyword file from the command line or configuration.
fn keyword_path(args: &Args, config: &OleloConfig) -> OleloResult<PathBuf> {
    args.keywords
        .clone()
        .or_else(|| config.keywords.path.clone())
        .ok_or_else(|| {
            OleloError::Custom(
                "No keyword file given; pass --keywords or set keywords.path".to_string(),
            )
        })
}

/// Build the dictionary from a keyword file.
///
/// With `allow_missing`, a file that does not exist yet yields an empty
/// dictionary; mutating commands create the file on their first save.
fn load_dictionary(path: &Path, config: &OleloConfig, allow_missing: bool) -> OleloResult<LanaiTrie> {
    let mut trie = LanaiTrie::with_config(config.trie.to_trie_config());
    match keywords::load_keywords(path, &mut trie) {
        Ok(_) => {}
        Err(KeywordStoreError::FileNotFound(_)) if allow_missing => {
            info!(path = %path.display(), "Keyword file does not exist yet, starting empty");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(trie)
}

fn write_output(path: &Path, contents: &str) -> OleloResult<()> {
    fs::write(path, contents).map_err(|source| {
        KeywordStoreError::Write {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Execute one command.
fn run(args: &Args, config: &OleloConfig) -> OleloResult<()> {
    match &args.command {
        Command::Add { word, frequency } => {
            let path = keyword_path(args, config)?;
            let mut trie = load_dictionary(&path, config, true)?;
            let word = word.trim().to_lowercase();

            match trie.insert_with_outcome(&word, *frequency) {
                Ok(InsertOutcome::Added) => println!("Keyword '{word}' added."),
                Ok(InsertOutcome::Reinforced { total }) => {
                    println!("Keyword '{word}' already present; frequency is now {total}.")
                }
                Err(reason) => {
                    println!("Keyword not added: {reason}.");
                    return Ok(());
                }
            }
            keywords::save_keywords(&path, &trie)?;
        }
        Command::Delete { word } => {
            let path = keyword_path(args, config)?;
            let mut trie = load_dictionary(&path, config, true)?;

            if trie.delete(word) {
                keywords::save_keywords(&path, &trie)?;
                println!("Keyword '{}' deleted.", word.trim().to_lowercase());
            } else {
                println!("Keyword '{}' not found.", word.trim().to_lowercase());
            }
        }
        Command::Search { word } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            let word = word.trim().to_lowercase();
            if trie.search(&word) {
                println!("Keyword '{word}' found.");
            } else {
                println!("Keyword '{word}' not found.");
            }
        }
        Command::SetFrequency { word, frequency } => {
            let path = keyword_path(args, config)?;
            let mut trie = load_dictionary(&path, config, true)?;
            let word = word.trim().to_lowercase();

            match trie.set_frequency(&word, *frequency) {
                Some(previous) => {
                    keywords::save_keywords(&path, &trie)?;
                    println!("Frequency for '{word}' updated from {previous} to {frequency}.");
                }
                None if *frequency == 0 => println!("Frequency must be greater than 0."),
                None => println!("Keyword '{word}' not found."),
            }
        }
        Command::Matches { pattern, json } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            let matches = trie.find_all_matches_with_frequency(pattern);

            if *json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!("No matches found.");
            } else {
                for entry in &matches {
                    println!("{} ({})", entry.word, entry.frequency);
                }
            }
        }
        Command::Best { pattern } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            match trie.find_best_match(pattern) {
                Some(word) => println!("Best match: {word}"),
                None => println!("No match found."),
            }
        }
        Command::Confidence { pattern } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            let restorer = TextRestorer::from_config(&config.restore);
            let precision = config.restore.confidence_precision;

            match restorer.confidence_report(pattern, &trie) {
                Ok(scored) => {
                    println!("Restoring: {pattern}");
                    for entry in &scored {
                        println!(" - {} ({:.precision$}%)", entry.word, entry.confidence);
                    }
                }
                Err(RankingError::EmptyMatches) => println!("No matches found for '{pattern}'."),
                Err(e) => return Err(e.into()),
            }
        }
        Command::Complete { prefix } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            for entry in trie.words_with_prefix(prefix) {
                println!("{} ({})", entry.word, entry.frequency);
            }
        }
        Command::Dump { output } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            match output {
                Some(output) => {
                    keywords::save_tree_dump(output, &trie)?;
                    println!("Trie written to '{}'.", output.display());
                }
                None => println!("{}", trie.tree_dump()),
            }
        }
        Command::Restore {
            input,
            output,
            mode,
        } => {
            let trie = load_dictionary(&keyword_path(args, config)?, config, false)?;
            let restorer = TextRestorer::from_config(&config.restore);
            let restored = restorer.restore_file(input, &trie, *mode)?;

            match output {
                Some(output) => {
                    write_output(output, &restored)?;
                    println!("Restored text saved to '{}'.", output.display());
                }
                None => print!("{restored}"),
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("Configuration is valid.");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = OleloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(OleloError::Io)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| OleloError::Custom(format!("Failed to serialize config: {e}")))?;
            fs::write(output, toml).map_err(OleloError::Io)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(1);
    }

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Err(e) = run(&args, &config) {
        eprintln!("Error: {e}");
        get_error_reporting()
            .report(ErrorContext::new(e, "cli").with_details(format!("{:?}", args.command)));
        process::exit(1);
    }
}
