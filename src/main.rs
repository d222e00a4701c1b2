use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use typofix::cli::output::OutputFormat;
use typofix::config::CliOverrides;
use typofix::logging::LogSettings;
use typofix::{logging, Config, Dictionary, DictionarySource, Walker};

#[derive(Parser, Debug)]
#[command(name = "typofix")]
#[command(version, about = "Find and fix known misspellings in source trees", long_about = None)]
#[command(override_usage = "typofix [OPTIONS] <DICT_FILENAME> [FILES]...")]
struct Cli {
    /// Dictionary of misspellings, one `wrong->right` per line ('-' reads stdin)
    #[arg(value_name = "DICT_FILENAME")]
    dictionary: Option<PathBuf>,

    /// Files to check (stdin when none are given)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Disable colors even when printing to terminal
    #[arg(short, long)]
    disable_colors: bool,

    /// Parse directories recursively
    #[arg(short, long, short_alias = 'R')]
    recursive: bool,

    /// Write changes in place if possible
    #[arg(short, long)]
    write_changes: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Ignore the global and local configuration files
    #[arg(long)]
    no_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "typofix", &mut io::stdout());
        return Ok(());
    }

    let Some(dictionary_arg) = cli.dictionary.as_deref() else {
        eprintln!("ERROR: you need to specify a dictionary!");
        Cli::command().print_help()?;
        std::process::exit(1);
    };

    let config = Config::load(&CliOverrides {
        disable_colors: cli.disable_colors,
        recursive: cli.recursive,
        write_changes: cli.write_changes,
        format: cli.format,
        no_config: cli.no_config,
    })?;

    logging::init(&LogSettings::new(cli.verbose, &config));

    let dictionary = Dictionary::load(&DictionarySource::from_arg(dictionary_arg))
        .context("Failed to load dictionary")?;

    let files = if cli.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        cli.files
    };

    let summary = Walker::new(&config, &dictionary).run(&files);
    tracing::debug!(
        files = summary.files_scanned,
        fixed = summary.files_fixed,
        misspellings = summary.misspellings,
        "done"
    );

    Ok(())
}
