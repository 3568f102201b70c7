use anyhow::{Context, Result};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::fs;
use std::io;
use std::path::PathBuf;
use textanalyzer::cli::output::{self, OutputFormat, SourceReport};
use textanalyzer::config::Overrides;
use textanalyzer::{words, Config, TextAnalyzer};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "textanalyzer")]
#[command(version, about = "Spelling, grammar, punctuation and style checks for Russian text", long_about = None)]
struct Cli {
    /// Language of the analysed text (only "ru" is supported)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Word list merged into the built-in dictionary
    #[arg(long, global = true, value_name = "PATH")]
    word_list: Option<PathBuf>,

    /// Personal dictionary file
    #[arg(long, global = true, value_name = "PATH")]
    personal_dict: Option<PathBuf>,

    /// Number of analysis worker threads
    #[arg(long, global = true, value_name = "N")]
    pool_size: Option<usize>,

    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyse files or inline text
    Analyze(AnalyzeArgs),
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Files to analyse
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Text to analyse (may be repeated)
    #[arg(short, long)]
    text: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if issues are found
    #[arg(long)]
    no_fail: bool,
}

#[derive(Subcommand, Debug)]
enum DictCommands {
    /// Show the number of known words
    Size,
    /// Add words to the personal dictionary
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Check a single word and show suggestions
    Check { word: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "textanalyzer", &mut io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        anyhow::bail!("No command given. Use --help for usage information.");
    };

    let config = Config::load(Overrides {
        language: cli.language,
        word_list: cli.word_list,
        personal_dictionary: cli.personal_dict,
        pool_size: cli.pool_size,
    })?;
    debug!(?config, "configuration loaded");

    match command {
        Commands::Analyze(args) => run_analyze(args, &config),
        Commands::Dict { action } => run_dict(action, &config),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("textanalyzer={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_analyze(args: AnalyzeArgs, config: &Config) -> Result<()> {
    if args.files.is_empty() && args.text.is_empty() {
        anyhow::bail!("No input given. Pass FILES or --text.");
    }

    let mut inputs = Vec::new();
    for file_path in &args.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }
        let content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
        inputs.push((file_path.display().to_string(), content));
    }
    for (i, text) in args.text.iter().enumerate() {
        inputs.push((format!("<text {}>", i + 1), text.clone()));
    }

    let analyzer = TextAnalyzer::from_config(config)?;

    let mut reports = Vec::with_capacity(inputs.len());
    for (source, text) in inputs {
        let report = analyzer
            .analyze(&text, &config.language)
            .with_context(|| format!("Failed to analyse {}", source))?;
        reports.push(SourceReport { source, report });
    }
    analyzer.shutdown();

    output::print_reports(&reports, !args.no_color, args.format)?;

    // Exit with appropriate code
    if output::total_issues(&reports) > 0 && !args.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn run_dict(action: DictCommands, config: &Config) -> Result<()> {
    let dictionary = words::load_dictionary(config);

    match action {
        DictCommands::Size => {
            println!("{}", dictionary.size());
        }
        DictCommands::Add { words: new_words } => {
            let path = config
                .personal_dictionary
                .as_deref()
                .context("No personal dictionary location available; pass --personal-dict")?;

            for word in &new_words {
                if dictionary.add_word(word) {
                    words::append_personal_word(path, word)?;
                    println!("Added: {}", word.trim().to_lowercase());
                } else {
                    println!("Already known: {}", word.trim().to_lowercase());
                }
            }
        }
        DictCommands::Check { word } => {
            let valid = dictionary.is_valid(&word);
            let suggestions = if valid {
                Vec::new()
            } else {
                dictionary.suggest(&word)
            };
            output::print_word_check(&word, valid, &suggestions, true);
        }
    }
    Ok(())
}
