use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::{Config, Overrides};
use recase::converter::STDIN_SOURCE;
use recase::{format_date, logging, tokenize, ConvertResult, Converter, Style};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text between camelCase, kebab-case and dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (reads stdin when neither inputs nor files are given)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (camel, kebab, dot)
    #[arg(short = 't', long = "to", value_name = "STYLE")]
    style: Option<Style>,

    /// Convert every line of these files
    #[arg(short, long = "file", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Treat each input as a JSON value; anything but a string is rejected
    #[arg(long)]
    json_input: bool,

    /// Leave out inputs that convert to an empty string
    #[arg(long)]
    skip_empty: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if inputs were rejected
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Reformat YYYY-MM-DD dates as DD/MM/YYYY
    Date {
        #[arg(required = true)]
        dates: Vec<String>,
    },
    /// Show the words an input splits into
    Words { input: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = Config::load(Overrides {
        style: cli.style,
        skip_empty: cli.skip_empty,
        json_input: cli.json_input,
    })?;
    let converter = Converter::new(&config);

    let mut result = converter.convert_args(&cli.inputs);

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }
        result.extend(converter.convert_file(file_path)?);
    }

    if cli.inputs.is_empty() && cli.files.is_empty() {
        log::debug!("reading inputs from stdin");
        result.extend(converter.convert_reader(io::stdin().lock(), STDIN_SOURCE)?);
    }

    report(&result, &converter, &cli.format, !cli.no_color);

    // Exit with appropriate code
    if result.failed_count > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn report(result: &ConvertResult, converter: &Converter, format: &OutputFormat, colored: bool) {
    log::info!(
        "converted {} of {} inputs to {}",
        result.converted_count,
        result.total(),
        converter.style()
    );
    output::print_results(result, converter.style(), colored, format);
    if *format == OutputFormat::Text {
        output::print_summary(result, colored);
    }
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Date { dates } => {
            for date in dates {
                println!("{}", format_date(&date)?);
            }
        }
        Commands::Words { input } => {
            output::print_words(&tokenize(&input));
        }
    }
    Ok(())
}
