use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use kira_boltz_bindings::app::App;
use kira_boltz_bindings::normalization::NodeNormHttpClient;
use kira_boltz_bindings::output::{ConsoleOutput, JsonOutput, OutputMode};
use kira_boltz_bindings::pubchem::PubchemHttpClient;
use kira_boltz_bindings::settings::Settings;
use kira_boltz_bindings::store::{DEFAULT_OUTPUT_DIR, OutputStore};
use kira_boltz_bindings::uniprot::UniprotHttpClient;

#[derive(Parser)]
#[command(name = "kira-boltz")]
#[command(about = "Build Boltz-2 affinity inputs from DrugBank and UniProt ids")]
#[command(version, author)]
struct Cli {
    #[arg(long, global = true)]
    non_interactive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Generate related commands")]
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    #[command(about = "Generate drug-protein YAML files from a list of DrugBank and UniProt IDs")]
    YamlFiles(YamlFilesArgs),
}

#[derive(Args)]
struct YamlFilesArgs {
    #[arg(value_parser = existing_file, help = "Path to the input YAML file containing IDs")]
    input_file: Utf8PathBuf,

    #[arg(
        short = 'o',
        long = "out",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory to save the generated YAML files"
    )]
    output_dir: Utf8PathBuf,

    #[arg(short, long, help = "Limit the number of pairs to process")]
    limit: Option<usize>,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn existing_file(value: &str) -> Result<Utf8PathBuf, String> {
    let path = Utf8PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Path '{value}' does not exist."));
    }
    if !path.is_file() {
        return Err(format!("File '{value}' is a directory."));
    }
    Ok(path)
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.non_interactive {
        OutputMode::NonInteractive
    } else {
        OutputMode::Interactive
    };

    match cli.command {
        Commands::Generate(args) => match args.command {
            GenerateCommand::YamlFiles(args) => run_yaml_files(args, output_mode),
        },
    }
}

fn run_yaml_files(args: YamlFilesArgs, output_mode: OutputMode) -> miette::Result<()> {
    let YamlFilesArgs {
        input_file,
        output_dir,
        limit,
    } = args;

    let settings = Settings::from_env()?;
    let normalizer = NodeNormHttpClient::new(&settings)?;
    let pubchem = PubchemHttpClient::new(&settings)?;
    let uniprot = UniprotHttpClient::new(&settings)?;
    let app = App::new(OutputStore::new(output_dir), normalizer, pubchem, uniprot);

    match output_mode {
        OutputMode::NonInteractive => {
            let result = app.generate_from_file(&input_file, limit, &JsonOutput)?;
            JsonOutput::print_generate(&result).into_diagnostic()?;
        }
        OutputMode::Interactive => {
            app.generate_from_file(&input_file, limit, &ConsoleOutput)?;
        }
    }
    Ok(())
}
