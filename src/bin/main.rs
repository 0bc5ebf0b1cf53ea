use airfoil_dat::convert::{load_airfoil, output_paths, write_airfoil, OutputFormat};
use airfoil_dat::Error;
use clap::Parser;
use log::{error, LevelFilter};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert an airfoil coordinate (dat) file into a closed outline drawing
#[derive(Parser)]
#[command(name = "airfoil-dat", version)]
struct Cli {
    /// Input dat file
    #[arg(short, long, default_value = "test.dat")]
    input: PathBuf,

    /// Output file. When several formats are requested its extension is replaced by each
    /// format's suffix; when omitted the suffix is appended to the input path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scale the outline so its chord has this length, in output units. Zero or negative
    /// values leave the coordinates untouched.
    #[arg(short, long, allow_negative_numbers = true)]
    chord: Option<f64>,

    /// Output format, may be repeated
    #[arg(short, long, value_enum, default_values_t = [OutputFormat::Dxf])]
    format: Vec<OutputFormat>,

    /// More logging, may be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let airfoil = load_airfoil(&cli.input, cli.chord)?;

    for (format, path) in output_paths(&cli.input, cli.output.as_deref(), &cli.format) {
        write_airfoil(&airfoil, format, &path)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = e.source();
            while let Some(inner) = source {
                message.push_str(": ");
                message.push_str(&inner.to_string());
                source = inner.source();
            }
            error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
