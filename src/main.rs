use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as ClapParser;

use markdown2html::convert_lines;
use markdown2html::error::CliError;

#[derive(ClapParser)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// markdown file to convert
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,
    /// html file to write, created or overwritten
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,
}

fn init_logger(filter_level: log::LevelFilter) -> anyhow::Result<()> {
    simplelog::TermLogger::init(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logger(log::LevelFilter::Warn)?;

    if !cli.input.is_file() {
        return Err(CliError::Missing(cli.input).into());
    }

    let text = fs::read_to_string(&cli.input).map_err(|source| CliError::Read {
        path: cli.input.clone(),
        source,
    })?;
    let html = convert_lines(text.lines());

    write_lines(&cli.output, &html).map_err(|source| CliError::Write {
        path: cli.output.clone(),
        source,
    })?;
    log::info!(
        "wrote {} line(s) from {} to {}",
        html.len(),
        cli.input.display(),
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{}", CliError::Usage);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
