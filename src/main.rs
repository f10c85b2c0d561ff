//! osisgen - NeÜ HTML to OSIS converter

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};

use osisgen::bible::{Canon, KjvCanon, NamingScheme, NeueCanon, OsisNaming, Usfm3Naming};
use osisgen::convert::{Converter, WorkInfo};
use osisgen::import::HtmlDirectory;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CanonChoice {
    /// German NeÜ versification
    Neue,
    /// King James versification
    Kjv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NamingChoice {
    /// OSIS book identifiers (Gen, Matt, ...)
    Osis,
    /// USFM 3 book codes (GEN, MAT, ...)
    Usfm,
}

#[derive(Parser)]
#[command(name = "osisgen")]
#[command(version, about = "Convert NeÜ Bible HTML into OSIS XML", long_about = None)]
#[command(after_help = "EXAMPLES:
    osisgen neue/ neue.osis.xml               Convert with the NeÜ canon
    osisgen --canon kjv neue/ neue.osis.xml   Check against KJV verse counts")]
struct Cli {
    /// Directory holding index.html and the book files
    #[arg(value_name = "INPUT_DIR")]
    input: PathBuf,

    /// OSIS file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Canon used to validate and expand references
    #[arg(long, value_enum, default_value_t = CanonChoice::Neue)]
    canon: CanonChoice,

    /// Book naming scheme for identifiers
    #[arg(long, value_enum, default_value_t = NamingChoice::Osis)]
    naming: NamingChoice,

    /// Work identifier written to the header
    #[arg(long)]
    work_name: Option<String>,

    /// Work title written to the header
    #[arg(long)]
    title: Option<String>,

    /// Language code written to the header
    #[arg(long)]
    language: Option<String>,

    /// Reference system written to the header
    #[arg(long)]
    ref_system: Option<String>,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every parsed file and footnote index
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::Warn
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match convert(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn convert(cli: &Cli) -> osisgen::Result<()> {
    let canon: Box<dyn Canon> = match cli.canon {
        CanonChoice::Neue => Box::new(NeueCanon::new()),
        CanonChoice::Kjv => Box::new(KjvCanon::new()),
    };
    let naming: &dyn NamingScheme = match cli.naming {
        NamingChoice::Osis => &OsisNaming,
        NamingChoice::Usfm => &Usfm3Naming,
    };

    let mut work = WorkInfo::default();
    if let Some(name) = &cli.work_name {
        work = work.with_name(name);
    }
    if let Some(title) = &cli.title {
        work = work.with_title(title);
    }
    if let Some(language) = &cli.language {
        work = work.with_language(language);
    }
    if let Some(ref_system) = &cli.ref_system {
        work = work.with_ref_system(ref_system);
    }

    let source = HtmlDirectory::new(&cli.input);
    let sink = BufWriter::new(File::create(&cli.output)?);
    let converter = Converter::new(&*canon, naming).with_work(work);
    let (_, report) = converter.convert(&source, sink)?;

    info!(
        "Wrote {} with {} book(s)",
        cli.output.display(),
        report.books.len()
    );
    if !report.diagnostics.is_empty() {
        info!(
            "{} warning(s), {} unused footnote(s)",
            report.diagnostics.len(),
            report.unused_footnotes()
        );
    }
    Ok(())
}
