//! Converts every MHTML archive in a directory to a Markdown file beside it.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mhtml2md::{batch, Options, Preset, WordJoinPolicy};

#[derive(Parser, Debug)]
#[command(name = "mhtml2md", version, about = "Convert saved MHTML pages to cleaned Markdown")]
struct Cli {
    /// Directory holding the archives to convert
    directory: Option<PathBuf>,

    /// Pipeline variant
    #[arg(long, value_enum, default_value_t = PresetArg::Standard)]
    preset: PresetArg,

    /// Override the preset's word-join policy
    #[arg(long, value_enum)]
    word_join: Option<WordJoinArg>,

    /// Extension of the input archives
    #[arg(long)]
    extension: Option<String>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Canonical cleanup, words kept apart
    Standard,
    /// Canonical cleanup with short-token merging and word rejoin
    Classic,
    /// Extended selector list and line-oriented cleanup
    SelectorList,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Standard => Self::Standard,
            PresetArg::Classic => Self::Classic,
            PresetArg::SelectorList => Self::SelectorList,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum WordJoinArg {
    /// One space between words, no rejoin
    KeepSeparated,
    /// Glue tokens of two characters or fewer, then rejoin split words
    MergeShort,
}

impl From<WordJoinArg> for WordJoinPolicy {
    fn from(arg: WordJoinArg) -> Self {
        match arg {
            WordJoinArg::KeepSeparated => Self::KeepSeparated,
            WordJoinArg::MergeShort => Self::MergeShortTokens { max_len: 2 },
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn options_from(cli: &Cli) -> Options {
    let mut options = Options::preset(cli.preset.into());
    if let Some(word_join) = cli.word_join {
        options.word_join = word_join.into();
    }
    if let Some(extension) = &cli.extension {
        options.input_extension = extension.trim_start_matches('.').to_string();
    }
    options
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(directory) = cli.directory.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let options = options_from(&cli);
    let mut stdout = io::stdout().lock();
    match batch::convert_directory(directory, &options, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        // Invalid directory, or the directory could not be listed.
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
