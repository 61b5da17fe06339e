use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter};

/// Sample used when neither a file nor text is given on the command line.
pub const SAMPLE_TEXT: &str = "The quick brown fox jumps over the lazy dog. \
    Huffman coding is a greedy algorithm that builds optimal prefix codes.";

/// Where the data to encode comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(String),
    Text(String),
    Sample,
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::File(name) => write!(f, "file {}", name),
            Input::Text(_) => write!(f, "command line text"),
            Input::Sample => write!(f, "built-in sample"),
        }
    }
}

/// All user settable options of the huffcode binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Source of the data to encode
    pub input: Input,
    /// Print the code table
    pub show_table: bool,
    /// Log level, 0 (off) to 5 (trace)
    pub verbosity: u8,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Sample,
            show_table: false,
            verbosity: 3,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build a Huffman code for some data, encode it and check that it decodes back"
)]
pub struct Args {
    /// Filename of file to encode
    #[clap()]
    filename: Option<String>,

    /// Encode this text instead of a file
    #[clap(short = 't', long = "text", conflicts_with = "filename")]
    text: Option<String>,

    /// Print the code table
    #[clap(long = "table")]
    table: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Map the -v setting onto a log level filter.
pub fn level_filter(v: u8) -> log::LevelFilter {
    match v {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Put command line information from CLAP into our internal structure.
pub fn huffopts_from(args: Args) -> HuffOpts {
    let input = match (args.filename, args.text) {
        (Some(name), _) => Input::File(name),
        (None, Some(text)) => Input::Text(text),
        (None, None) => Input::Sample,
    };
    HuffOpts {
        input,
        show_table: args.table,
        verbosity: args.v,
    }
}

/// Parse the process arguments, set the log level and report the settings.
pub fn huffopts_init() -> HuffOpts {
    let opts = huffopts_from(Args::parse());
    log::set_max_level(level_filter(opts.verbosity));

    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from the {}", opts.input);
    if opts.show_table {
        info!("Printing the code table")
    };
    opts
}
