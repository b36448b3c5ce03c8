use clap::{Parser, ValueEnum};
/// Decode a JWT without verifying it
/// Prints the header, payload, and signature of a JSON Web Token.
/// The signature is never checked, so nothing printed here should be trusted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct JwtPeekArgs {
    /// The JWT token to decode.
    /// If not provided, it will be read from stdin.
    #[clap(name = "TOKEN")]
    pub jwt_string: Option<String>,

    /// Output format
    #[clap(long = "format", short = 'f', value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// No color output
    #[clap(long = "no-color", short = 'n', visible_alias = "no-fancy")]
    pub no_color: bool,

    /// Annotate the exp, iat, and nbf claims with readable dates
    #[clap(long = "dates", short = 'd')]
    pub dates: bool,

    /// Print dates in UTC instead of local time
    #[clap(long = "utc", short = 'u', requires = "dates")]
    pub utc: bool,

    /// Log diagnostics to stderr (-v for debug, -vv for trace)
    #[clap(long = "verbose", short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed plain-text report
    Pretty,
    /// A single JSON document with header, payload, and signature keys
    Json,
}
