//! Application configuration from CLI flags and environment.

use clap::Parser;

use combcalc_core::{Arguments, CombError, FunctionFamily, Options};
use combcalc_orchestration::Request;

/// CombCalc-rs: exact combinatorial special functions.
///
/// Families: binomial, multinomial, catalan, stirling1, stirling2, bell,
/// lah, narayana, delannoy, motzkin, schroder, eulerian.
#[derive(Parser, Debug)]
#[command(name = "combcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Function family to evaluate (see --list).
    #[arg(required_unless_present_any = ["list", "completion"])]
    pub family: Option<String>,

    /// First argument n (m for Delannoy).
    #[arg(short, long, env = "COMBCALC_N", allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Second argument k for two-argument families.
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "row")]
    pub k: Option<i64>,

    /// Comma-separated parts for multinomial, e.g. 1,2,3.
    #[arg(
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with = "row"
    )]
    pub parts: Vec<i64>,

    /// Evaluator to use: tabulated, explicit, or all.
    #[arg(long, default_value = "tabulated")]
    pub evaluator: String,

    /// Print the whole row k = 0..=n (or terms 0..=n) instead of one value.
    #[arg(long)]
    pub row: bool,

    /// Ceiling on arguments (0 = unlimited).
    #[arg(long, default_value = "0", env = "COMBCALC_MAX_N")]
    pub max_n: u64,

    /// Verbose output (no truncation of long values).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a machine-readable JSON report.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// List the supported families and exit.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::default().with_max_n(self.max_n)
    }

    /// Resolve the family name.
    pub fn family(&self) -> Result<FunctionFamily, CombError> {
        self.family
            .as_deref()
            .ok_or_else(|| CombError::Config("no function family given".into()))?
            .parse()
    }

    /// Build the evaluation request from the flags.
    pub fn request(&self) -> Result<Request, CombError> {
        let family = self.family()?;
        let n = self
            .n
            .ok_or_else(|| CombError::Config(format!("{family} requires -n")))?;

        if self.row {
            return Ok(Request::Row { family, n });
        }

        let args = Arguments {
            n,
            k: self.k,
            parts: self.parts.clone(),
        };
        Ok(Request::Point { family, args })
    }
}
