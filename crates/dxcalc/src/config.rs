//! Application configuration from CLI flags and environment.

use clap::{ArgGroup, Parser};

use dxcalc_cli::output::{DisplayOptions, ValueStyle};
use dxcalc_core::constants::{
    DEFAULT_COUNTS, DEFAULT_DECIMALS, DEFAULT_PREVALENCE, DEFAULT_SENSITIVITY,
    DEFAULT_SPECIFICITY, DEFAULT_TOTAL_PATIENTS,
};
use dxcalc_core::{CountSet, DiagnosticInput, DxError, Options, RateSet, RoundingMode};

/// DxCalc: diagnostic test calculator.
///
/// Enter a 2x2 contingency table (--tp/--fp/--fn/--tn) or describe a
/// population (--total/--prevalence/--sensitivity/--specificity) and get
/// sensitivity, specificity, predictive values, likelihood ratios and
/// accuracy.
#[derive(Parser, Debug)]
#[command(name = "dxcalc", version, about)]
#[command(group(
    ArgGroup::new("counts_input")
        .multiple(true)
        .args(["counts", "tp", "fp", "fn_", "tn"])
))]
#[command(group(
    ArgGroup::new("rates_input")
        .multiple(true)
        .args(["total", "prevalence", "sensitivity", "specificity"])
        .conflicts_with("counts_input")
))]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Use count mode with the default table (85/15/10/90).
    #[arg(long)]
    pub counts: bool,

    /// True positives.
    #[arg(long)]
    pub tp: Option<u64>,

    /// False positives.
    #[arg(long)]
    pub fp: Option<u64>,

    /// False negatives.
    #[arg(long = "fn")]
    pub fn_: Option<u64>,

    /// True negatives.
    #[arg(long)]
    pub tn: Option<u64>,

    /// Total patients (rate mode).
    #[arg(long)]
    pub total: Option<u64>,

    /// Prevalence in percent (rate mode).
    #[arg(long)]
    pub prevalence: Option<f64>,

    /// Sensitivity in percent (rate mode).
    #[arg(long)]
    pub sensitivity: Option<f64>,

    /// Specificity in percent (rate mode).
    #[arg(long)]
    pub specificity: Option<f64>,

    /// Output format: table, bars, aid, json, a comma list, or all.
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Rounding for rate-to-count conversion: half-even or half-up.
    #[arg(long, default_value = "half-even", env = "DXCALC_ROUNDING")]
    pub rounding: String,

    /// Decimals for displayed proportions.
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    pub decimals: u32,

    /// Show proportions as percentages.
    #[arg(long, conflicts_with = "ratio")]
    pub percent: bool,

    /// Show proportions as ratios (the default in count mode).
    #[arg(long)]
    pub ratio: bool,

    /// Verbose output.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (tab-separated values only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

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

    /// Whether any count-mode flag was given.
    #[must_use]
    pub fn is_count_mode(&self) -> bool {
        self.counts
            || self.tp.is_some()
            || self.fp.is_some()
            || self.fn_.is_some()
            || self.tn.is_some()
    }

    /// Build the diagnostic input, filling missing values with defaults.
    pub fn input(&self) -> Result<DiagnosticInput, DxError> {
        if self.is_count_mode() {
            let (tp, fp, fn_, tn) = DEFAULT_COUNTS;
            let counts = CountSet::new(
                self.tp.unwrap_or(tp),
                self.fp.unwrap_or(fp),
                self.fn_.unwrap_or(fn_),
                self.tn.unwrap_or(tn),
            );
            return Ok(DiagnosticInput::Counts(counts));
        }

        let rates = RateSet::new(
            self.total.unwrap_or(DEFAULT_TOTAL_PATIENTS),
            self.prevalence.unwrap_or(DEFAULT_PREVALENCE),
            self.sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
            self.specificity.unwrap_or(DEFAULT_SPECIFICITY),
        )?;
        Ok(DiagnosticInput::Rates(rates))
    }

    /// Calculation options.
    pub fn options(&self) -> Result<Options, DxError> {
        let rounding: RoundingMode = self.rounding.parse()?;
        Ok(Options {
            rounding,
            decimals: self.decimals,
        }
        .normalize())
    }

    /// Display options for terminal presenters.
    ///
    /// Rate mode shows percentages unless `--ratio` is given.
    #[must_use]
    pub fn display_options(&self, opts: &Options) -> DisplayOptions {
        let percent = self.percent || (!self.is_count_mode() && !self.ratio);
        DisplayOptions {
            style: if percent {
                ValueStyle::Percent
            } else {
                ValueStyle::Ratio
            },
            decimals: opts.decimals,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("dxcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_consistent() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn defaults_to_rate_mode() {
        let config = parse(&[]);
        assert!(!config.is_count_mode());
        let input = config.input().unwrap();
        let DiagnosticInput::Rates(rates) = input else {
            panic!("expected rates");
        };
        assert_eq!(rates.total_patients(), 1000);
        assert_eq!(
            config.display_options(&config.options().unwrap()).style,
            ValueStyle::Percent
        );
    }

    #[test]
    fn count_flags_select_count_mode() {
        let config = parse(&["--tp", "1", "--fn", "3"]);
        assert_eq!(
            config.input().unwrap(),
            DiagnosticInput::Counts(CountSet::new(1, 15, 3, 90))
        );
        assert_eq!(
            config.display_options(&config.options().unwrap()).style,
            ValueStyle::Ratio
        );
    }

    #[test]
    fn counts_flag_uses_defaults() {
        let config = parse(&["--counts"]);
        assert_eq!(
            config.input().unwrap(),
            DiagnosticInput::Counts(CountSet::new(85, 15, 10, 90))
        );
    }

    #[test]
    fn input_groups_conflict() {
        let result = AppConfig::try_parse_from(["dxcalc", "--tp", "1", "--total", "100"]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_rates_are_rejected() {
        let config = parse(&["--prevalence", "101"]);
        assert!(matches!(config.input(), Err(DxError::InvalidInput(_))));
        let config = parse(&["--total", "0"]);
        assert!(config.input().is_err());
    }

    #[test]
    fn rounding_and_decimals() {
        let config = parse(&["--rounding", "half-up", "--decimals", "9"]);
        let opts = config.options().unwrap();
        assert_eq!(opts.rounding, RoundingMode::HalfUp);
        assert_eq!(opts.decimals, dxcalc_core::MAX_DECIMALS);

        let config = parse(&["--rounding", "sideways"]);
        assert!(matches!(config.options(), Err(DxError::Config(_))));
    }

    #[test]
    fn ratio_overrides_rate_default() {
        let config = parse(&["--ratio"]);
        assert_eq!(
            config.display_options(&config.options().unwrap()).style,
            ValueStyle::Ratio
        );
        let config = parse(&["--counts", "--percent"]);
        assert_eq!(
            config.display_options(&config.options().unwrap()).style,
            ValueStyle::Percent
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(AppConfig::try_parse_from(["dxcalc", "-q", "-v"]).is_err());
    }
}
