use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use numrange::{
    CurrencyDisplay, Decimal, DecimalOptions, DecimalPlan, Error, IdentityFallback, Notation,
    NumberRangeFormatter, RangeCollapse, RangeSettings, SignDisplay, UnitDisplay,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StyleArg {
    Decimal,
    Percent,
    Currency,
    Unit,
}

#[derive(Parser)]
#[command(name = "numrange", version, about = "Format a localized number range")]
struct Cli {
    /// Start of the range
    #[arg(allow_hyphen_values = true)]
    first: String,

    /// End of the range
    #[arg(allow_hyphen_values = true)]
    second: String,

    /// BCP 47 locale, e.g. en-US or ar-EG-u-nu-arab
    #[arg(short, long, default_value = "en")]
    locale: String,

    #[arg(long, value_enum, default_value_t)]
    collapse: RangeCollapse,

    #[arg(long, value_enum, default_value_t)]
    identity_fallback: IdentityFallback,

    #[arg(long, value_enum, default_value_t = StyleArg::Decimal)]
    style: StyleArg,

    /// ISO 4217 code, required with --style currency
    #[arg(long)]
    currency: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    currency_display: CurrencyDisplay,

    /// Unit identifier such as meter or kilogram, required with --style unit
    #[arg(long)]
    unit: Option<String>,

    #[arg(long, value_enum, default_value_t)]
    unit_display: UnitDisplay,

    #[arg(long, value_enum, default_value_t)]
    sign_display: SignDisplay,

    /// Minimum and maximum fraction digits
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    fraction_digits: Option<Vec<u8>>,

    #[arg(long, value_enum, default_value_t)]
    notation: Notation,

    /// Treat the inputs as equal before rounding even if they are written differently
    #[arg(long)]
    equal_before_rounding: bool,

    /// Print one line per output part instead of the formatted text
    #[arg(long)]
    parts: bool,
}

fn parse_quantity(s: &str) -> Result<Decimal, Error> {
    s.parse().map_err(|_| Error::Quantity(s.to_string()))
}

fn decimal_options(cli: &Cli) -> Result<DecimalOptions, String> {
    let mut options = match cli.style {
        StyleArg::Decimal => DecimalOptions::default(),
        StyleArg::Percent => DecimalOptions::percent(),
        StyleArg::Currency => {
            let code = cli.currency.as_deref().ok_or("--style currency needs --currency")?;
            DecimalOptions::currency(code, cli.currency_display)
        }
        StyleArg::Unit => {
            let unit = cli.unit.as_deref().ok_or("--style unit needs --unit")?;
            DecimalOptions::unit(unit, cli.unit_display)
        }
    };
    if let Some(digits) = &cli.fraction_digits
        && let [min, max] = digits[..]
    {
        options = options.with_fraction_digits(min, max);
    }
    Ok(options
        .with_sign_display(cli.sign_display)
        .with_notation(cli.notation))
}

fn run(cli: &Cli) -> Result<(), String> {
    let first = parse_quantity(&cli.first).map_err(|e| e.to_string())?;
    let second = parse_quantity(&cli.second).map_err(|e| e.to_string())?;

    let options = decimal_options(cli)?;
    let plan = DecimalPlan::try_new(&cli.locale, options).map_err(|e| e.to_string())?;
    let settings = RangeSettings::new(cli.locale.as_str())
        .collapse(cli.collapse)
        .identity_fallback(cli.identity_fallback)
        .formatter(Arc::new(plan));
    let formatter = NumberRangeFormatter::try_new(settings).map_err(|e| e.to_string())?;

    let equal = cli.equal_before_rounding || first == second;
    let result = formatter.format(&first, &second, equal);
    if cli.parts {
        for part in result.parts() {
            println!("{}\t{}\t{:?}", part.source.as_str(), part.kind(), part.value);
        }
    } else {
        println!("{result}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
