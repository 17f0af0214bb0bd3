mod format;
mod matching;
mod profiles;
mod roi;
mod tuning;

use std::path::PathBuf;

use alliance_core::ProfileKind;
use alliance_matcher::Dimension;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "alliance")]
#[command(about = "Partner alignment scoring and partnership ROI valuation")]
struct Cli {
    /// Profile collection (YAML or JSON); overrides ALLIANCE_PROFILES_PATH
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    /// Tuning file for weights and valuation tables; overrides ALLIANCE_TUNING_PATH
    #[arg(long, global = true)]
    tuning: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Brand,
    Organization,
}

impl From<KindArg> for ProfileKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Brand => ProfileKind::Brand,
            KindArg::Organization => ProfileKind::Organization,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List profiles in the collection
    Profiles {
        /// Only show brands or organizations
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Rank partner candidates against a profile
    Match {
        /// Id of the profile to find partners for
        #[arg(long)]
        profile: String,
        /// Keep only candidates whose category contains this tag (repeatable; `all` disables)
        #[arg(long = "industry")]
        industries: Vec<String>,
        /// Dimension to sort by first: values, audience, goals, or industry
        #[arg(long, default_value = "values", value_parser = parse_dimension)]
        priority: Dimension,
        /// Minimum total alignment score (defaults to ALLIANCE_MIN_SCORE)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Value a partnership from a YAML or JSON input file
    Roi {
        /// Partnership input file
        #[arg(long)]
        input: PathBuf,
        /// Print the archival record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_dimension(raw: &str) -> Result<Dimension, alliance_matcher::MatchError> {
    raw.parse()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = alliance_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let profiles_path = cli.profiles.unwrap_or_else(|| config.profiles_path.clone());
    let tuning_path = cli.tuning.or_else(|| config.tuning_path.clone());
    tracing::debug!(env = %config.env, profiles = %profiles_path.display(), "starting");

    match cli.command {
        Some(Commands::Profiles { kind }) => {
            profiles::run_profiles_list(&profiles_path, kind.map(ProfileKind::from))?;
        }
        Some(Commands::Match {
            profile,
            industries,
            priority,
            min_score,
            json,
        }) => {
            let tuning = tuning::load_tuning(tuning_path.as_deref())?;
            let options = matching::MatchOptions {
                industries: (!industries.is_empty()).then_some(industries),
                priority,
                min_score: min_score.unwrap_or(config.min_score),
                json,
            };
            matching::run_match(&profiles_path, tuning.alignment, &profile, options)?;
        }
        Some(Commands::Roi { input, json }) => {
            let tuning = tuning::load_tuning(tuning_path.as_deref())?;
            roi::run_roi(&input, tuning.valuation, json)?;
        }
        None => println!("no command given; run `alliance --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
