//! CLI definition using clap

use crate::output::OutputFormat;
use clap::Parser;

const EXAMPLES: &str = "\
Examples:
  # Scale up a replicaset named 'foo' by 10%.
  kubectl scale-pct --pct=10 rs/foo

  # Scale down a replicaset named 'foo' by 10%.
  kubectl scale-pct --pct=-10 rs/foo

  # Halve every deployment in the current namespace.
  kubectl scale-pct --pct=-50 --all deployments";

#[derive(Parser)]
#[command(
    name = "kubectl-scale_pct",
    version,
    about = "Scale Kubernetes workloads by a percentage of their current replicas",
    long_about = None,
    after_help = EXAMPLES,
)]
pub struct Cli {
    /// Target resource: kind/name, a bare name (kind defaults to
    /// deployment), or a bare kind together with --all
    pub target: Vec<String>,

    /// Percentage delta in [-100, 100]; negative values scale down
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "completions"
    )]
    pub pct: Option<i32>,

    /// Scale every matching resource of the kind in the namespace
    #[arg(long)]
    pub all: bool,

    /// Filter --all by labels (key=value)
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Kubernetes context to use
    #[arg(long, env = "SCALE_PCT_CONTEXT")]
    pub context: Option<String>,

    /// Namespace to use
    #[arg(short = 'n', long, env = "SCALE_PCT_NAMESPACE")]
    pub namespace: Option<String>,

    /// Output format (defaults to the config file setting, then name)
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum)]
    pub completions: Option<clap_complete::Shell>,
}
