use super::IOArgs;
use clap::Subcommand;

mod optimize;
pub use optimize::OptimizerLib;

#[derive(Subcommand)]
pub enum Commands {
    /// Fit a linear demand curve to price/quantity samples
    Fit {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Find the profit-maximizing price and report its derivation
    Optimize {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific optimizer
        #[arg(short, long, value_enum, default_value_t = OptimizerLib::ClosedForm)]
        lib: OptimizerLib,

        /// Decimals used when rendering the derivation
        #[arg(short, long, default_value_t = lps_solver::DEFAULT_PRECISION)]
        precision: usize,
    },
}
