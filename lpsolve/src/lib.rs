use clap::Parser;
use lps_core::{
    models::{FitRequest, FitResponse, OptimizeRequest, OptimizeResponse},
    ports::Fitter as _,
};
use lps_solver::{OlsFitter, Settings};

mod io;
pub use io::*;

mod commands;
pub use commands::*;

// The top-level arguments -- presently just which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Fit { io } => {
                let input = io.read()?;
                let request = serde_json::from_reader::<_, FitRequest>(input)?;
                let regression = OlsFitter.fit(&request.data)?;
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &FitResponse::from(regression))?;
            }
            Commands::Optimize { io, lib, precision } => {
                let input = io.read()?;
                let request = serde_json::from_reader::<_, OptimizeRequest>(input)?;
                let (demand, cost) = request.validate()?;
                let outcome = lib.optimize(&demand, &cost, Settings { precision })?;
                let output = io.write()?;
                serde_json::to_writer_pretty(output, &OptimizeResponse::from(outcome))?;
            }
        }

        Ok(())
    }
}
