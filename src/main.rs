use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use paramgen::generator;

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Expand a param set manifest and print the parameter records as YAML.
    Generate { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Generate { path } => {
            let param_set = paramgen::load_param_set(&path)?;

            let mut params = Vec::new();
            for spec in &param_set.spec.generators {
                let generator = generator::generator_for(spec)
                    .context("no supported generator kind is configured")?;
                let generated = generator
                    .generate_params(spec, &param_set, None)
                    .await
                    .context("generating params")?;
                params.extend(generated);
            }

            serde_yaml::to_writer(std::io::stdout(), &params)?;
        }
    }

    Ok(())
}
