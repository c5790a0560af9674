//! # neonstock
//!
//! Entry point. The actual work lives in the library so it can be tested.

use clap::Parser as _;
use neonstock_cli::{init_tracing, AppConfig, BaseArgs, CliError, Renderer};
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = BaseArgs::parse();
    let json = args.json;

    let result = match AppConfig::load(args.config.clone()) {
        Ok(config) => {
            let renderer = Renderer::new(json, config.currency_symbol.clone());
            args.evaluate(&config)
                .await
                .map(|output| (renderer, output))
        }
        Err(err) => Err(CliError::from(err)),
    };

    match result {
        Ok((renderer, output)) => {
            let mut stdout = std::io::stdout().lock();
            renderer.render(&output, &mut stdout)?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            Renderer::new(json, "$").render_error(&err, &mut std::io::stderr().lock())?;
            Ok(ExitCode::FAILURE)
        }
    }
}
