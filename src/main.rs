// SPDX-License-Identifier: MPL-2.0
use mipmap_forge::cli::{self, Command};
use mipmap_forge::{IconPipeline, Progress};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> mipmap_forge::error::Result<()> {
    let flags = match cli::parse(pico_args::Arguments::from_env())? {
        Command::Help => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Command::Version => {
            println!("mipmap-forge {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Generate(flags) => flags,
    };

    let pipeline = IconPipeline::new(flags.resolve()?)?;
    pipeline.run_with_progress(|event| match event {
        Progress::SourceLoaded {
            path,
            width,
            height,
        } => println!("Loaded source image: {} ({width}x{height})", path.display()),
        Progress::AssetWritten(asset) => println!(
            "Created: {} ({}x{})",
            asset.path.display(),
            asset.size,
            asset.size
        ),
    })?;

    println!("\nDone! Icon generation complete.");
    Ok(())
}
