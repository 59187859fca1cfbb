// SPDX-License-Identifier: MPL-2.0
//! Command-line parsing.
//!
//! Values resolve in this order: CLI flag, then the config file (`--config`
//! or the per-user file from [`config::default_config_path`]), then the
//! built-in defaults.

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::media::OutputFormat;
use std::path::PathBuf;

pub const HELP: &str = "\
mipmap-forge: generate Android launcher icons from one source image

USAGE:
  mipmap-forge [OPTIONS]

OPTIONS:
  --config <FILE>     Load settings from a TOML file
  --source <FILE>     Source image (default: app/src/main/ic_launcher-playstore.png)
  --res-dir <DIR>     Resource directory receiving mipmap-* folders (default: app/src/main/res)
  --quality <0-100>   Lossy encoder quality (default: 95)
  --format <FORMAT>   Output format: webp or png (default: webp)
  -h, --help          Print this help
  -V, --version       Print version

Set RUST_LOG=debug for per-density geometry details.
";

/// What the user asked for.
#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Version,
    Generate(Flags),
}

/// Overrides collected from the command line.
#[derive(Debug, Default, PartialEq)]
pub struct Flags {
    pub config_path: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub res_dir: Option<PathBuf>,
    pub quality: Option<u8>,
    pub format: Option<OutputFormat>,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns [`Error::Config`] for malformed values or unknown arguments.
pub fn parse(mut args: pico_args::Arguments) -> Result<Command> {
    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }
    if args.contains(["-V", "--version"]) {
        return Ok(Command::Version);
    }

    let flags = Flags {
        config_path: args.opt_value_from_str("--config")?,
        source: args.opt_value_from_str("--source")?,
        res_dir: args.opt_value_from_str("--res-dir")?,
        quality: args.opt_value_from_str("--quality")?,
        format: args.opt_value_from_str("--format")?,
    };

    let remaining = args.finish();
    if let Some(first) = remaining.first() {
        return Err(Error::Config(format!(
            "unexpected argument '{}'",
            first.to_string_lossy()
        )));
    }

    Ok(Command::Generate(flags))
}

impl Flags {
    /// Loads the base configuration and applies the overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected config file cannot be read or parsed.
    pub fn resolve(self) -> Result<Config> {
        let base = match &self.config_path {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        Ok(self.apply(base))
    }

    /// Overlays the flags that were given onto `config`.
    #[must_use]
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(source) = self.source {
            config.source_path = source;
        }
        if let Some(res_dir) = self.res_dir {
            config.output_root = res_dir;
        }
        if let Some(quality) = self.quality {
            config.quality = quality;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn no_arguments_generates_with_defaults() {
        assert_eq!(parse(args(&[])), Ok(Command::Generate(Flags::default())));
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(args(&["--help"])), Ok(Command::Help));
        assert_eq!(parse(args(&["-h", "--quality", "50"])), Ok(Command::Help));
        assert_eq!(parse(args(&["-V"])), Ok(Command::Version));
    }

    #[test]
    fn all_flags_are_parsed() {
        let command = parse(args(&[
            "--source",
            "logo.png",
            "--res-dir",
            "out/res",
            "--quality",
            "80",
            "--format",
            "png",
            "--config",
            "icons.toml",
        ]))
        .expect("parse");

        assert_eq!(
            command,
            Command::Generate(Flags {
                config_path: Some(PathBuf::from("icons.toml")),
                source: Some(PathBuf::from("logo.png")),
                res_dir: Some(PathBuf::from("out/res")),
                quality: Some(80),
                format: Some(OutputFormat::Png),
            })
        );
    }

    #[test]
    fn bad_values_are_config_errors() {
        assert!(matches!(parse(args(&["--quality", "high"])), Err(Error::Config(_))));
        assert!(matches!(parse(args(&["--format", "gif"])), Err(Error::Config(_))));
    }

    #[test]
    fn unexpected_argument_is_rejected() {
        let err = parse(args(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("--frobnicate"));
    }

    #[test]
    fn apply_overrides_only_given_fields() {
        let flags = Flags {
            quality: Some(60),
            ..Flags::default()
        };
        let config = flags.apply(Config::default());
        assert_eq!(config.quality, 60);
        assert_eq!(config, Config { quality: 60, ..Config::default() });
    }

    #[test]
    fn resolve_reads_config_file_then_applies_flags() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("icons.toml");
        std::fs::write(&config_path, "quality = 70\nformat = \"png\"\n").expect("write config");

        let flags = Flags {
            config_path: Some(config_path),
            quality: Some(90),
            ..Flags::default()
        };
        let config = flags.resolve().expect("resolve");
        assert_eq!(config.quality, 90);
        assert_eq!(config.format, OutputFormat::Png);
    }
}
