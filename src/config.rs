//! Configuration for a single conversion run.
//!
//! The converter deliberately has no configuration files or environment
//! variables: a run is fully described by the source path, the destination
//! path, and the source layout. The struct is built once from CLI arguments
//! and passed by value into the conversion routine, which keeps the pipeline
//! free of process-wide state and easy to drive from tests.

use crate::app::models::SourceFormat;
use crate::cli::args::Args;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything a conversion run needs to know
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Path of the statement CSV downloaded from Vpass
    pub source_path: PathBuf,

    /// Path the normalized CSV is written to
    pub destination_path: PathBuf,

    /// Which of the two export layouts the source uses
    pub format: SourceFormat,
}

impl Config {
    /// Create a configuration, deriving the destination from the source
    /// when none is given
    pub fn new(
        source_path: PathBuf,
        destination_path: Option<PathBuf>,
        format: SourceFormat,
    ) -> Self {
        let destination_path =
            destination_path.unwrap_or_else(|| Self::default_destination(&source_path));
        Self {
            source_path,
            destination_path,
            format,
        }
    }

    /// Build the configuration for a run from parsed CLI arguments
    ///
    /// A missing source path is a configuration error, not a clap usage
    /// error, so it is logged and exits with code 1 like every other
    /// failure.
    pub fn from_args(args: &Args) -> Result<Self> {
        let source_path = args
            .src
            .clone()
            .ok_or_else(|| Error::configuration("specify the source file path with --src"))?;

        Ok(Self::new(
            source_path,
            args.dst.clone(),
            SourceFormat::from_fixed_flag(args.srcfixed),
        ))
    }

    /// Default destination: `<source without extension>-converted.csv`,
    /// next to the source file
    pub fn default_destination(source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        source.with_file_name(format!("{stem}-converted.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_src(src: Option<&str>) -> Args {
        Args {
            src: src.map(PathBuf::from),
            dst: None,
            srcfixed: true,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_default_destination_replaces_extension() {
        assert_eq!(
            Config::default_destination(Path::new("meisai.csv")),
            PathBuf::from("meisai-converted.csv")
        );
        assert_eq!(
            Config::default_destination(Path::new("statements/2022-08.csv")),
            PathBuf::from("statements/2022-08-converted.csv")
        );
    }

    #[test]
    fn test_default_destination_without_extension() {
        assert_eq!(
            Config::default_destination(Path::new("meisai")),
            PathBuf::from("meisai-converted.csv")
        );
    }

    #[test]
    fn test_from_args_requires_source() {
        let err = Config::from_args(&args_with_src(None)).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_from_args_derives_destination_and_format() {
        let config = Config::from_args(&args_with_src(Some("dl/meisai.csv"))).unwrap();
        assert_eq!(config.source_path, PathBuf::from("dl/meisai.csv"));
        assert_eq!(
            config.destination_path,
            PathBuf::from("dl/meisai-converted.csv")
        );
        assert_eq!(config.format, SourceFormat::Fixed);

        let mut args = args_with_src(Some("meisai.csv"));
        args.dst = Some(PathBuf::from("out.csv"));
        args.srcfixed = false;
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.destination_path, PathBuf::from("out.csv"));
        assert_eq!(config.format, SourceFormat::NonFixed);
    }
}
