//! Command line options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sea_lines_common::FaceVariant;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_SCALE, DEFAULT_WIDTH};

/// Sea Lines - vector analog watch face simulator
///
/// Configuration messages are read from stdin, one JSON object per line,
/// e.g. `{"hour_hand": 16711680}`. Press C to cycle preset themes and V to
/// switch the background.
#[derive(Parser, Debug, Clone)]
#[command(name = "sea-lines")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Display width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub width: u32,

    /// Display height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=4096))]
    pub height: u32,

    /// Window pixel scale
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..=16))]
    pub scale: u32,

    /// Background style
    #[arg(long, value_enum, default_value_t = VariantArg::Bands)]
    pub variant: VariantArg,

    /// Sweep hands and calendar once a minute, ticking every second
    #[arg(long)]
    pub fast_forward: bool,

    /// Theme store file (defaults to theme.json in the config directory)
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Render one frame to a PNG file and exit
    #[arg(long, value_name = "PNG")]
    pub screenshot: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    pub debug: u8,
}

impl Cli {
    /// `env_logger` filter for the requested verbosity.
    pub const fn log_level(&self) -> &'static str {
        match self.debug {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// `--variant` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Bands,
    Lobes,
}

impl From<VariantArg> for FaceVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Bands => Self::Bands,
            VariantArg::Lobes => Self::Lobes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sea-lines"]).unwrap();
        assert_eq!((cli.width, cli.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert_eq!(cli.variant, VariantArg::Bands);
        assert!(!cli.fast_forward);
        assert!(cli.store.is_none());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_round_lobed_screenshot() {
        let cli = Cli::try_parse_from([
            "sea-lines",
            "--width",
            "180",
            "--height",
            "180",
            "--variant",
            "lobes",
            "--screenshot",
            "face.png",
            "-d",
            "2",
        ])
        .unwrap();
        assert_eq!(FaceVariant::from(cli.variant), FaceVariant::Lobes);
        assert_eq!(cli.screenshot, Some(PathBuf::from("face.png")));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["sea-lines", "--width", "0"]).is_err());
        assert!(Cli::try_parse_from(["sea-lines", "--variant", "stripes"]).is_err());
    }
}
