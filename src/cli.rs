//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::RenderConfig;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "peakmorph")]
#[command(about = "Sinusoidal analysis and looping additive resynthesis of two recordings", long_about = None)]
pub struct Args {
    /// First recording (drives the oscillators)
    pub input1: PathBuf,

    /// Second recording (analyzed; bounds the loop length)
    pub input2: PathBuf,

    /// Number of sine oscillators (peaks kept per frame)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub voices: u32,

    /// Render to a WAV file instead of playing live
    #[arg(long, value_name = "PATH")]
    pub render: Option<PathBuf>,

    /// Render duration in seconds (default: one loop)
    #[arg(long, value_name = "SECONDS", requires = "render", value_parser = parse_seconds)]
    pub seconds: Option<f64>,
}

/// Parse a render duration, rejecting non-finite and non-positive values
fn parse_seconds(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("must be finite and > 0, got {}", s));
    }
    Ok(secs)
}

impl Args {
    pub fn voices(&self) -> usize {
        self.voices as usize
    }

    /// Create render configuration if offline mode is enabled
    pub fn render_config(&self) -> Option<RenderConfig> {
        self.render
            .as_ref()
            .map(|path| RenderConfig::new(path.clone(), self.seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positionals() {
        let args = Args::try_parse_from(["peakmorph", "a.wav", "b.wav", "8"]).unwrap();

        assert_eq!(args.input1, PathBuf::from("a.wav"));
        assert_eq!(args.input2, PathBuf::from("b.wav"));
        assert_eq!(args.voices(), 8);
        assert!(args.render_config().is_none());
    }

    #[test]
    fn test_missing_arguments_is_error() {
        assert!(Args::try_parse_from(["peakmorph", "a.wav", "b.wav"]).is_err());
        assert!(Args::try_parse_from(["peakmorph"]).is_err());
    }

    #[test]
    fn test_zero_voices_rejected() {
        assert!(Args::try_parse_from(["peakmorph", "a.wav", "b.wav", "0"]).is_err());
    }

    #[test]
    fn test_render_options() {
        let args = Args::try_parse_from([
            "peakmorph",
            "a.wav",
            "b.wav",
            "4",
            "--render",
            "out.wav",
            "--seconds",
            "2.5",
        ])
        .unwrap();

        let render = args.render_config().unwrap();
        assert_eq!(render.output_path, PathBuf::from("out.wav"));
        assert_eq!(render.duration_secs, Some(2.5));
    }

    #[test]
    fn test_non_finite_seconds_rejected() {
        for secs in ["inf", "NaN", "-inf", "0", "-2"] {
            let result = Args::try_parse_from([
                "peakmorph",
                "a.wav",
                "b.wav",
                "4",
                "--render",
                "out.wav",
                "--seconds",
                secs,
            ]);
            assert!(result.is_err(), "accepted --seconds {}", secs);
        }
    }
}
