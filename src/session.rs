//! Ordered startup phase: shared tables, decoding, analysis, engine.
//!
//! Everything that may allocate, block or fail happens here, before any
//! real-time resources exist.

use std::path::Path;
use std::sync::Arc;

use crate::analysis::{AnalysisTable, Analyzer};
use crate::error::{MorphError, MorphResult};
use crate::input::{load_recording, Recording};
use crate::params::{AnalysisConfig, EngineConfig};
use crate::synth::{ResynthesisEngine, SineTable};

/// Configured analyzer plus the shared sine table
pub struct Session {
    analyzer: Analyzer,
    engine_config: EngineConfig,
    sine_table: Arc<SineTable>,
}

impl Session {
    pub fn new(analysis: AnalysisConfig, engine_config: EngineConfig) -> MorphResult<Self> {
        engine_config.validate().map_err(MorphError::InvalidConfig)?;
        let analyzer = Analyzer::new(analysis)?;
        let sine_table = Arc::new(SineTable::new(engine_config.sine_table_size));

        Ok(Self {
            analyzer,
            engine_config,
            sine_table,
        })
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine_config
    }

    /// Decode, analyze and normalize one recording
    pub fn analyze_file(&self, path: &Path, voices: usize) -> MorphResult<AnalysisTable> {
        let recording = load_recording(path)?;
        self.check_recording(path, &recording)?;
        Ok(self.analyzer.analyze_normalized(&recording.samples, voices))
    }

    /// Analyze an in-memory mono recording
    pub fn analyze_samples(&self, samples: &[f32], voices: usize) -> AnalysisTable {
        self.analyzer.analyze_normalized(samples, voices)
    }

    /// Build the engine from two already analyzed tables
    pub fn engine(
        &self,
        primary: AnalysisTable,
        secondary: AnalysisTable,
    ) -> MorphResult<ResynthesisEngine> {
        ResynthesisEngine::new(
            primary,
            secondary,
            self.analyzer.config().hop_size,
            Arc::clone(&self.sine_table),
            self.engine_config.sample_rate_hz as f64,
        )
    }

    /// Full startup: both files, both analyses, one engine
    pub fn prepare(
        &self,
        first: &Path,
        second: &Path,
        voices: usize,
    ) -> MorphResult<ResynthesisEngine> {
        let primary = self.analyze_file(first, voices)?;
        log::info!(
            "done audio 1: {} ({} frames)",
            first.display(),
            primary.frame_count()
        );

        let secondary = self.analyze_file(second, voices)?;
        log::info!(
            "done audio 2: {} ({} frames)",
            second.display(),
            secondary.frame_count()
        );

        let engine = self.engine(primary, secondary)?;
        log::info!(
            "done analysis: {} voices, {} frames per loop ({:.2}s)",
            voices,
            engine.frame_limit(),
            engine.loop_len() as f64 / self.engine_config.sample_rate_hz as f64
        );
        Ok(engine)
    }

    fn check_recording(&self, path: &Path, recording: &Recording) -> MorphResult<()> {
        if recording.samples.is_empty() {
            return Err(MorphError::EmptyRecording {
                path: path.to_path_buf(),
            });
        }
        // Played back at the engine rate without resampling
        if recording.sample_rate_hz != self.engine_config.sample_rate_hz {
            log::warn!(
                "{} is {} Hz but the engine runs at {} Hz; pitch and timing will shift",
                path.display(),
                recording.sample_rate_hz,
                self.engine_config.sample_rate_hz
            );
        }
        log::debug!(
            "{}: {} samples, {} channel(s), {:.2}s",
            path.display(),
            recording.samples.len(),
            recording.source_channels,
            recording.duration_secs()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_engine_config() {
        let engine_config = EngineConfig {
            sample_rate_hz: 0,
            ..EngineConfig::default()
        };
        assert!(Session::new(AnalysisConfig::default(), engine_config).is_err());
    }

    #[test]
    fn test_engine_from_samples() {
        let session = Session::new(AnalysisConfig::default(), EngineConfig::default()).unwrap();
        let a = session.analyze_samples(&vec![0.5; 3000], 2);
        let b = session.analyze_samples(&vec![0.5; 2000], 2);

        let engine = session.engine(a, b).unwrap();

        assert_eq!(engine.frame_limit(), 2);
        assert_eq!(engine.loop_len(), 2048);
        assert_eq!(engine.voices(), 2);
    }

    #[test]
    fn test_missing_file_fails_before_engine() {
        let session = Session::new(AnalysisConfig::default(), EngineConfig::default()).unwrap();
        let result = session.prepare(Path::new("/nonexistent/a.wav"), Path::new("b.wav"), 4);

        assert!(matches!(result, Err(MorphError::FileOpen { .. })));
    }
}
