//! Output engine configuration and constants.

/// Real-time engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Output sample rate (Hz)
    pub sample_rate_hz: u32,

    /// Output channel count (mono signal duplicated to each)
    pub channels: u16,

    /// Requested callback buffer size (frames)
    pub buffer_frames: u32,

    /// Entries in one cycle of the sine lookup table
    pub sine_table_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: audio_constants::SAMPLE_RATE_HZ,
            channels: audio_constants::CHANNELS,
            buffer_frames: audio_constants::BUFFER_FRAMES,
            sine_table_size: audio_constants::SINE_TABLE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate_hz == 0 {
            return Err("Sample rate must be > 0".to_string());
        }
        if self.channels == 0 {
            return Err("Channel count must be > 0".to_string());
        }
        if self.sine_table_size < 2 {
            return Err(format!(
                "Sine table needs at least 2 entries, got {}",
                self.sine_table_size
            ));
        }
        Ok(())
    }
}

/// Audio constants (compile-time, match the reference engine setup)
pub mod audio_constants {
    /// Engine sample rate (Hz)
    pub const SAMPLE_RATE_HZ: u32 = 48000;

    /// Stereo output
    pub const CHANNELS: u16 = 2;

    /// Callback buffer size (frames)
    /// 512 = 10.7ms @ 48kHz
    pub const BUFFER_FRAMES: u32 = 512;

    /// One sine cycle
    pub const SINE_TABLE_SIZE: usize = 16384;
}
