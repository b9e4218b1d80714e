//! Peakmorph - analyze two recordings and loop an additive resynthesis
//! built from the first one's spectral peaks.

use std::process::ExitCode;

use clap::Parser;

use peakmorph::audio::{render_to_wav, AudioSystem};
use peakmorph::cli::Args;
use peakmorph::params::{AnalysisConfig, EngineConfig};
use peakmorph::session::Session;
use peakmorph::{MorphError, MorphResult};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("peakmorph: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> MorphResult<()> {
    let engine_config = EngineConfig::default();
    let render = args.render_config();
    if let Some(render) = &render {
        render.validate().map_err(MorphError::InvalidConfig)?;
    }

    let session = Session::new(AnalysisConfig::default(), engine_config.clone())?;

    // Startup phase: everything fallible happens before audio starts
    let mut engine = session.prepare(&args.input1, &args.input2, args.voices())?;

    if let Some(render) = render {
        render_to_wav(&mut engine, &render, &engine_config)?;
        return Ok(());
    }

    let _audio = AudioSystem::new(engine, &engine_config)?;
    log::info!("Playing; press Ctrl-C to quit");

    // Callback runs until the process is terminated
    loop {
        std::thread::park();
    }
}
