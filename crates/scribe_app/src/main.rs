mod cli;
mod effects;
mod render;
mod watch;

use client_logging::LogDestination;
use log::LevelFilter;
use scribe_client::{ApiSettings, BlockingPipelineApi};
use scribe_core::{endpoint_for_status, update, FileSnapshot, Msg, ProgressState, ProgressView};

use cli::Command;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match cli::parse(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    let destination = if parsed.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    client_logging::initialize(destination, LevelFilter::Info);

    let settings = ApiSettings {
        base_url: parsed.base_url,
        ..ApiSettings::default()
    };

    if let Err(message) = run(&settings, parsed.command) {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(settings: &ApiSettings, command: Command) -> Result<(), String> {
    match command {
        Command::Upload { path, name } => {
            let bytes = std::fs::read(&path).map_err(|err| format!("{}: {err}", path.display()))?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload.bin")
                .to_string();
            let display_name = name.unwrap_or_else(|| file_name.clone());

            let api = BlockingPipelineApi::new(settings).map_err(|err| err.to_string())?;
            let snapshot = api
                .upload(&display_name, &file_name, bytes)
                .map_err(|err| err.to_string())?;

            println!("{}", snapshot.id);
            render::render_progress(&view_of(snapshot));
            Ok(())
        }
        Command::Status { id } => {
            let api = BlockingPipelineApi::new(settings).map_err(|err| err.to_string())?;
            let snapshot = api.fetch_snapshot(&id).map_err(|err| err.to_string())?;
            render::render_progress(&view_of(snapshot));
            Ok(())
        }
        Command::Watch {
            id,
            interval,
            auto,
            strict,
        } => watch::run(settings, &id, interval, auto, strict),
        Command::Advance { id } => {
            let api = BlockingPipelineApi::new(settings).map_err(|err| err.to_string())?;
            let snapshot = api.fetch_snapshot(&id).map_err(|err| err.to_string())?;
            let endpoint = endpoint_for_status(snapshot.status);

            // The server owns the status; even on failure we refetch and
            // show whatever it reports now.
            let advance_result = api.advance(endpoint, &id);
            let refreshed = api.fetch_snapshot(&id).map_err(|err| err.to_string())?;
            render::render_progress(&view_of(refreshed));
            advance_result.map_err(|err| err.to_string())
        }
        Command::Result { id } => {
            let api = BlockingPipelineApi::new(settings).map_err(|err| err.to_string())?;
            let result = api.fetch_result(&id).map_err(|err| err.to_string())?;
            render::render_transcript(&result);
            Ok(())
        }
        Command::About => {
            println!(
                "scribe uploads a media file to a processing backend and tracks it \
                 through speaker identification, diarization, speech recognition, \
                 language identification and translation."
            );
            Ok(())
        }
    }
}

/// One-shot view of a snapshot, derived through the same state machine the
/// watch loop uses.
fn view_of(snapshot: FileSnapshot) -> ProgressView {
    let (state, _effects) = update(ProgressState::new(), Msg::FetchRequested);
    let (state, _effects) = update(
        state,
        Msg::SnapshotArrived {
            seq: 0,
            result: Ok(snapshot),
        },
    );
    state.view()
}
