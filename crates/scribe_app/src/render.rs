use scribe_core::{format_timestamp, ProgressView, StepUiState, TranscriptionResult};

/// Draws the linear step indicator for one job: a chip per stage plus a
/// marker on the active step, the terminal rendering of the progress page.
pub fn render_progress(view: &ProgressView) {
    match &view.file_name {
        Some(name) => println!("Processing {} (status {})", name, view.status_code),
        None => println!("Loading job..."),
    }
    for (index, step) in view.steps.iter().enumerate() {
        let chip = match step.state {
            StepUiState::Done => "[done ]",
            StepUiState::Progress => "[.....]",
            StepUiState::Start => "[start]",
            StepUiState::Pending => "[     ]",
        };
        let marker = if index == view.active_step { ">" } else { " " };
        println!("{marker} {chip} {}", step.label);
    }
    if view.active_step == view.steps.len() {
        println!("  all stages complete");
    }
    if let Some(error) = &view.error {
        println!("  error: {error}");
    }
    println!();
}

/// Speaker-attributed transcript with `M:SS` timestamps, language tags and
/// translations where they differ from the source text.
pub fn render_transcript(result: &TranscriptionResult) {
    println!(
        "Transcription {} ({} speakers)",
        result.id, result.total_speakers
    );
    for segment in &result.segment {
        let language = if segment.language.is_empty() {
            String::new()
        } else {
            format!(" [{}]", segment.language)
        };
        println!(
            "{}-{} {}{}",
            format_timestamp(segment.start),
            format_timestamp(segment.end),
            segment.speaker,
            language
        );
        println!("    {}", segment.transcript);
        if !segment.translate.is_empty() && segment.translate != segment.transcript {
            println!("    ({})", segment.translate);
        }
    }
}
