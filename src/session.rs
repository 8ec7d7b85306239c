//! Dictation session state.
//!
//! A [`DictationSession`] owns what a dictation front end keeps between
//! recognition callbacks: the listening flag, the LaTeX document and the
//! most recent graph. Hosts feed it batches of recognition results.

use serde::Serialize;

use crate::core::spoken2latex::S2LOptions;
use crate::graph::{render_graph, GraphOutcome, PlotOptions, Plotter};
use crate::notes::SavedNote;
use crate::preview::{render_preview, PreviewLine, Typesetter};
use crate::{route_utterance, Routed};

/// One result from a speech recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub is_final: bool,
}

impl RecognitionResult {
    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: true,
        }
    }

    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            is_final: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    #[default]
    Ready,
    Listening,
    GraphRendered,
    Failed(String),
}

impl SessionStatus {
    pub fn message(&self) -> String {
        match self {
            SessionStatus::Ready => "Ready to dictate...".to_string(),
            SessionStatus::Listening => "Listening...".to_string(),
            SessionStatus::GraphRendered => "Graph rendered!".to_string(),
            SessionStatus::Failed(err) => format!("Error: {}", err),
        }
    }
}

/// What a batch of results did to the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// No final text in the batch, or the session is not listening
    Ignored,
    Appended(String),
    Graphed(GraphOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct DictationSession {
    options: S2LOptions,
    plot_options: PlotOptions,
    listening: bool,
    document: String,
    last_graph: Option<GraphOutcome>,
    status: SessionStatus,
}

impl DictationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: S2LOptions, plot_options: PlotOptions) -> Self {
        Self {
            options,
            plot_options,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        self.listening = true;
        self.status = SessionStatus::Listening;
    }

    pub fn stop(&mut self) {
        self.listening = false;
        self.status = SessionStatus::Ready;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Record a recognizer error. Listening state is left to the host,
    /// which calls [`stop`](Self::stop) when the recognizer ends.
    pub fn report_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(%error, "speech recognition error");
        self.status = SessionStatus::Failed(error);
    }

    /// Handle one recognizer callback. Final transcripts are joined, each
    /// followed by a space; interim ones are ignored. The joined text is
    /// either plotted or converted and appended to the document as a line.
    pub fn handle_results(
        &mut self,
        results: &[RecognitionResult],
        plotter: &mut dyn Plotter,
    ) -> SessionEvent {
        if !self.listening {
            tracing::debug!("results received while not listening");
            return SessionEvent::Ignored;
        }

        let mut final_transcript = String::new();
        for result in results.iter().filter(|r| r.is_final) {
            final_transcript.push_str(&result.transcript);
            final_transcript.push(' ');
        }
        if final_transcript.is_empty() {
            return SessionEvent::Ignored;
        }

        match route_utterance(final_transcript.trim_end(), &self.options) {
            Routed::Graph(expression) => {
                let outcome = render_graph(&expression, plotter, &self.plot_options);
                self.status = SessionStatus::GraphRendered;
                self.last_graph = Some(outcome.clone());
                SessionEvent::Graphed(outcome)
            }
            Routed::Latex(latex) => {
                self.status = SessionStatus::Listening;
                self.document.push_str(&latex);
                self.document.push('\n');
                SessionEvent::Appended(latex)
            }
        }
    }

    /// Empty the document and forget the last graph.
    pub fn clear(&mut self) {
        self.document.clear();
        self.last_graph = None;
    }

    /// Replace the document with a saved note's content.
    pub fn load_note(&mut self, note: &SavedNote) {
        self.document = note.content.clone();
    }

    pub fn set_document(&mut self, document: impl Into<String>) {
        self.document = document.into();
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn last_graph(&self) -> Option<&GraphOutcome> {
        self.last_graph.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.clone()
    }

    pub fn preview(&self, typesetter: &dyn Typesetter) -> Vec<PreviewLine> {
        render_preview(&self.document, typesetter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RecordingPlotter;

    #[test]
    fn test_ignored_when_not_listening() {
        let mut session = DictationSession::new();
        let mut plotter = RecordingPlotter::default();
        let event = session.handle_results(
            &[RecognitionResult::finalized("x squared")],
            &mut plotter,
        );
        assert!(matches!(event, SessionEvent::Ignored));
        assert_eq!(session.document(), "");
        assert_eq!(session.status(), SessionStatus::Ready);
    }

    #[test]
    fn test_interim_only_batch_is_ignored() {
        let mut session = DictationSession::new();
        session.start();
        let event = session.handle_results(
            &[RecognitionResult::interim("x squ")],
            &mut RecordingPlotter::default(),
        );
        assert!(matches!(event, SessionEvent::Ignored));
    }

    #[test]
    fn test_status_messages() {
        let mut session = DictationSession::new();
        session.start();
        assert_eq!(session.status().message(), "Listening...");
        session.report_error("no-speech");
        assert_eq!(session.status().message(), "Error: no-speech");
        assert!(session.is_listening());
        session.stop();
        assert_eq!(session.status().message(), "Ready to dictate...");
    }
}
