//! Load Radar use case.
//!
//! Drives one document load end to end: fetch/parse the CSV source,
//! validate, sanitize, assemble, and dispatch the result to the
//! rendering or error-display collaborator.
//!
//! A load moves `Idle -> Loading -> Ready | Failed`; both terminal
//! states are final, with no retries. The loading presenter brackets
//! the Loading state, and this use case is the single point where
//! error kinds are translated into user-facing text.

use crate::pipeline::{ContentValidator, assemble, sanitize};
use crate::ports::csv_source::{CsvSource, SourceError};
use crate::ports::error_presenter::ErrorPresenter;
use crate::ports::loading_presenter::LoadingPresenter;
use crate::ports::renderer::Renderer;
use radar_domain::{Radar, RadarError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Base user-facing failure message; also the verbatim message for a
/// failed fetch.
pub const SHEET_NOT_FOUND_MESSAGE: &str = "Oops! We can't find the Google Sheet you've entered";

/// Smallest viewport the renderer is ever handed.
pub const MIN_VIEWPORT: u32 = 620;

/// Errors that can occur during a load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Radar(#[from] RadarError),
}

/// Document title derived from the source filename.
///
/// A trailing ".csv" suffix is stripped; any other name passes through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTitle(String);

impl DocumentTitle {
    pub fn from_source_name(source_name: &str) -> Self {
        let title = source_name.strip_suffix(".csv").unwrap_or(source_name);
        Self(title.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Input for the [`LoadRadarUseCase`].
#[derive(Debug, Clone)]
pub struct LoadRadarInput {
    /// Display name of the source (typically its filename).
    pub source_name: String,
    /// Name of the sheet this load reads.
    pub current_sheet_name: String,
    /// Names of alternate sheets, insertion order preserved.
    pub alternative_sheet_names: Vec<String>,
    /// Requested viewport size; floored to [`MIN_VIEWPORT`].
    pub viewport_size: u32,
}

impl LoadRadarInput {
    pub fn new(source_name: impl Into<String>, current_sheet_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            current_sheet_name: current_sheet_name.into(),
            alternative_sheet_names: Vec::new(),
            viewport_size: MIN_VIEWPORT,
        }
    }

    pub fn with_alternatives(mut self, names: Vec<String>) -> Self {
        self.alternative_sheet_names = names;
        self
    }

    pub fn with_viewport_size(mut self, size: u32) -> Self {
        self.viewport_size = size;
        self
    }
}

/// Terminal state of one load.
#[derive(Debug)]
pub enum LoadOutcome {
    Ready {
        radar: Radar,
        title: DocumentTitle,
    },
    Failed {
        message: String,
    },
}

impl LoadOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadOutcome::Ready { .. })
    }
}

/// Use case orchestrating one radar document load
pub struct LoadRadarUseCase {
    source: Arc<dyn CsvSource>,
    renderer: Arc<dyn Renderer>,
    error_presenter: Arc<dyn ErrorPresenter>,
    loading_presenter: Arc<dyn LoadingPresenter>,
}

impl LoadRadarUseCase {
    pub fn new(
        source: Arc<dyn CsvSource>,
        renderer: Arc<dyn Renderer>,
        error_presenter: Arc<dyn ErrorPresenter>,
        loading_presenter: Arc<dyn LoadingPresenter>,
    ) -> Self {
        Self {
            source,
            renderer,
            error_presenter,
            loading_presenter,
        }
    }

    /// Execute one load to its terminal state.
    pub async fn execute(&self, input: LoadRadarInput) -> LoadOutcome {
        info!("Loading radar document: {}", input.source_name);
        self.loading_presenter.show();
        let result = self.load(&input).await;
        self.loading_presenter.hide();

        match result {
            Ok(radar) => {
                let title = DocumentTitle::from_source_name(&input.source_name);
                let size = input.viewport_size.max(MIN_VIEWPORT);
                info!(
                    quadrants = radar.quadrants().len(),
                    blips = radar.blip_count(),
                    "Radar ready: {title}"
                );
                self.renderer.render(&radar, size);
                LoadOutcome::Ready { radar, title }
            }
            Err(load_error) => {
                let message = Self::user_message(&load_error);
                self.error_presenter.present(&message);
                LoadOutcome::Failed { message }
            }
        }
    }

    async fn load(&self, input: &LoadRadarInput) -> Result<Radar, LoadError> {
        let table = self.source.fetch().await?;
        debug!(
            columns = table.columns.len(),
            rows = table.rows.len(),
            "Fetched CSV table"
        );

        let validator = ContentValidator::new(table.columns.clone());
        validator.verify_headers()?;
        validator.verify_content(&table.rows)?;

        let rows = table
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| sanitize(row, index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let radar = assemble(
            &rows,
            &input.current_sheet_name,
            &input.alternative_sheet_names,
        )?;
        Ok(radar)
    }

    /// Translate an error kind into the user-facing message.
    ///
    /// Data-shape problems append their detail to the base message;
    /// anything unexpected is logged and collapsed to the generic
    /// message so internals never reach the user.
    fn user_message(load_error: &LoadError) -> String {
        match load_error {
            LoadError::Source(SourceError::NotFound(_)) => SHEET_NOT_FOUND_MESSAGE.to_string(),
            LoadError::Radar(radar_error) => {
                format!("{SHEET_NOT_FOUND_MESSAGE} {radar_error}")
            }
            LoadError::Source(unexpected) => {
                error!("Unexpected load failure: {unexpected}");
                SHEET_NOT_FOUND_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::csv_source::{CsvTable, RawRow};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedSource(Result<CsvTable, fn() -> SourceError>);

    #[async_trait]
    impl CsvSource for FixedSource {
        async fn fetch(&self) -> Result<CsvTable, SourceError> {
            match &self.0 {
                Ok(table) => Ok(table.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<(usize, u32)>>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&self, radar: &Radar, viewport_size: u32) {
            self.calls
                .lock()
                .unwrap()
                .push((radar.blip_count(), viewport_size));
        }
    }

    #[derive(Default)]
    struct RecordingErrorPresenter {
        messages: Mutex<Vec<String>>,
    }

    impl ErrorPresenter for RecordingErrorPresenter {
        fn present(&self, user_message: &str) {
            self.messages.lock().unwrap().push(user_message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingLoading {
        events: Mutex<Vec<&'static str>>,
    }

    impl LoadingPresenter for RecordingLoading {
        fn show(&self) {
            self.events.lock().unwrap().push("show");
        }
        fn hide(&self) {
            self.events.lock().unwrap().push("hide");
        }
    }

    fn table() -> CsvTable {
        let columns = ["name", "ring", "quadrant", "isNew"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = vec![
            row(&[("name", "A"), ("ring", "Adopt"), ("quadrant", "Tools"), ("isNew", "true")]),
            row(&[
                ("name", "B"),
                ("ring", "hold"),
                ("quadrant", "Languages"),
                ("isNew", "false"),
            ]),
        ];
        CsvTable::new(columns, rows)
    }

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    fn use_case(
        source: FixedSource,
    ) -> (
        LoadRadarUseCase,
        Arc<RecordingRenderer>,
        Arc<RecordingErrorPresenter>,
        Arc<RecordingLoading>,
    ) {
        let renderer = Arc::new(RecordingRenderer::default());
        let errors = Arc::new(RecordingErrorPresenter::default());
        let loading = Arc::new(RecordingLoading::default());
        let use_case = LoadRadarUseCase::new(
            Arc::new(source),
            renderer.clone(),
            errors.clone(),
            loading.clone(),
        );
        (use_case, renderer, errors, loading)
    }

    #[tokio::test]
    async fn test_successful_load_renders_and_strips_title() {
        let (use_case, renderer, errors, loading) = use_case(FixedSource(Ok(table())));
        let input = LoadRadarInput::new("radar.csv", "CSV File").with_viewport_size(100);

        let outcome = use_case.execute(input).await;

        match outcome {
            LoadOutcome::Ready { radar, title } => {
                assert_eq!(title.as_str(), "radar");
                assert_eq!(radar.quadrants().len(), 2);
            }
            LoadOutcome::Failed { message } => panic!("unexpected failure: {message}"),
        }
        // Viewport floored to the minimum.
        assert_eq!(*renderer.calls.lock().unwrap(), vec![(2, MIN_VIEWPORT)]);
        assert!(errors.messages.lock().unwrap().is_empty());
        assert_eq!(*loading.events.lock().unwrap(), vec!["show", "hide"]);
    }

    #[tokio::test]
    async fn test_title_without_csv_suffix_passes_through() {
        assert_eq!(DocumentTitle::from_source_name("My Radar").as_str(), "My Radar");
        assert_eq!(DocumentTitle::from_source_name("data.csv").as_str(), "data");
    }

    #[tokio::test]
    async fn test_fetch_failure_presents_message_verbatim() {
        let (use_case, renderer, errors, loading) = use_case(FixedSource(Err(|| {
            SourceError::NotFound("http://example.com/missing.csv".to_string())
        })));

        let outcome = use_case.execute(LoadRadarInput::new("missing.csv", "CSV File")).await;

        assert!(!outcome.is_ready());
        assert_eq!(
            *errors.messages.lock().unwrap(),
            vec![SHEET_NOT_FOUND_MESSAGE.to_string()]
        );
        assert!(renderer.calls.lock().unwrap().is_empty());
        assert_eq!(*loading.events.lock().unwrap(), vec!["show", "hide"]);
    }

    #[tokio::test]
    async fn test_missing_header_fails_before_rows_are_read() {
        let mut bad = table();
        bad.columns.retain(|c| c != "quadrant");
        let (use_case, renderer, errors, _) = use_case(FixedSource(Ok(bad)));

        let outcome = use_case.execute(LoadRadarInput::new("radar.csv", "CSV File")).await;

        assert!(!outcome.is_ready());
        let messages = errors.messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with(SHEET_NOT_FOUND_MESSAGE));
        assert!(messages[0].contains("quadrant"));
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_name_fails_whole_load() {
        let mut bad = table();
        bad.rows[1] = row(&[
            ("name", ""),
            ("ring", "hold"),
            ("quadrant", "Languages"),
            ("isNew", "false"),
        ]);
        let (use_case, renderer, errors, _) = use_case(FixedSource(Ok(bad)));

        let outcome = use_case.execute(LoadRadarInput::new("radar.csv", "CSV File")).await;

        assert!(!outcome.is_ready());
        assert!(errors.messages.lock().unwrap()[0].contains("name"));
        // No partial radar reaches the renderer.
        assert!(renderer.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unexpected_source_error_shows_generic_message() {
        let (use_case, _, errors, _) = use_case(FixedSource(Err(|| {
            SourceError::Parse("bad quoting".to_string())
        })));

        use_case.execute(LoadRadarInput::new("radar.csv", "CSV File")).await;

        let messages = errors.messages.lock().unwrap();
        assert_eq!(messages[0], SHEET_NOT_FOUND_MESSAGE);
        assert!(!messages[0].contains("bad quoting"));
    }
}
