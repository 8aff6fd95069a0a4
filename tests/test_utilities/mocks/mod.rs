/// Mock implementations for testing
mod mock_history;
mod mock_import_graph;
mod mock_presenter;
mod mock_progress_reporter;

pub use mock_history::{MockLocalHistory, MockRemoteHistory};
pub use mock_import_graph::MockImportGraph;
pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
