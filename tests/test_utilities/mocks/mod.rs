/// Mock implementations for testing
mod manual_clock;
mod mock_progress_reporter;
mod mock_remote_client;

pub use manual_clock::ManualClock;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_remote_client::MockRemoteClient;
