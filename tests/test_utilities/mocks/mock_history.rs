use chrono::{DateTime, Utc};
use depfresh::freshness_audit::domain::TimestampResult;
use depfresh::prelude::*;
use depfresh::shared::error::TimestampError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock LocalHistory answering from a fixed table
pub struct MockLocalHistory {
    pub timestamps: HashMap<String, TimestampResult>,
}

impl MockLocalHistory {
    pub fn new() -> Self {
        Self {
            timestamps: HashMap::new(),
        }
    }

    pub fn with_timestamp(mut self, import_path: &str, instant: DateTime<Utc>) -> Self {
        self.timestamps.insert(import_path.to_string(), Ok(instant));
        self
    }

    pub fn with_error(mut self, import_path: &str, error: TimestampError) -> Self {
        self.timestamps.insert(import_path.to_string(), Err(error));
        self
    }
}

impl LocalHistory for MockLocalHistory {
    fn last_change(&self, dependency: &Dependency) -> TimestampResult {
        self.timestamps
            .get(dependency.import_path())
            .cloned()
            .unwrap_or_else(|| {
                Err(TimestampError::local(format!(
                    "source directory of {} not found",
                    dependency.import_path()
                )))
            })
    }
}

/// Mock RemoteHistory answering per repository and recording each request
#[derive(Clone)]
pub struct MockRemoteHistory {
    pub timestamps: HashMap<String, TimestampResult>,
    pub requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockRemoteHistory {
    pub fn new() -> Self {
        Self {
            timestamps: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Registers the branch head date for `account/repository`
    pub fn with_timestamp(mut self, repository: &str, instant: DateTime<Utc>) -> Self {
        self.timestamps.insert(repository.to_string(), Ok(instant));
        self
    }

    /// Returns (account/repository, token) pairs in request order
    pub fn get_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl RemoteHistory for MockRemoteHistory {
    fn last_change(&self, dependency: &Dependency, token: &AccessToken) -> TimestampResult {
        let key = format!("{}/{}", dependency.account(), dependency.repository());
        self.requests
            .lock()
            .unwrap()
            .push((key.clone(), token.as_str().to_string()));

        self.timestamps
            .get(&key)
            .cloned()
            .unwrap_or(Err(TimestampError::RemoteNotFound { status: 404 }))
    }
}
