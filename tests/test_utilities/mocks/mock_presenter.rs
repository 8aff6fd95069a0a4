use depfresh::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that captures everything presented
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub output: Arc<Mutex<String>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_output(&self) -> String {
        self.output.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.output.lock().unwrap().push_str(content);
        Ok(())
    }
}
