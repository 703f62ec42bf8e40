use std::sync::{Arc, Mutex};

use crate::auth::Session;
use crate::config::Config;
use crate::submission::{Clock, SubmissionStore};

/// Everything the desk knows for the lifetime of one run. Each slice has its
/// own lock; no operation holds more than one at a time.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<Mutex<SubmissionStore>>,
    pub session: Arc<Mutex<Session>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::from_store(config, SubmissionStore::new())
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self::from_store(config, SubmissionStore::with_clock(clock))
    }

    fn from_store(config: Config, store: SubmissionStore) -> Self {
        Self {
            submissions: Arc::new(Mutex::new(store)),
            session: Arc::new(Mutex::new(Session::default())),
            config: Arc::new(config),
        }
    }
}
