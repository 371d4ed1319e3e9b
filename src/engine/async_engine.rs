use crate::actors::{Session, SessionActor};
use crate::config::SessionSettings;
use crate::engine::Event;
use crate::storage::Storage;
use crate::views::Observer;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::error;

/// Feeds a stream of user events into a single budget session.
pub struct AsyncEngine<S: Storage> {
    storage: Arc<S>,
    settings: SessionSettings,
    observers: Vec<Box<dyn Observer>>,
    backpressure: usize
}

impl<S: Storage> AsyncEngine<S> {
    /// Creates a new engine instance with the provided storage.
    pub fn new(storage: Arc<S>, settings: SessionSettings) -> Self {
        Self {
            storage,
            settings,
            observers: Vec::new(),
            backpressure: 256
        }
    }

    /// Registers an observer that is refreshed after the load and after every save.
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Replays every event of a CSV file against the stored collection and returns the session.
    pub async fn run(self, path: impl AsRef<Path>) -> anyhow::Result<Session<S>> {
        let (sender, receiver) = mpsc::channel::<Event>(self.backpressure);
        let session_handle = SessionActor::spawn(self.storage, self.settings, self.observers, receiver);
        let csv_handle = Self::spawn_csv_reader(path.as_ref().to_path_buf(), sender);

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        Ok(session_handle.await?)
    }

    fn spawn_csv_reader(path: PathBuf, sender: mpsc::Sender<Event>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Could not open event file [{}]: {error}", path.display());
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Event>() {
                match result {
                    Ok(event) => {
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }
}
