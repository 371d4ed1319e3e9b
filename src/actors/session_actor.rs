use std::sync::Arc;

use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::actors::Session;
use crate::config::SessionSettings;
use crate::controller::MutationController;
use crate::engine::Event;
use crate::storage::{RecordStore, Storage};
use crate::views::Observer;

pub struct SessionActor;

impl SessionActor {
    /// Spawns the task that owns the collection and applies events one at a time.
    ///
    /// The collection is loaded only after the configured delay. Events sent before that wait in
    /// the channel, so none is ever applied to an uninitialized collection. The task hands the
    /// session back once the sender side is closed and every queued event has been applied.
    pub fn spawn<S: Storage>(
        storage: Arc<S>,
        settings: SessionSettings,
        observers: Vec<Box<dyn Observer>>,
        mut receiver: mpsc::Receiver<Event>
    ) -> JoinHandle<Session<S>> {
        spawn(async move {
            if !settings.load_delay.is_zero() {
                debug!("Delaying load by [{:?}]", settings.load_delay);
                sleep(settings.load_delay).await;
            }

            let mut store = RecordStore::load(storage, settings.storage_key.as_str())
                .with_recent_count(settings.recent_count);

            for observer in observers {
                store.subscribe(observer);
            }

            store.refresh();

            let mut session = Session::new(MutationController::new(store));
            let mut processed = 0usize;

            while let Some(event) = receiver.recv().await {
                let action = event.action;

                match session.handle(event) {
                    Ok(_) => debug!("Event [{action:?}] processed"),
                    Err(error) => warn!("Event [{action:?}] rejected: {error}")
                }

                processed += 1;
            }

            info!("Session closed after [{processed}] events with [{}] transactions", session.controller().store().len());

            session
        })
    }
}
