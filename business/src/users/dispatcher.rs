//! Runs users-view requests off the frame and queues their results.
//!
//! Requests are spawned with `tokio::spawn` on native and
//! `wasm_bindgen_futures::spawn_local` on wasm. Finished calls are sent back
//! as [`UsersEvent`]s over a `flume` channel and applied on the UI thread by
//! [`UsersDispatcher::poll`], so the list is only ever mutated there.
//!
//! There is no cancellation. Results that arrive after the dispatcher is gone
//! are dropped with the channel.

use std::future::Future;

use flume::{Receiver, Sender};
use log::{info, warn};

use crate::users::api::{delete_user, list_users};
use crate::users::state::{UserListState, UsersEvent, UsersFailure};
use crate::{BusinessConfig, Viewer};

#[derive(Debug)]
pub struct UsersDispatcher {
    config: BusinessConfig,
    sender: Sender<UsersEvent>,
    receiver: Receiver<UsersEvent>,
    repaint: Option<egui::Context>,
}

impl UsersDispatcher {
    pub fn new(config: BusinessConfig) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            sender,
            receiver,
            repaint: None,
        }
    }

    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    /// Ask `ctx` for a repaint whenever a result lands.
    pub fn set_repaint_context(&mut self, ctx: &egui::Context) {
        if self.repaint.is_none() {
            self.repaint = Some(ctx.clone());
        }
    }

    /// Fetch the first page for `viewer`.
    ///
    /// Returns `false` without touching the network when the viewer is not an admin.
    pub fn load(&self, state: &mut UserListState, viewer: &Viewer) -> bool {
        if !viewer.is_admin {
            info!("Viewer {} is not an admin, skipping users fetch", viewer.id);
            return false;
        }
        state.begin_load(viewer);

        let config = self.config.clone();
        let viewer = viewer.id;
        self.spawn(async move {
            let result = list_users(&config, 0).await;
            UsersEvent::FirstPage { viewer, result }
        });
        true
    }

    /// Fetch the page after the records already loaded.
    pub fn load_more(&self, state: &mut UserListState) {
        let start_index = state.begin_load_more();

        let config = self.config.clone();
        self.spawn(async move {
            let result = list_users(&config, start_index).await;
            UsersEvent::NextPage {
                start_index,
                result,
            }
        });
    }

    /// Delete the record pending confirmation.
    ///
    /// Returns `false` when no deletion is pending.
    pub fn confirm_delete(&self, state: &mut UserListState) -> bool {
        let Some(id) = state.begin_delete() else {
            return false;
        };

        let config = self.config.clone();
        self.spawn(async move {
            let result = delete_user(&config, id.as_str()).await;
            UsersEvent::Deleted { id, result }
        });
        true
    }

    /// Apply every finished call and return the failures among them.
    pub fn poll(&self, state: &mut UserListState) -> Vec<UsersFailure> {
        self.receiver
            .try_iter()
            .filter_map(|event| state.apply(event))
            .collect()
    }

    /// Wait for the next finished call without applying it.
    pub async fn next_event(&self) -> Option<UsersEvent> {
        self.receiver.recv_async().await.ok()
    }

    fn spawn<F>(&self, request: F)
    where
        F: Future<Output = UsersEvent> + Send + 'static,
    {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        let task = async move {
            let event = request.await;
            if sender.send(event).is_err() {
                warn!("Users view is gone, dropping result");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        tokio::spawn(task);

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(task);
    }
}
