//! Authoritative local snapshot of the profile collection.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use pp_client::{Client, ClientResult};
use pp_core::{Profile, ProfileDraft, ProfileUpdate};
use tokio::sync::watch;
use uuid::Uuid;

/// Shared snapshot of the full profile collection.
///
/// A reload publishes a new `Arc` instead of mutating in place, so every
/// reader observes a complete collection, never a partial one.
pub type Snapshot = Arc<Vec<Profile>>;

/// Reload bookkeeping. Generations order overlapping reloads: a fetch is
/// applied only if nothing newer has been applied already, so a stale
/// response can never overwrite a fresher successful one.
#[derive(Default)]
struct ReloadState {
    issued: u64,
    applied: u64,
    in_flight: u32,
}

/// Owns the client-side copy of the profile collection and synchronizes
/// it with the remote profile service.
///
/// Mutations go through the service and are followed by a full reload
/// rather than a local merge; the snapshot stays authoritative by
/// construction.
pub struct ProfileStore {
    client: Client,
    snapshot_tx: watch::Sender<Snapshot>,
    state: Mutex<ReloadState>,
}

impl ProfileStore {
    pub fn new(client: Client) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot::default());
        Self {
            client,
            snapshot_tx,
            state: Mutex::new(ReloadState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, ReloadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The collection as of this call.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// Subscribe to snapshot updates. Dropping the receiver detaches the
    /// consumer; later publications are simply no longer observed.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    /// True while at least one reload is in flight.
    pub fn is_loading(&self) -> bool {
        self.state().in_flight > 0
    }

    /// Fetch the full collection and replace the snapshot atomically.
    ///
    /// A failed fetch reports the error and leaves the last-known-good
    /// snapshot in place; the store stays usable with stale data.
    pub async fn reload(&self) -> ClientResult<()> {
        let generation = self.begin_reload();
        let result = self.client.list_profiles().await;
        self.finish_reload(generation, result)
    }

    pub(crate) fn begin_reload(&self) -> u64 {
        let mut state = self.state();
        state.issued += 1;
        state.in_flight += 1;
        state.issued
    }

    pub(crate) fn finish_reload(
        &self,
        generation: u64,
        result: ClientResult<Vec<Profile>>,
    ) -> ClientResult<()> {
        let mut state = self.state();
        state.in_flight -= 1;

        match result {
            Ok(profiles) => {
                if generation > state.applied {
                    state.applied = generation;
                    debug!("snapshot replaced ({} profiles)", profiles.len());
                    // Published under the lock so an older generation
                    // cannot slip in between the check and the send.
                    self.snapshot_tx.send_replace(Arc::new(profiles));
                } else {
                    debug!("discarding stale reload (generation {})", generation);
                }
                Ok(())
            }
            Err(err) => {
                warn!("reload failed, keeping previous snapshot: {}", err);
                Err(err)
            }
        }
    }

    /// Create a profile and return the new record's id for navigation.
    ///
    /// The response is not merged locally; a full reload keeps the
    /// snapshot authoritative. A failed follow-up reload leaves the
    /// snapshot stale but does not mask the successful creation.
    pub async fn create(&self, draft: &ProfileDraft) -> ClientResult<Uuid> {
        let created = self.client.create_profile(draft).await?;
        info!("created profile {}", created.id);

        if let Err(err) = self.reload().await {
            warn!("post-create reload failed: {}", err);
        }

        Ok(created.id)
    }

    /// Fetch a single record without touching the snapshot.
    ///
    /// A missing id is reported as `NotFound`, distinct from transport
    /// or service failures.
    pub async fn fetch_one(&self, id: Uuid) -> ClientResult<Profile> {
        self.client.get_profile(id).await
    }

    /// Send an edit and return the updated record. Dependent views are
    /// refreshed through a full reload.
    pub async fn update(&self, id: Uuid, update: &ProfileUpdate) -> ClientResult<Profile> {
        let updated = self.client.update_profile(id, update).await?;
        info!("updated profile {}", id);

        if let Err(err) = self.reload().await {
            warn!("post-update reload failed: {}", err);
        }

        Ok(updated)
    }

    /// Destroy a record. Irreversible; callers must have obtained
    /// explicit confirmation before calling this.
    pub async fn delete(&self, id: Uuid) -> ClientResult<()> {
        self.client.delete_profile(id).await?;
        info!("deleted profile {}", id);

        if let Err(err) = self.reload().await {
            warn!("post-delete reload failed: {}", err);
        }

        Ok(())
    }
}
