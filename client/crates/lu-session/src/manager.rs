//! Session manager: the single writer of the process-wide session.

use crate::{
    ClientStorage, IdentityProvider, Session, SessionError, SessionResult, SessionSettings,
    USER_KEY,
};

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use log::{debug, error, info, warn};
use lu_core::{Credentials, Identity, Registration};
use tokio::sync::watch;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Owns the session and keeps it in step with durable storage.
///
/// Readers get a [`SessionHandle`]; only the manager writes. Storage is
/// always written before the in-memory session is published, so a reader
/// never sees an identity that was not persisted.
///
/// A sign-out wins over any sign-in or sign-up still waiting on the
/// provider: the late result is discarded with [`SessionError::Superseded`].
pub struct SessionManager {
    storage: Arc<dyn ClientStorage>,
    provider: Arc<dyn IdentityProvider>,
    settings: SessionSettings,
    state: watch::Sender<Session>,
    auth_in_flight: AtomicBool,
    /// Bumped by every sign-out.
    generation: AtomicU64,
    /// Held while storage and the published session are changed together.
    write_lock: Mutex<()>,
}

/// Read-only view of the session for any number of consumers.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    receiver: watch::Receiver<Session>,
}

/// Clears the in-flight flag when the auth call finishes or is dropped.
struct PendingAuth<'a> {
    flag: &'a AtomicBool,
}

impl Drop for PendingAuth<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl SessionManager {
    /// Create a manager in `Loading` state. Call [`initialize`](Self::initialize)
    /// before trusting the session.
    pub fn new(
        storage: Arc<dyn ClientStorage>,
        provider: Arc<dyn IdentityProvider>,
        settings: SessionSettings,
    ) -> Self {
        let (state, _) = watch::channel(Session::loading());
        Self {
            storage,
            provider,
            settings,
            state,
            auth_in_flight: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            write_lock: Mutex::new(()),
        }
    }

    /// Restore the stored identity, then mark the session ready.
    ///
    /// Never fails: a missing, unreadable or corrupt record all leave the
    /// session signed out. Runs once; later calls return the current
    /// session untouched.
    pub fn initialize(&self) -> Session {
        if self.state.borrow().is_ready() {
            debug!("Session already initialized");
            return self.current_session();
        }

        let identity = self.restore();
        self.state.send_replace(Session::ready(identity));
        self.current_session()
    }

    /// Sign in with email and password.
    ///
    /// On failure the session is left exactly as it was.
    pub async fn sign_in(&self, credentials: &Credentials) -> SessionResult<Identity> {
        credentials.validate()?;
        let _pending = self.begin_auth()?;
        let generation = self.generation.load(Ordering::Acquire);

        let identity = self
            .provider
            .authenticate(credentials)
            .await
            .map_err(|e| {
                warn!("Sign-in failed for {}: {e}", credentials.email);
                SessionError::authentication(e)
            })?;

        self.establish(identity, generation)
    }

    /// Register a new account and sign into it.
    ///
    /// Input is validated locally before the provider is contacted.
    pub async fn sign_up(&self, registration: &Registration) -> SessionResult<Identity> {
        registration.validate(&self.settings.limits)?;
        let _pending = self.begin_auth()?;
        let generation = self.generation.load(Ordering::Acquire);

        let identity = self
            .provider
            .register(registration)
            .await
            .map_err(|e| {
                warn!("Sign-up failed for @{}: {e}", registration.username);
                SessionError::registration(e)
            })?;

        self.establish(identity, generation)
    }

    /// Forget the signed-in identity. Idempotent and infallible.
    ///
    /// Also cancels the outcome of any sign-in or sign-up in flight.
    pub fn sign_out(&self) {
        let _write = self.lock_writes();
        self.generation.fetch_add(1, Ordering::AcqRel);

        let signed_in = self.state.send_if_modified(|session| {
            if session.identity.is_some() {
                session.identity = None;
                true
            } else {
                false
            }
        });

        if let Err(e) = self.storage.remove(USER_KEY) {
            error!("Failed to remove stored identity on sign-out: {e}");
        }

        if signed_in {
            info!("Signed out");
        } else {
            debug!("Sign-out with no active session");
        }
    }

    /// Snapshot of the session. No I/O.
    pub fn current_session(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            receiver: self.state.subscribe(),
        }
    }

    fn begin_auth(&self) -> SessionResult<PendingAuth<'_>> {
        self.auth_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SessionError::operation_in_flight())?;

        Ok(PendingAuth {
            flag: &self.auth_in_flight,
        })
    }

    /// Persist, then publish, unless a sign-out happened since `generation`.
    fn establish(&self, identity: Identity, generation: u64) -> SessionResult<Identity> {
        let json = serde_json::to_string(&identity)?;

        let _write = self.lock_writes();
        if self.generation.load(Ordering::Acquire) != generation {
            warn!("Discarding sign-in as @{}: signed out meanwhile", identity.username);
            return Err(SessionError::superseded());
        }

        self.storage.set(USER_KEY, &json)?;

        self.state.send_replace(Session::ready(Some(identity.clone())));
        info!("Signed in as @{} ({})", identity.username, identity.id);
        Ok(identity)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn restore(&self) -> Option<Identity> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No stored identity (first launch or signed out)");
                return None;
            }
            Err(e) => {
                warn!("Could not read stored identity, starting signed out: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => {
                info!("Restored identity @{} ({})", identity.username, identity.id);
                Some(identity)
            }
            Err(e) => {
                let corrupt = SessionError::persisted_state_corrupt(e.to_string());
                warn!("{corrupt}");
                if self.settings.backup_corrupted {
                    self.discard_corrupted(&raw);
                }
                None
            }
        }
    }

    /// Copy the unreadable record aside and remove it, so storage agrees
    /// with the empty session.
    fn discard_corrupted(&self, raw: &str) {
        let backup_key = format!("{USER_KEY}.corrupted.{}", Utc::now().format(DATE_FORMAT));

        if let Err(e) = self.storage.set(&backup_key, raw) {
            warn!("Failed to back up corrupted identity: {e}");
            return;
        }

        match self.storage.remove(USER_KEY) {
            Ok(()) => warn!("Backed up corrupted identity to '{backup_key}'"),
            Err(e) => warn!("Backed up corrupted identity but could not remove it: {e}"),
        }
    }
}

impl SessionHandle {
    pub fn current(&self) -> Session {
        self.receiver.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.receiver.borrow().is_ready()
    }

    /// Wait for the next change. Returns false once the manager is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }

    /// Wait until restore has finished, returning that session.
    pub async fn wait_ready(&mut self) -> Option<Session> {
        self.receiver
            .wait_for(Session::is_ready)
            .await
            .ok()
            .map(|session| session.clone())
    }
}
