//! Application state composition.
//!
//! The top-level state for the TUI:
//! - `AppState` - everything the reducer mutates and the renderer reads
//! - `View` - which screen is visible (exactly one at a time)
//! - `RequestState` - the single in-flight API request, if any
//!
//! ```text
//! AppState
//! ├── view: View                  (Login | Dashboard | Transfer)
//! ├── session: Option<Account>    (set by authenticate, cleared by logout)
//! ├── login: LoginFormState       (name + PIN fields)
//! ├── transfer: TransferFormState (recipient + amount fields)
//! ├── notice: NoticeState         (transient banner, 5s auto-dismiss)
//! └── request: RequestState       (busy indicator + sequencing)
//! ```

use teller_core::api::Account;

use crate::features::login::LoginFormState;
use crate::features::notify::NoticeState;
use crate::features::transfer::TransferFormState;

/// The currently visible top-level screen.
///
/// Transfer is only reachable from Dashboard and vice versa; Login is
/// reachable from either via logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
    Transfer,
}

/// Identifier for one spawned API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Monotonic request id generator, owned by the reducer.
#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
}

impl RequestSeq {
    pub fn next_id(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Authenticate,
    Transfer,
}

/// API request state.
///
/// At most one request is in flight. Completions carry the id they were
/// spawned with; anything that doesn't match the in-flight id is stale and
/// must not touch the session.
#[derive(Debug, Default)]
pub enum RequestState {
    /// No request running, forms accept submits.
    #[default]
    Idle,
    /// A request is running; further submits are ignored until it resolves.
    InFlight { id: RequestId, kind: RequestKind },
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        !matches!(self, RequestState::Idle)
    }

    /// Returns to `Idle` if `id` is the in-flight request.
    ///
    /// Returns false (and stays put) for a stale completion.
    pub fn finish_if_current(&mut self, id: RequestId) -> bool {
        match self {
            RequestState::InFlight { id: current, .. } if *current == id => {
                *self = RequestState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The visible screen.
    pub view: View,
    /// Local cache of the authenticated account; `None` when logged out.
    pub session: Option<Account>,
    /// Login form (name + PIN).
    pub login: LoginFormState,
    /// Transfer form (recipient + amount).
    pub transfer: TransferFormState,
    /// Transient notification banner.
    pub notice: NoticeState,
    /// The in-flight request, if any.
    pub request: RequestState,
    /// Request id generator.
    pub request_seq: RequestSeq,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            view: View::default(),
            session: None,
            login: LoginFormState::default(),
            transfer: TransferFormState::default(),
            notice: NoticeState::default(),
            request: RequestState::default(),
            request_seq: RequestSeq::default(),
            spinner_frame: 0,
        }
    }

    /// Clears the session and all form values and returns to the login view.
    pub fn log_out(&mut self) {
        self.session = None;
        self.view = View::Login;
        self.login.clear();
        self.transfer.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
