//! Gamepad input
//!
//! A backend reports device connect/disconnect events and keeps a snapshot of the
//! tracked pad's buttons in a `watch` channel. While a pad is connected,
//! [`GamepadPoller`] reads that snapshot on a fixed interval and turns pressed
//! buttons into [`Action`]s. Held buttons fire again on every tick.
//!
//! Only one pad is tracked at a time. When it goes away the backend announces
//! the next pad that is still connected, if any.
//!
//! Every connection is a new poll session. Actions queued by an earlier session
//! are dropped by [`PadActions`], so nothing from a disconnected pad reaches the
//! slider.

mod backend;

pub use backend::{GamepadLink, PadFeed, spawn_backend_thread};

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::action::{Action, ButtonMap, MAX_BUTTON};

/// Device lifecycle event from a gamepad backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    Connected { id: usize, name: String },
    Disconnected { id: usize },
}

/// Pressed buttons of one pad, by standard-layout button number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadState {
    pressed: u32,
}

impl PadState {
    /// Mark `button` pressed or released; numbers past the layout are ignored
    pub fn set(&mut self, button: u8, pressed: bool) {
        if button > MAX_BUTTON {
            return;
        }
        let bit = 1u32 << button;
        if pressed {
            self.pressed |= bit;
        } else {
            self.pressed &= !bit;
        }
    }

    #[must_use]
    pub const fn is_pressed(&self, button: u8) -> bool {
        button <= MAX_BUTTON && self.pressed & (1u32 << button) != 0
    }

    #[must_use]
    pub const fn any_pressed(&self) -> bool {
        self.pressed != 0
    }

    /// Snapshot with exactly the given buttons pressed
    #[must_use]
    pub fn with_pressed(buttons: &[u8]) -> Self {
        let mut state = Self::default();
        for &button in buttons {
            state.set(button, true);
        }
        state
    }
}

/// Actions for one poll of `state`, in ascending button order
#[must_use]
pub fn poll_actions(state: &PadState, map: &ButtonMap) -> Vec<Action> {
    map.bindings()
        .into_iter()
        .filter(|(button, _)| state.is_pressed(*button))
        .map(|(_, action)| action)
        .collect()
}

/// Action tagged with the poll session that produced it
type SessionAction = (u64, Action);

/// Receiving end of a [`GamepadPoller`]
///
/// Yields only actions from the live poll session.
pub struct PadActions {
    rx: mpsc::UnboundedReceiver<SessionAction>,
    session: Arc<AtomicU64>,
}

impl PadActions {
    fn is_live(&self, session: u64) -> bool {
        session == self.session.load(Ordering::Acquire)
    }

    /// Next action of the live session; `None` once the poller is gone
    pub async fn recv(&mut self) -> Option<Action> {
        loop {
            let (session, action) = self.rx.recv().await?;
            if self.is_live(session) {
                return Some(action);
            }
            debug!(session, action = action.name(), "dropping stale gamepad action");
        }
    }

    /// Non-blocking [`recv`](Self::recv)
    ///
    /// # Errors
    /// `Empty` when no live action is queued, `Disconnected` once the poller is gone.
    pub fn try_recv(&mut self) -> Result<Action, TryRecvError> {
        loop {
            let (session, action) = self.rx.try_recv()?;
            if self.is_live(session) {
                return Ok(action);
            }
        }
    }
}

/// Owns the recurring button poll for the tracked gamepad
///
/// The poll task is started on connect and aborted on disconnect, on reconnect,
/// and when the poller is dropped. Each of those also ends the poll session.
pub struct GamepadPoller {
    interval: Duration,
    map: ButtonMap,
    actions_tx: mpsc::UnboundedSender<SessionAction>,
    session: Arc<AtomicU64>,
    tracked: Option<usize>,
    task: Option<JoinHandle<()>>,
}

impl GamepadPoller {
    /// Create a poller and the receiver its actions arrive on
    #[must_use]
    pub fn new(interval: Duration, map: ButtonMap) -> (Self, PadActions) {
        let (actions_tx, rx) = mpsc::unbounded_channel();
        let session = Arc::new(AtomicU64::new(0));
        let poller = Self {
            interval,
            map,
            actions_tx,
            session: Arc::clone(&session),
            tracked: None,
            task: None,
        };
        (poller, PadActions { rx, session })
    }

    /// Start polling pad `id`
    ///
    /// Returns `false` (and does nothing) if another pad is already tracked.
    /// Must be called from within a tokio runtime.
    pub fn connect(&mut self, id: usize, state: watch::Receiver<PadState>) -> bool {
        match self.tracked {
            Some(current) if current != id => {
                debug!(id, current, "ignoring additional gamepad");
                return false;
            }
            _ => {}
        }

        self.cancel();
        self.tracked = Some(id);
        let session = self.session.fetch_add(1, Ordering::AcqRel) + 1;
        self.task = Some(tokio::spawn(poll_loop(
            self.interval,
            self.map,
            state,
            self.actions_tx.clone(),
            session,
        )));
        info!(id, interval_ms = self.interval.as_millis() as u64, "gamepad polling started");
        true
    }

    /// Stop polling if `id` is the tracked pad
    ///
    /// Returns whether the tracked pad went away.
    pub fn disconnect(&mut self, id: usize) -> bool {
        if self.tracked != Some(id) {
            return false;
        }
        self.cancel();
        self.tracked = None;
        info!(id, "gamepad polling stopped");
        true
    }

    /// Route a backend event to `connect`/`disconnect`
    pub fn handle_device_event(
        &mut self,
        event: &DeviceEvent,
        state: &watch::Receiver<PadState>,
    ) -> bool {
        match event {
            DeviceEvent::Connected { id, .. } => self.connect(*id, state.clone()),
            DeviceEvent::Disconnected { id } => self.disconnect(*id),
        }
    }

    pub const fn tracked(&self) -> Option<usize> {
        self.tracked
    }

    /// Whether a poll task is currently scheduled
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.session.fetch_add(1, Ordering::AcqRel);
        }
    }
}

impl Drop for GamepadPoller {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn poll_loop(
    period: Duration,
    map: ButtonMap,
    mut state: watch::Receiver<PadState>,
    actions_tx: mpsc::UnboundedSender<SessionAction>,
    session: u64,
) {
    // First read one full period after connect
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        if state.has_changed().is_err() {
            debug!("gamepad backend closed, stopping poll");
            return;
        }
        let snapshot = *state.borrow_and_update();

        for action in poll_actions(&snapshot, &map) {
            if actions_tx.send((session, action)).is_err() {
                return;
            }
        }
    }
}
