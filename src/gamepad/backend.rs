//! Gamepad backends
//!
//! A backend drives a [`PadFeed`]: it announces devices and publishes the button
//! snapshot of the tracked pad. The consuming side is a [`GamepadLink`].
//!
//! With the `gamepad` feature the backend is `gilrs` running on a dedicated
//! thread. Without it, [`spawn_backend_thread`] reports that gamepads are
//! unavailable.

use color_eyre::eyre::Result;
use tokio::sync::{mpsc, watch};

use super::{DeviceEvent, PadState};

/// Receiving half of a gamepad backend
pub struct GamepadLink {
    pub events: mpsc::UnboundedReceiver<DeviceEvent>,
    pub state: watch::Receiver<PadState>,
}

/// Sending half of a gamepad backend
///
/// Tracks the first connected pad; button updates for other pads are dropped.
/// When the tracked pad disconnects, the longest-connected remaining pad is
/// adopted and announced again.
pub struct PadFeed {
    events: mpsc::UnboundedSender<DeviceEvent>,
    state: watch::Sender<PadState>,
    tracked: Option<usize>,
    /// Connected pads in connect order
    pads: Vec<(usize, String)>,
}

impl PadFeed {
    /// Create a connected feed/link pair
    #[must_use]
    pub fn channel() -> (Self, GamepadLink) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(PadState::default());
        let feed = Self {
            events: events_tx,
            state: state_tx,
            tracked: None,
            pads: Vec::new(),
        };
        let link = GamepadLink {
            events: events_rx,
            state: state_rx,
        };
        (feed, link)
    }

    /// Announce a pad; the first one announced becomes the tracked pad
    pub fn connect(&mut self, id: usize, name: impl Into<String>) {
        let name = name.into();
        self.pads.retain(|(pad, _)| *pad != id);
        self.pads.push((id, name.clone()));
        if self.tracked.is_none() {
            self.track(id);
        }
        let _ = self.events.send(DeviceEvent::Connected { id, name });
    }

    /// Announce that a pad went away
    ///
    /// If it was the tracked pad, the next connected pad takes over and is
    /// announced with a fresh `Connected` event.
    pub fn disconnect(&mut self, id: usize) {
        self.pads.retain(|(pad, _)| *pad != id);
        let was_tracked = self.tracked == Some(id);
        if was_tracked {
            self.tracked = None;
            self.state.send_replace(PadState::default());
        }
        let _ = self.events.send(DeviceEvent::Disconnected { id });

        if was_tracked && let Some((next, name)) = self.pads.first().cloned() {
            self.track(next);
            let _ = self.events.send(DeviceEvent::Connected { id: next, name });
        }
    }

    fn track(&mut self, id: usize) {
        self.tracked = Some(id);
        self.state.send_replace(PadState::default());
    }

    /// Publish the button snapshot of pad `id`
    pub fn update(&self, id: usize, snapshot: PadState) {
        if self.tracked == Some(id) {
            self.state.send_if_modified(|current| {
                let changed = *current != snapshot;
                *current = snapshot;
                changed
            });
        }
    }

    pub const fn tracked(&self) -> Option<usize> {
        self.tracked
    }

    /// Whether the link side has gone away
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}

/// Start the platform gamepad backend on its own thread
///
/// # Errors
/// Returns an error if the gamepad subsystem cannot be initialized.
#[cfg(feature = "gamepad")]
pub fn spawn_backend_thread() -> Result<GamepadLink> {
    use color_eyre::eyre::eyre;
    use std::sync::mpsc as std_mpsc;
    use tracing::{error, info};

    let (feed, link) = PadFeed::channel();
    let (ready_tx, ready_rx) = std_mpsc::sync_channel::<Result<(), String>>(1);

    // gilrs state stays on the thread that created it
    std::thread::Builder::new()
        .name("gamepad".to_string())
        .spawn(move || match gilrs::Gilrs::new() {
            Ok(gilrs) => {
                let _ = ready_tx.send(Ok(()));
                info!("Gamepad backend started (gilrs)");
                gilrs_backend::run_event_loop(gilrs, feed);
            }
            Err(e) => {
                error!("Gamepad backend failed to start: {e}");
                let _ = ready_tx.send(Err(e.to_string()));
            }
        })
        .map_err(|e| eyre!("Failed to spawn gamepad thread: {e}"))?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(link),
        Ok(Err(msg)) => Err(eyre!("Failed to initialize gamepad support: {msg}")),
        Err(_) => Err(eyre!("Gamepad thread exited during startup")),
    }
}

/// Start the platform gamepad backend on its own thread
///
/// # Errors
/// Always fails: this build has no gamepad backend.
#[cfg(not(feature = "gamepad"))]
pub fn spawn_backend_thread() -> Result<GamepadLink> {
    color_eyre::eyre::bail!("Gamepad support not enabled (rebuild with --features gamepad)")
}

#[cfg(feature = "gamepad")]
mod gilrs_backend {
    use gilrs::{Button, EventType, Gamepad, Gilrs};
    use std::time::Duration;
    use tracing::{debug, info};

    use super::PadFeed;
    use crate::gamepad::PadState;

    /// How often the gilrs event queue is drained
    const BACKEND_TICK: Duration = Duration::from_millis(10);

    /// Standard-layout button numbers and their gilrs names
    const LAYOUT: [(u8, Button); 17] = [
        (0, Button::South),
        (1, Button::East),
        (2, Button::West),
        (3, Button::North),
        (4, Button::LeftTrigger),
        (5, Button::RightTrigger),
        (6, Button::LeftTrigger2),
        (7, Button::RightTrigger2),
        (8, Button::Select),
        (9, Button::Start),
        (10, Button::LeftThumb),
        (11, Button::RightThumb),
        (12, Button::DPadUp),
        (13, Button::DPadDown),
        (14, Button::DPadLeft),
        (15, Button::DPadRight),
        (16, Button::Mode),
    ];

    fn snapshot(pad: &Gamepad<'_>) -> PadState {
        let mut state = PadState::default();
        for (number, button) in LAYOUT {
            state.set(number, pad.is_pressed(button));
        }
        state
    }

    pub(super) fn run_event_loop(mut gilrs: Gilrs, mut feed: PadFeed) {
        for (id, pad) in gilrs.gamepads() {
            info!(id = usize::from(id), name = pad.name(), "Gamepad present at startup");
            feed.connect(usize::from(id), pad.name());
        }

        loop {
            while let Some(event) = gilrs.next_event() {
                let id = usize::from(event.id);
                match event.event {
                    EventType::Connected => {
                        let name = gilrs.gamepad(event.id).name().to_string();
                        info!(id, name = %name, "Gamepad connected");
                        feed.connect(id, name);
                    }
                    EventType::Disconnected => {
                        info!(id, "Gamepad disconnected");
                        feed.disconnect(id);
                    }
                    _ => {}
                }
            }

            if let Some(id) = feed.tracked() {
                let pad = gilrs
                    .gamepads()
                    .find(|(pad_id, _)| usize::from(*pad_id) == id)
                    .map(|(_, pad)| snapshot(&pad));
                if let Some(state) = pad {
                    feed.update(id, state);
                }
            }

            if feed.is_closed() {
                debug!("Gamepad link closed, stopping backend");
                return;
            }

            std::thread::sleep(BACKEND_TICK);
        }
    }
}
