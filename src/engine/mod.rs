//! Notification display engine
//!
//! Drives a visible, non-blocking cycle of notification pop-ups against a
//! [`Surface`]: wait `startDelay`, show the first item, then admit one
//! item per `cycleDuration` in list order, either wrapping (`loop`) or
//! cancelling the cadence once the list is exhausted. Each displayed item
//! runs its own `displayDuration` countdown to its exit, independent of
//! the cycle timer, so several items can be on screen at once in wide
//! mode. Narrow viewports hold a hard single-item invariant instead.
pub mod surface;
pub mod viewport;

pub use surface::{Placement, RenderOptions, Surface};
pub use viewport::{NARROW_BREAKPOINT, ViewportMode};

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::feed::models::{DisplayConfig, NotificationItem};

/// Length of the exit transition. Matches the widget stylesheet, and
/// removal runs on this fixed timer rather than a transition-completion
/// event.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Per-session identity of a displayed element. Distinct from
/// `NotificationItem::id`, which repeats across loop iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemState {
    Visible,
    Leaving,
}

struct ActiveItem {
    handle: Handle,
    index: usize,
    state: ItemState,
}

/// User interactions reported back by the surface
#[derive(Debug, Clone, Copy)]
pub enum SurfaceEvent {
    /// The close control was activated
    Dismissed(Handle),
    /// The element itself was activated
    Clicked(Handle),
}

#[derive(Debug, Clone, Copy)]
enum TimerFired {
    ExpireVisible(Handle),
    FinishExit(Handle),
}

/// Sender half a surface implementation uses to report interactions
#[derive(Clone)]
pub struct EngineHandle {
    tx: mpsc::UnboundedSender<SurfaceEvent>,
}

impl EngineHandle {
    pub fn dismiss(&self, handle: Handle) {
        let _ = self.tx.send(SurfaceEvent::Dismissed(handle));
    }

    pub fn click(&self, handle: Handle) {
        let _ = self.tx.send(SurfaceEvent::Clicked(handle));
    }
}

pub struct DisplayEngine<S: Surface> {
    items: Vec<NotificationItem>,
    config: DisplayConfig,
    mode: ViewportMode,
    surface: S,
    active: Vec<ActiveItem>,
    cursor: usize,
    next_handle: u64,
    timer_tx: mpsc::UnboundedSender<TimerFired>,
    timer_rx: mpsc::UnboundedReceiver<TimerFired>,
    events_rx: mpsc::UnboundedReceiver<SurfaceEvent>,
}

impl<S: Surface> DisplayEngine<S> {
    pub fn new(
        items: Vec<NotificationItem>,
        config: DisplayConfig,
        mode: ViewportMode,
        surface: S,
    ) -> (Self, EngineHandle) {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let engine = Self {
            items,
            config,
            mode,
            surface,
            active: Vec::new(),
            cursor: 0,
            next_handle: 0,
            timer_tx,
            timer_rx,
            events_rx,
        };
        (engine, EngineHandle { tx: events_tx })
    }

    /// Run the display cycle to completion. With `loop` enabled this
    /// future never resolves; the embedding side tears it down with the
    /// page. Without `loop` it resolves once the cadence has
    /// self-cancelled and the last visible item has been removed.
    pub async fn run(mut self) {
        if self.items.is_empty() {
            debug!("No notifications to display, engine stays idle");
            return;
        }

        time::sleep(Duration::from_millis(self.config.start_delay)).await;

        let mut cycle =
            time::interval(Duration::from_millis(self.config.cycle_duration.max(1)));
        cycle.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut scheduling = true;

        loop {
            tokio::select! {
                _ = cycle.tick(), if scheduling => {
                    if self.cursor >= self.items.len() {
                        if self.config.loop_enabled {
                            self.cursor = 0;
                            self.show_next();
                        } else {
                            // List exhausted: the cadence self-cancels.
                            // Items still on screen run out their own
                            // lifetimes below.
                            debug!("Notification list exhausted, cycle stopped");
                            scheduling = false;
                        }
                    } else {
                        self.show_next();
                    }
                }
                Some(fired) = self.timer_rx.recv() => self.on_timer(fired),
                Some(event) = self.events_rx.recv() => self.on_event(event),
            }

            if !scheduling && self.active.is_empty() {
                break;
            }
        }
    }

    fn show_next(&mut self) {
        let index = self.cursor;

        // Narrow viewports display at most one notification: whatever is
        // on screen is evicted without playing its exit transition.
        if self.mode == ViewportMode::Narrow {
            for evicted in self.active.drain(..) {
                self.surface.detach(evicted.handle);
            }
        }

        let handle = Handle(self.next_handle);
        self.next_handle += 1;

        let item = &self.items[index];
        let options = RenderOptions {
            theme: self.config.theme,
            placement: self.mode.placement(),
            show_close_button: self.config.show_close_button,
            clickable: item.click_url().is_some(),
            max_visible: self.config.max_visible_notifications,
        };
        // Insert hidden, then apply the shown state so the surface's
        // entry transition runs.
        self.surface.insert(handle, item, &options);
        self.surface.reveal(handle);

        self.active.push(ActiveItem {
            handle,
            index,
            state: ItemState::Visible,
        });
        self.schedule(
            TimerFired::ExpireVisible(handle),
            Duration::from_millis(self.config.display_duration),
        );
        self.cursor += 1;
    }

    fn schedule(&self, fired: TimerFired, after: Duration) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            time::sleep(after).await;
            let _ = tx.send(fired);
        });
    }

    fn on_timer(&mut self, fired: TimerFired) {
        match fired {
            TimerFired::ExpireVisible(handle) => self.begin_exit(handle),
            TimerFired::FinishExit(handle) => {
                // Timers for items already evicted in narrow mode land
                // here with no matching active entry.
                if let Some(position) =
                    self.active.iter().position(|a| a.handle == handle)
                {
                    self.active.remove(position);
                    self.surface.detach(handle);
                }
            }
        }
    }

    fn on_event(&mut self, event: SurfaceEvent) {
        match event {
            // Manual dismissal skips the rest of the visible time. It
            // never touches the cycle timer or any other item's state.
            SurfaceEvent::Dismissed(handle) => self.begin_exit(handle),
            SurfaceEvent::Clicked(handle) => {
                let Some(index) = self
                    .active
                    .iter()
                    .find(|a| a.handle == handle)
                    .map(|a| a.index)
                else {
                    return;
                };
                // Click-through does not pause or cancel the item's own
                // dismissal timer.
                if let Some(url) = self.items[index].click_url() {
                    self.surface.open_url(url);
                }
            }
        }
    }

    fn begin_exit(&mut self, handle: Handle) {
        let Some(active) = self.active.iter_mut().find(|a| a.handle == handle) else {
            return;
        };
        if active.state != ItemState::Visible {
            return;
        }
        active.state = ItemState::Leaving;
        self.surface.begin_exit(handle);
        self.schedule(TimerFired::FinishExit(handle), EXIT_TRANSITION);
    }
}
