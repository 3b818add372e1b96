use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::format::format_relative_time;
use crate::live::element::{LiveElement, read_target};
use crate::util::time::{Clock, SystemClock};

/// Time between refreshes of every tracked element.
pub const UPDATE_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// Armed on first registration. The `Interval` needs a Tokio runtime, so it is only
/// built once someone awaits [`LiveUpdater::next_tick`].
#[derive(Debug)]
struct Timer {
    armed_at: Instant,
    interval: Option<Interval>,
}

impl Timer {
    fn arm() -> Self {
        Self {
            armed_at: Instant::now(),
            interval: None,
        }
    }

    async fn tick(&mut self) {
        let armed_at = self.armed_at;
        let interval = self.interval.get_or_insert_with(|| {
            let mut interval = time::interval_at(armed_at + UPDATE_INTERVAL, UPDATE_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
    }
}

#[derive(Debug)]
struct Tracked<E> {
    id: ElementId,
    element: E,
}

/// Keeps registered elements' relative time text current.
///
/// Owned by the host; construct one per page/view and call [`LiveUpdater::teardown`]
/// before building the next. At most one timer is live per updater, started by the
/// first registration.
#[derive(Debug)]
pub struct LiveUpdater<E, C = SystemClock> {
    clock: C,
    elements: Vec<Tracked<E>>,
    timer: Option<Timer>,
    next_id: u64,
}

impl<E: LiveElement> Default for LiveUpdater<E, SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<E: LiveElement, C: Clock> LiveUpdater<E, C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            elements: Vec::new(),
            timer: None,
            next_id: 0,
        }
    }

    /// Start tracking `element`. The first registration arms the timer; its first tick
    /// is one interval later.
    pub fn register(&mut self, element: E) -> ElementId {
        if self.timer.is_none() {
            self.timer = Some(Timer::arm());
            info!(interval_secs = UPDATE_INTERVAL.as_secs(), "Live update timer started");
        }

        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.push(Tracked { id, element });
        debug!(id = id.0, tracked = self.elements.len(), "Live element registered");
        id
    }

    /// Stop tracking one element. The timer stops with the last one.
    pub fn unregister(&mut self, id: ElementId) -> Option<E> {
        let pos = self.elements.iter().position(|t| t.id == id)?;
        let tracked = self.elements.remove(pos);
        if self.elements.is_empty() {
            self.timer = None;
            debug!("Last live element removed, timer stopped");
        }
        Some(tracked.element)
    }

    /// Recompute every tracked element's text against the clock's current time.
    ///
    /// Elements whose target is missing or malformed keep their text and stay registered.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let mut updated = 0usize;
        let mut skipped = 0usize;

        for tracked in &mut self.elements {
            match read_target(&tracked.element) {
                Ok(target) => {
                    tracked
                        .element
                        .set_text(&format_relative_time(&target, &now));
                    updated += 1;
                }
                Err(e) => {
                    debug!(id = tracked.id.0, error = %e, "Skipping live element");
                    skipped += 1;
                }
            }
        }

        debug!(updated, skipped, "Live elements refreshed");
    }

    /// Cancel the timer and forget all elements. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.timer.take().is_some() {
            info!(tracked = self.elements.len(), "Live updater torn down");
        }
        self.elements.clear();
    }

    /// Resolves on the next scheduled refresh; never resolves while nothing is registered.
    pub async fn next_tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => timer.tick().await,
            None => std::future::pending::<()>().await,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&E> {
        self.elements
            .iter()
            .find(|t| t.id == id)
            .map(|t| &t.element)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut E> {
        self.elements
            .iter_mut()
            .find(|t| t.id == id)
            .map(|t| &mut t.element)
    }

    /// Tracked elements in registration order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &E)> {
        self.elements.iter().map(|t| (t.id, &t.element))
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
