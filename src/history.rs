// In-memory bounded history: CPU/memory time series and the recent-alert log.
// Both live for the process lifetime only and start empty.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{AlertEvent, TimeSeriesPoint};

/// Points kept for the CPU/memory charts.
pub const HISTORY_CAPACITY: usize = 20;

/// Alerts kept for display.
pub const DEFAULT_ALERT_LOG_CAPACITY: usize = 5;

/// Fixed-capacity FIFO. Pushing onto a full buffer drops the oldest entry first.
/// One mutex serializes writers with each other and with readers; reads return a copy.
#[derive(Debug)]
pub struct RollingBuffer<T> {
    items: Mutex<VecDeque<T>>,
    capacity: usize,
}

impl<T: Clone> RollingBuffer<T> {
    /// `capacity` of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    // A panic mid-push cannot leave the deque half-written, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, item: T) {
        let mut items = self.lock();
        if items.len() == self.capacity {
            items.pop_front();
        }
        items.push_back(item);
    }

    /// Oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Rolling CPU/memory series feeding the charts. Capacity is fixed at [`HISTORY_CAPACITY`].
#[derive(Debug)]
pub struct TimeSeriesStore {
    points: RollingBuffer<TimeSeriesPoint>,
}

impl Default for TimeSeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeriesStore {
    pub fn new() -> Self {
        Self {
            points: RollingBuffer::new(HISTORY_CAPACITY),
        }
    }

    pub fn append(&self, point: TimeSeriesPoint) {
        self.points.push(point);
    }

    /// Arrival order, oldest first.
    pub fn snapshot_all(&self) -> Vec<TimeSeriesPoint> {
        self.points.to_vec()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Most recent alerts, consumer side of the evaluator.
#[derive(Debug)]
pub struct AlertLog {
    events: RollingBuffer<AlertEvent>,
}

impl Default for AlertLog {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_LOG_CAPACITY)
    }
}

impl AlertLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: RollingBuffer::new(capacity),
        }
    }

    pub fn record(&self, event: AlertEvent) {
        self.events.push(event);
    }

    /// Newest first.
    pub fn recent(&self) -> Vec<AlertEvent> {
        let mut events = self.events.to_vec();
        events.reverse();
        events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
