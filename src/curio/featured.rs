//! Featured-preview rotation.
//!
//! The landing view cycles through a small preview set on a fixed
//! interval. State lives in explicit objects with an explicit
//! lifecycle: [`Rotation`] owns the index, [`RotationTimer`] owns the
//! interval task and is stopped (not leaked) when the view goes away,
//! and [`RequestFence`] orders overlapping searches so a stale response
//! can never overwrite a newer one.

use crate::model::Artwork;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Topics the landing preview draws from.
pub const FEATURED_TOPICS: [&str; 11] = [
    "landscape",
    "portrait",
    "abstract",
    "sculpture",
    "impressionism",
    "renaissance",
    "modern art",
    "photography",
    "still life",
    "architecture",
    "mythology",
];

/// Number of artworks fetched for one preview set.
pub const FEATURED_PREVIEW_SIZE: u32 = 12;

/// Default rotation period.
pub const ROTATION_PERIOD: Duration = Duration::from_millis(4500);

/// Pick a topic, avoiding an immediate repeat of the previous one.
pub fn pick_topic(exclude: Option<&str>) -> &'static str {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as usize;
    let mut idx = nanos % FEATURED_TOPICS.len();
    if Some(FEATURED_TOPICS[idx]) == exclude {
        idx = (idx + 1) % FEATURED_TOPICS.len();
    }
    FEATURED_TOPICS[idx]
}

/// Only artworks that can actually render make it into the preview.
pub fn preview_worthy(artworks: Vec<Artwork>) -> Vec<Artwork> {
    artworks
        .into_iter()
        .filter(|a| a.image_id.is_some())
        .collect()
}

/// Pure index cycler over a preview list. Tolerates an empty list.
#[derive(Debug, Default)]
pub struct Rotation {
    len: usize,
    current: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance to the next index, wrapping. No-op on an empty list.
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }
}

/// Monotonic sequence over in-flight searches. Overlapping requests
/// each take a ticket; only a response carrying the latest ticket is
/// admitted, so whichever request was issued last wins regardless of
/// arrival order.
#[derive(Debug, Default)]
pub struct RequestFence {
    latest: u64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn admit(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Repeating timer driving the rotation. `start` spawns the interval
/// task; `stop` tears it down so nothing ticks after the view is gone.
pub struct RotationTimer {
    handle: Option<JoinHandle<()>>,
}

impl RotationTimer {
    pub fn start(period: Duration, ticks: mpsc::Sender<()>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick of a tokio interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if ticks.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
