//! Asset readiness tracking.
//!
//! Map images load outside the engine. The host reports each outcome
//! through an [`AssetSender`]; the controller drains the channel on every
//! command and tick. Playback becomes ready once every registered image
//! has loaded, and can never become ready after a failure.
//!
//! ```text
//!   host loader --AssetEvent--> [unbounded channel] --drain()--> AssetTracker
//! ```

use crossbeam_channel::{Receiver, Sender};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::error::AssetLoadError;

/// The outcome of one asset load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetEvent {
    /// The image is available.
    Loaded {
        /// Image location, as registered.
        image: String,
    },
    /// The image could not be loaded.
    Failed {
        /// Image location, as registered.
        image: String,
        /// Loader-supplied reason.
        reason: String,
    },
}

/// Cloneable handle for reporting load outcomes from the host.
#[derive(Clone, Debug)]
pub struct AssetSender {
    tx: Sender<AssetEvent>,
}

impl AssetSender {
    /// Report an image as loaded.
    pub fn loaded(&self, image: impl Into<String>) {
        self.send(AssetEvent::Loaded {
            image: image.into(),
        });
    }

    /// Report an image as failed.
    pub fn failed(&self, image: impl Into<String>, reason: impl Into<String>) {
        self.send(AssetEvent::Failed {
            image: image.into(),
            reason: reason.into(),
        });
    }

    /// Report any outcome.
    pub fn send(&self, event: AssetEvent) {
        // Only fails once the tracker is dropped.
        let _ = self.tx.send(event);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// Overall readiness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    /// Some images have not reported yet.
    Loading {
        /// Number of images still outstanding.
        pending: usize,
    },
    /// Every image loaded.
    Ready,
    /// An image failed. Terminal.
    Failed(AssetLoadError),
}

/// Tracks load outcomes for a fixed set of images.
#[derive(Debug)]
pub struct AssetTracker {
    assets: IndexMap<String, LoadState>,
    tx: Sender<AssetEvent>,
    rx: Receiver<AssetEvent>,
    failure: Option<AssetLoadError>,
}

impl AssetTracker {
    /// Track the given images. Duplicates are tracked once.
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            assets: images
                .into_iter()
                .map(|image| (image.into(), LoadState::Pending))
                .collect(),
            tx,
            rx,
            failure: None,
        }
    }

    /// A handle for the host's loader.
    pub fn sender(&self) -> AssetSender {
        AssetSender {
            tx: self.tx.clone(),
        }
    }

    /// Apply every queued event. Returns the status afterwards.
    pub fn drain(&mut self) -> AssetStatus {
        while let Ok(event) = self.rx.try_recv() {
            self.record(event);
        }
        self.status()
    }

    fn record(&mut self, event: AssetEvent) {
        let (image, next) = match &event {
            AssetEvent::Loaded { image } => (image, LoadState::Loaded),
            AssetEvent::Failed { image, .. } => (image, LoadState::Failed),
        };
        let Some(state) = self.assets.get_mut(image) else {
            warn!(%image, "load event for unregistered asset");
            return;
        };
        if *state != LoadState::Pending {
            return;
        }
        *state = next;
        match event {
            AssetEvent::Loaded { image } => info!(%image, "asset loaded"),
            AssetEvent::Failed { image, reason } => {
                warn!(%image, %reason, "asset failed to load");
                if self.failure.is_none() {
                    self.failure = Some(AssetLoadError { image, reason });
                }
            }
        }
    }

    /// Current status, without draining.
    pub fn status(&self) -> AssetStatus {
        if let Some(failure) = &self.failure {
            return AssetStatus::Failed(failure.clone());
        }
        match self.pending().count() {
            0 => AssetStatus::Ready,
            pending => AssetStatus::Loading { pending },
        }
    }

    /// Returns `true` once every image has loaded.
    pub fn is_ready(&self) -> bool {
        self.status() == AssetStatus::Ready
    }

    /// The first recorded failure, if any.
    pub fn failure(&self) -> Option<&AssetLoadError> {
        self.failure.as_ref()
    }

    /// Images that have not reported yet, in registration order.
    pub fn pending(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets
            .iter()
            .filter(|(_, state)| **state == LoadState::Pending)
            .map(|(image, _)| image.as_str())
    }

    /// Every tracked image, in registration order.
    pub fn images(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_after_every_image_loads() {
        let mut tracker = AssetTracker::new(["a.png", "b.png"]);
        let sender = tracker.sender();
        assert_eq!(tracker.drain(), AssetStatus::Loading { pending: 2 });
        sender.loaded("b.png");
        assert_eq!(tracker.drain(), AssetStatus::Loading { pending: 1 });
        assert_eq!(tracker.pending().collect::<Vec<_>>(), vec!["a.png"]);
        sender.loaded("a.png");
        assert_eq!(tracker.drain(), AssetStatus::Ready);
        assert!(tracker.is_ready());
    }

    #[test]
    fn duplicate_images_tracked_once() {
        let mut tracker = AssetTracker::new(["a.png", "a.png"]);
        tracker.sender().loaded("a.png");
        assert_eq!(tracker.drain(), AssetStatus::Ready);
    }

    #[test]
    fn failure_is_terminal() {
        let mut tracker = AssetTracker::new(["a.png", "b.png"]);
        let sender = tracker.sender();
        sender.failed("a.png", "404");
        sender.loaded("b.png");
        let expected = AssetLoadError {
            image: "a.png".into(),
            reason: "404".into(),
        };
        assert_eq!(tracker.drain(), AssetStatus::Failed(expected.clone()));
        // A late success for the failed image changes nothing.
        sender.loaded("a.png");
        assert_eq!(tracker.drain(), AssetStatus::Failed(expected));
    }

    #[test]
    fn unknown_images_are_ignored() {
        let mut tracker = AssetTracker::new(["a.png"]);
        tracker.sender().loaded("z.png");
        assert_eq!(tracker.drain(), AssetStatus::Loading { pending: 1 });
    }

    #[test]
    fn events_from_another_thread() {
        let mut tracker = AssetTracker::new(["a.png"]);
        let sender = tracker.sender();
        std::thread::spawn(move || sender.loaded("a.png"))
            .join()
            .unwrap();
        assert_eq!(tracker.drain(), AssetStatus::Ready);
    }
}
