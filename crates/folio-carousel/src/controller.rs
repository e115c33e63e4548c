//! Timer-driven carousel controller.

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::sequence::ImageSequence;
use crate::state::CarouselState;

/// The displayed image element a controller drives.
pub trait CarouselTarget: Send + 'static {
    /// Set the element's opacity (0.0 to 1.0).
    fn set_opacity(&mut self, opacity: f32);

    /// Point the element at a new image reference.
    fn set_source(&mut self, source: &str);
}

/// Shortest interval a running controller ticks at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Timing and opacity levels for one carousel transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    /// Time between transitions
    pub interval: Duration,

    /// Time the element stays dimmed before the swap
    pub fade_delay: Duration,

    /// Opacity applied while fading out
    pub dimmed_opacity: f32,

    /// Opacity restored after the swap
    pub full_opacity: f32,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(2000),
            fade_delay: Duration::from_millis(200),
            dimmed_opacity: 0.8,
            full_opacity: 1.0,
        }
    }
}

/// Cycles a [`CarouselTarget`] through an [`ImageSequence`].
///
/// The target is assumed to already show the first entry; the controller
/// never sets it.
pub struct CarouselController<T> {
    sequence: ImageSequence,
    target: T,
    timing: CarouselTiming,
    state: CarouselState,
}

impl<T: CarouselTarget> CarouselController<T> {
    /// Create a controller with the default timing.
    pub fn new(sequence: ImageSequence, target: T) -> Self {
        let state = CarouselState::new(sequence.len());
        Self {
            sequence,
            target,
            timing: CarouselTiming::default(),
            state,
        }
    }

    /// Override the transition timing.
    ///
    /// A zero interval is raised to [`MIN_INTERVAL`].
    pub fn with_timing(mut self, timing: CarouselTiming) -> Self {
        self.timing = CarouselTiming {
            interval: timing.interval.max(MIN_INTERVAL),
            ..timing
        };
        self
    }

    pub fn timing(&self) -> &CarouselTiming {
        &self.timing
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// The image reference currently on display.
    pub fn current_source(&self) -> &str {
        self.sequence.get(self.state.cursor())
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Run one transition: dim, wait out the fade delay, swap, restore.
    ///
    /// The cursor is committed only after the swap.
    pub async fn transition(&mut self) {
        self.fade_out();
        time::sleep(self.timing.fade_delay).await;
        self.swap();
    }

    fn fade_out(&mut self) {
        self.target.set_opacity(self.timing.dimmed_opacity);
    }

    fn swap(&mut self) {
        let next = self.state.peek_next();
        self.target.set_source(self.sequence.get(next));
        self.target.set_opacity(self.timing.full_opacity);
        self.state.advance();

        tracing::debug!(
            index = next,
            source = self.sequence.get(next),
            "Carousel advanced"
        );
    }

    /// Spawn the controller on the current tokio runtime.
    ///
    /// The first transition starts one interval after this call. The task
    /// runs until [`CarouselHandle::stop`] is called or the handle is dropped.
    pub fn start(mut self) -> CarouselHandle<T> {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let (index_tx, index_rx) = watch::channel(self.state.cursor());
        let sequence = self.sequence.clone();
        let interval = self.timing.interval;

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        self.fade_out();

                        tokio::select! {
                            _ = &mut stop_rx => {
                                // Stopped mid-fade: leave the current image fully visible
                                self.target.set_opacity(self.timing.full_opacity);
                                break;
                            }
                            _ = time::sleep(self.timing.fade_delay) => {}
                        }

                        self.swap();
                        let _ = index_tx.send(self.state.cursor());
                    }
                }
            }

            self
        });

        CarouselHandle {
            stop: stop_tx,
            task,
            index: index_rx,
            sequence,
        }
    }
}

/// Handle to a running carousel.
///
/// Dropping the handle stops the carousel.
pub struct CarouselHandle<T> {
    stop: oneshot::Sender<()>,
    task: JoinHandle<CarouselController<T>>,
    index: watch::Receiver<usize>,
    sequence: ImageSequence,
}

impl<T> CarouselHandle<T> {
    /// Index of the last committed image.
    pub fn current_index(&self) -> usize {
        *self.index.borrow()
    }

    /// Reference of the last committed image.
    pub fn current_source(&self) -> &str {
        self.sequence.get(self.current_index())
    }

    /// Wait until the carousel commits its next image.
    ///
    /// Returns `None` once the carousel has stopped.
    pub async fn changed(&mut self) -> Option<usize> {
        self.index.changed().await.ok()?;
        Some(*self.index.borrow_and_update())
    }

    /// Stop the carousel and hand back the controller with its target.
    pub async fn stop(self) -> Result<CarouselController<T>, JoinError> {
        let _ = self.stop.send(());
        self.task.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Opacity(f32),
        Source(String),
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl CarouselTarget for Recorder {
        fn set_opacity(&mut self, opacity: f32) {
            self.events.push(Event::Opacity(opacity));
        }

        fn set_source(&mut self, source: &str) {
            self.events.push(Event::Source(source.to_string()));
        }
    }

    fn sequence() -> ImageSequence {
        ImageSequence::new(["a.jpg", "b.jpg", "c.jpg", "d.jpg"]).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn transition_dims_then_swaps() {
        let mut controller = CarouselController::new(sequence(), Recorder::default());

        let started = Instant::now();
        controller.transition().await;

        assert!(started.elapsed() >= Duration::from_millis(200));
        assert_eq!(controller.current_source(), "b.jpg");
        assert_eq!(
            controller.target().events,
            vec![
                Event::Opacity(0.8),
                Event::Source("b.jpg".to_string()),
                Event::Opacity(1.0),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn six_ticks_land_on_third_entry() {
        let handle = CarouselController::new(sequence(), Recorder::default()).start();

        time::sleep(Duration::from_millis(6 * 2000 + 300)).await;

        assert_eq!(handle.current_index(), 2);
        assert_eq!(handle.current_source(), "c.jpg");

        let controller = handle.stop().await.unwrap();
        assert_eq!(controller.state().cursor(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn index_follows_tick_count() {
        let mut handle = CarouselController::new(sequence(), Recorder::default()).start();

        for n in 1..=9 {
            assert_eq!(handle.changed().await, Some(n % 4));
        }

        handle.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn full_period_returns_to_first_source() {
        let handle = CarouselController::new(sequence(), Recorder::default()).start();
        let initial = handle.current_source().to_string();

        time::sleep(Duration::from_millis(4 * 2000 + 300)).await;

        assert_eq!(handle.current_source(), initial);
        handle.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_happens_before_first_interval() {
        let handle = CarouselController::new(sequence(), Recorder::default()).start();

        time::sleep(Duration::from_millis(1999)).await;

        let controller = handle.stop().await.unwrap();
        assert!(controller.target().events.is_empty());
        assert_eq!(controller.current_source(), "a.jpg");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_during_fade_restores_opacity() {
        let handle = CarouselController::new(sequence(), Recorder::default()).start();

        time::sleep(Duration::from_millis(2100)).await;

        let controller = handle.stop().await.unwrap();
        assert_eq!(
            controller.into_target().events,
            vec![Event::Opacity(0.8), Event::Opacity(1.0)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn custom_timing_is_respected() {
        let timing = CarouselTiming {
            interval: Duration::from_millis(500),
            fade_delay: Duration::from_millis(50),
            ..Default::default()
        };
        let handle = CarouselController::new(sequence(), Recorder::default())
            .with_timing(timing)
            .start();

        time::sleep(Duration::from_millis(3 * 500 + 60)).await;

        assert_eq!(handle.current_index(), 3);
        handle.stop().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_is_clamped() {
        let timing = CarouselTiming {
            interval: Duration::ZERO,
            fade_delay: Duration::ZERO,
            ..Default::default()
        };
        let controller =
            CarouselController::new(sequence(), Recorder::default()).with_timing(timing);
        assert_eq!(controller.timing().interval, MIN_INTERVAL);

        let mut handle = controller.start();
        assert!(handle.changed().await.is_some());

        handle.stop().await.unwrap();
    }
}
