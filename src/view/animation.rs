//! Score count-up animation, decoupled from any render loop

use async_trait::async_trait;
use std::time::Duration;

/// Length of the count-up
pub const SCORE_ANIMATION: Duration = Duration::from_millis(1000);

/// Circumference of the score ring
pub const RING_CIRCUMFERENCE: f64 = 283.0;

/// Linear interpolation from 0 to a target score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAnimation {
    target: u8,
    duration: Duration,
}

impl ScoreAnimation {
    pub fn new(target: u8) -> Self {
        Self::with_duration(target, SCORE_ANIMATION)
    }
    
    pub fn with_duration(target: u8, duration: Duration) -> Self {
        Self { target, duration }
    }
    
    pub fn target(&self) -> u8 {
        self.target
    }
    
    /// Fraction of the animation completed, clamped to [0, 1]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
    
    /// Displayed value at `elapsed`. Reaches exactly `target` once done.
    pub fn value_at(&self, elapsed: Duration) -> u8 {
        (self.target as f64 * self.progress(elapsed)).round() as u8
    }
    
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
    
    /// Stroke offset of the progress ring for a displayed value
    pub fn ring_offset(value: u8) -> f64 {
        RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * (value as f64 / 100.0)
    }
    
    /// Drive the animation to completion, reporting each frame's value
    pub async fn run<F>(&self, clock: &mut dyn FrameClock, mut on_frame: F)
    where
        F: FnMut(u8) + Send,
    {
        loop {
            let elapsed = clock.next_frame().await;
            on_frame(self.value_at(elapsed));
            
            if self.is_done(elapsed) {
                break;
            }
        }
    }
}

/// Source of animation frames
#[async_trait]
pub trait FrameClock: Send {
    /// Wait for the next frame; returns time elapsed since the clock started
    async fn next_frame(&mut self) -> Duration;
}

/// Real-time frames at a fixed interval
pub struct TokioFrameClock {
    start: tokio::time::Instant,
    interval: tokio::time::Interval,
}

impl TokioFrameClock {
    /// ~60 frames per second
    pub fn new() -> Self {
        Self::with_period(Duration::from_millis(16))
    }
    
    pub fn with_period(period: Duration) -> Self {
        Self {
            start: tokio::time::Instant::now(),
            interval: tokio::time::interval(period),
        }
    }
}

impl Default for TokioFrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameClock for TokioFrameClock {
    async fn next_frame(&mut self) -> Duration {
        self.interval.tick().await;
        self.start.elapsed()
    }
}

/// Advances by a fixed step on every frame without waiting
#[derive(Debug, Clone)]
pub struct SteppedClock {
    elapsed: Duration,
    step: Duration,
}

impl SteppedClock {
    pub fn new(step: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            step,
        }
    }
}

#[async_trait]
impl FrameClock for SteppedClock {
    async fn next_frame(&mut self) -> Duration {
        self.elapsed += self.step;
        self.elapsed
    }
}
