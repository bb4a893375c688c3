//! Fixed-cadence message sources.

use std::time::Duration;

/// A recurring message source declared by the model.
///
/// Subscriptions are re-declared after every update; the runtime keeps a
/// next-fire instant per declared subscription, matched by position.
pub trait Subscription<M> {
    /// Interval between messages.
    fn period(&self) -> Duration;

    /// Produce the message for one firing.
    fn message(&self) -> M;
}

/// Emit a message every `period`.
pub struct Every<M> {
    period: Duration,
    make: Box<dyn Fn() -> M + Send>,
}

impl<M> Every<M> {
    pub fn new(period: Duration, make: impl Fn() -> M + Send + 'static) -> Self {
        Self {
            period,
            make: Box::new(make),
        }
    }
}

impl<M> Subscription<M> for Every<M> {
    fn period(&self) -> Duration {
        self.period
    }

    fn message(&self) -> M {
        (self.make)()
    }
}
