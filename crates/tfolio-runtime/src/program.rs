//! The Model / Cmd / Program loop.

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use tfolio_core::Event;
use tfolio_render::Frame;

use crate::backend::{self, TerminalSession};
use crate::subscription::Subscription;

/// Application state and behavior.
///
/// The runtime feeds decoded [`Event`]s (via `Message: From<Event>`),
/// scheduled ticks, and task results into `update`, then calls `view` when
/// state changed.
pub trait Model: Sized {
    /// Message type driving state transitions.
    type Message: From<Event> + Send + 'static;

    /// Startup command, run once before the first frame.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Core state transition. Returns side effects to execute.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Draw the current state into a frame.
    fn view(&self, frame: &mut Frame);

    /// Fixed-cadence message sources. Re-declared after every update.
    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Self::Message>>> {
        Vec::new()
    }
}

/// Side effects requested by the model.
pub enum Cmd<M> {
    /// Nothing.
    None,
    /// Stop the program loop.
    Quit,
    /// Feed a message straight back into `update`.
    Msg(M),
    /// Execute several commands in order.
    Batch(Vec<Cmd<M>>),
    /// Deliver `M` after `Duration`. Replaces any pending tick: the runtime
    /// keeps a single tick slot, so at most one scheduled delivery exists.
    Tick(Duration, M),
    /// Run a closure on a background thread; its return value is delivered
    /// as a message.
    Task(Box<dyn FnOnce() -> M + Send>),
}

impl<M: std::fmt::Debug> std::fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Tick(d, m) => f.debug_tuple("Tick").field(d).field(m).finish(),
            Self::Task(_) => write!(f, "Task(...)"),
        }
    }
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Schedule `m` for delivery after `delay`.
    #[inline]
    pub fn tick(delay: Duration, m: M) -> Self {
        Self::Tick(delay, m)
    }

    pub fn task<F>(f: F) -> Self
    where
        F: FnOnce() -> M + Send + 'static,
    {
        Self::Task(Box::new(f))
    }

    /// Combine commands, collapsing trivial cases.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds
            .into_iter()
            .filter(|c| !matches!(c, Self::None))
            .collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }
}

/// The single pending scheduled-message slot.
///
/// Scheduling always replaces the previous deadline and message, which is
/// what makes animation restarts safe: the old chain's next step is
/// discarded the moment a new chain schedules its first step.
#[derive(Debug)]
pub struct TickSlot<M> {
    pending: Option<(Instant, M)>,
}

impl<M> Default for TickSlot<M> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<M> TickSlot<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending delivery with `msg` due at `now + delay`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, msg: M) {
        self.pending = Some((now + delay, msg));
    }

    /// Drop any pending delivery.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the message if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<M> {
        match &self.pending {
            Some((deadline, _)) if now >= *deadline => {
                self.pending.take().map(|(_, msg)| msg)
            }
            _ => None,
        }
    }

    /// Time remaining until the deadline, if one is pending.
    #[must_use]
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(deadline, _)| deadline.saturating_duration_since(now))
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    /// Input poll timeout when nothing is scheduled.
    pub poll_timeout: Duration,
    /// Capture mouse events.
    pub mouse: bool,
    /// Use the alternate screen.
    pub alt_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            mouse: true,
            alt_screen: true,
        }
    }
}

/// The program loop: owns the model, the terminal, the tick slot, and the
/// task result channel.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
    running: bool,
    dirty: bool,
    width: u16,
    height: u16,
    tick: TickSlot<M::Message>,
    task_tx: mpsc::Sender<M::Message>,
    task_rx: mpsc::Receiver<M::Message>,
    /// Next-fire instants for declared subscriptions, matched by position.
    sub_deadlines: Vec<Instant>,
}

impl<M: Model> Program<M> {
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        let (task_tx, task_rx) = mpsc::channel();
        Self {
            model,
            config,
            running: true,
            dirty: true,
            width: 0,
            height: 0,
            tick: TickSlot::new(),
            task_tx,
            task_rx,
            sub_deadlines: Vec::new(),
        }
    }

    /// Run until the model returns [`Cmd::Quit`].
    pub fn run(&mut self) -> io::Result<()> {
        let session = TerminalSession::new(&self.config)?;
        let (width, height) = session.size()?;
        self.width = width;
        self.height = height;
        debug!(width, height, "program starting");

        let init = self.model.init();
        self.apply(init);
        self.sync_subscriptions(Instant::now());
        // Models learn the viewport the same way as on any later resize.
        self.dispatch(M::Message::from(Event::Resize { width, height }));

        let mut out = io::stdout();
        while self.running {
            self.drain_tasks();
            self.render(&mut out)?;

            let timeout = self.next_timeout();
            if backend::poll(timeout)? {
                if let Some(event) = backend::read_event()? {
                    if let Event::Resize { width, height } = event {
                        self.width = width;
                        self.height = height;
                        self.dirty = true;
                    }
                    self.dispatch(M::Message::from(event));
                }
            }

            let now = Instant::now();
            if let Some(msg) = self.tick.take_due(now) {
                trace!("tick fired");
                self.dispatch(msg);
            }
            self.fire_subscriptions(now);
        }

        drop(session);
        Ok(())
    }

    fn render(&mut self, out: &mut Stdout) -> io::Result<()> {
        if !self.dirty || self.width == 0 || self.height == 0 {
            return Ok(());
        }
        let mut frame = Frame::new(self.width, self.height);
        self.model.view(&mut frame);
        backend::present(out, &frame)?;
        out.flush()?;
        self.dirty = false;
        Ok(())
    }

    /// Poll timeout: the soonest of the tick deadline, the next
    /// subscription firing, and the configured idle timeout.
    fn next_timeout(&self) -> Duration {
        let now = Instant::now();
        let mut timeout = self.config.poll_timeout;
        if let Some(until) = self.tick.time_until(now) {
            timeout = timeout.min(until);
        }
        for deadline in &self.sub_deadlines {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        timeout
    }

    fn drain_tasks(&mut self) {
        while let Ok(msg) = self.task_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    fn fire_subscriptions(&mut self, now: Instant) {
        let subs = self.model.subscriptions();
        let mut due = Vec::new();
        for (i, sub) in subs.iter().enumerate() {
            if let Some(deadline) = self.sub_deadlines.get_mut(i) {
                if now >= *deadline {
                    due.push(sub.message());
                    *deadline = now + sub.period();
                }
            }
        }
        drop(subs);
        for msg in due {
            self.dispatch(msg);
        }
    }

    /// Feed one message through `update`, then any commands it produced.
    fn dispatch(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.dirty = true;
        self.apply(cmd);
        self.sync_subscriptions(Instant::now());
    }

    fn apply(&mut self, cmd: Cmd<M::Message>) {
        let mut queue = VecDeque::from([cmd]);
        while let Some(cmd) = queue.pop_front() {
            match cmd {
                Cmd::None => {}
                Cmd::Quit => {
                    debug!("quit requested");
                    self.running = false;
                }
                Cmd::Msg(m) => {
                    let next = self.model.update(m);
                    self.dirty = true;
                    queue.push_back(next);
                }
                Cmd::Batch(cmds) => {
                    for c in cmds.into_iter().rev() {
                        queue.push_front(c);
                    }
                }
                Cmd::Tick(delay, m) => {
                    self.tick.schedule(Instant::now(), delay, m);
                }
                Cmd::Task(f) => {
                    let tx = self.task_tx.clone();
                    thread::spawn(move || {
                        let _ = tx.send(f());
                    });
                }
            }
        }
    }

    /// Keep one deadline per declared subscription, matched by position.
    fn sync_subscriptions(&mut self, now: Instant) {
        let subs = self.model.subscriptions();
        if subs.len() != self.sub_deadlines.len() {
            self.sub_deadlines = subs.iter().map(|s| now + s.period()).collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_collapses_trivial_cases() {
        assert!(matches!(Cmd::<u8>::batch(vec![]), Cmd::None));
        assert!(matches!(
            Cmd::<u8>::batch(vec![Cmd::None, Cmd::None]),
            Cmd::None
        ));
        assert!(matches!(
            Cmd::batch(vec![Cmd::None, Cmd::Msg(1u8)]),
            Cmd::Msg(1)
        ));
        assert!(matches!(
            Cmd::batch(vec![Cmd::Msg(1u8), Cmd::Msg(2)]),
            Cmd::Batch(_)
        ));
    }

    #[test]
    fn tick_slot_fires_once_after_deadline() {
        let mut slot = TickSlot::new();
        let t0 = Instant::now();
        slot.schedule(t0, Duration::from_millis(150), "a");

        assert_eq!(slot.take_due(t0), None);
        assert_eq!(slot.take_due(t0 + Duration::from_millis(149)), None);
        assert_eq!(slot.take_due(t0 + Duration::from_millis(150)), Some("a"));
        // Consumed: nothing remains.
        assert!(!slot.is_pending());
        assert_eq!(slot.take_due(t0 + Duration::from_secs(10)), None);
    }

    #[test]
    fn rescheduling_replaces_pending_tick() {
        let mut slot = TickSlot::new();
        let t0 = Instant::now();
        slot.schedule(t0, Duration::from_millis(1500), "old");
        slot.schedule(t0, Duration::from_millis(150), "new");

        // Only the most recent schedule exists; the old chain is gone.
        assert_eq!(slot.take_due(t0 + Duration::from_millis(150)), Some("new"));
        assert_eq!(slot.take_due(t0 + Duration::from_millis(1500)), None);
    }

    #[test]
    fn clear_drops_pending() {
        let mut slot = TickSlot::new();
        let t0 = Instant::now();
        slot.schedule(t0, Duration::from_millis(10), 1u8);
        slot.clear();
        assert!(!slot.is_pending());
        assert_eq!(slot.take_due(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn time_until_saturates_past_deadline() {
        let mut slot = TickSlot::new();
        let t0 = Instant::now();
        slot.schedule(t0, Duration::from_millis(100), 1u8);
        assert_eq!(
            slot.time_until(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert_eq!(
            slot.time_until(t0 + Duration::from_millis(500)),
            Some(Duration::ZERO)
        );
    }
}
