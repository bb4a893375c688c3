//! Application messages.

use tfolio_core::{Event, KeyEvent, MouseEvent};
use tfolio_i18n::{Dictionary, LoadError};

/// Everything that can drive a state transition.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize { width: u16, height: u16 },
    /// Next step of the typewriter chain (scheduled via the tick slot).
    TypeTick,
    /// Fixed-cadence UI tick: particles drift, scroll easing advances.
    UiTick,
    /// A background language load finished. `seq` identifies the request;
    /// anything older than the latest issued request is discarded.
    LanguageLoaded {
        seq: u64,
        code: String,
        result: Result<Dictionary, LoadError>,
    },
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Mouse(mouse) => Msg::Mouse(mouse),
            Event::Resize { width, height } => Msg::Resize { width, height },
        }
    }
}
