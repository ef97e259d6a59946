/// An event delivered to a listener, targeted at an element by ID.
///
/// Listeners signal that the element's default action (following a link,
/// for example) must not run by calling [`Event::prevent_default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// ID of the element the event originated from.
    pub target: String,
    default_prevented: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Mouse click
    Click { button: MouseButton },
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            default_prevented: false,
        }
    }

    /// A primary-button click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::new(
            EventKind::Click {
                button: MouseButton::Left,
            },
            target,
        )
    }

    pub fn is_primary_click(&self) -> bool {
        matches!(
            self.kind,
            EventKind::Click {
                button: MouseButton::Left
            }
        )
    }

    pub fn prevent_default(&mut self) {
        log::trace!("default prevented for event on {}", self.target);
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
