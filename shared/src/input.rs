/// Discrete events delivered by the host's event loop.
///
/// Pointer coordinates are pixels relative to the grid's top-left corner and may
/// fall outside the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerDown { x: i32, y: i32, button: PointerButton },
    PointerUp,
    PointerMove { x: i32, y: i32 },
    KeyPress(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartSimulation,
    StopSimulation,
    Randomize,
    Clear,
}

impl Key {
    pub fn command(self) -> Option<Command> {
        match self {
            Key::Space => Some(Command::StartSimulation),
            Key::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => Some(Command::StopSimulation),
                'r' => Some(Command::Randomize),
                'c' => Some(Command::Clear),
                ' ' => Some(Command::StartSimulation),
                _ => None,
            },
        }
    }
}

impl InputEvent {
    pub fn command(&self) -> Option<Command> {
        match self {
            InputEvent::KeyPress(key) => key.command(),
            _ => None,
        }
    }
}

/// Pull-based event source for hosts that own their loop.
pub trait InputSource {
    /// Drain the events that arrived since the previous poll.
    fn poll(&mut self) -> Vec<InputEvent>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings() {
        assert_eq!(Key::Space.command(), Some(Command::StartSimulation));
        assert_eq!(Key::Char('q').command(), Some(Command::StopSimulation));
        assert_eq!(Key::Char('Q').command(), Some(Command::StopSimulation));
        assert_eq!(Key::Char('r').command(), Some(Command::Randomize));
        assert_eq!(Key::Char('C').command(), Some(Command::Clear));
        assert_eq!(Key::Char('x').command(), None);
    }

    #[test]
    fn only_key_presses_carry_commands() {
        assert_eq!(InputEvent::Quit.command(), None);
        assert_eq!(InputEvent::PointerUp.command(), None);
        assert_eq!(InputEvent::KeyPress(Key::Space).command(), Some(Command::StartSimulation));
    }
}
