use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};
use std::io;
use std::time::{Duration, Instant};

/// Input the player reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Space bar
    Pause,
    /// Any other key press or mouse button press
    Other,
    Resize,
}

/// Either the next timer tick or a user input, whichever comes first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEvent {
    Tick,
    Input(Input),
}

/// Fixed-period timer multiplexed with terminal input
///
/// Deadlines are absolute, so time spent drawing does not stretch the
/// period. Ticks missed while the process was stalled are dropped rather
/// than replayed in a burst.
pub struct Clock {
    period: Duration,
    next: Instant,
}

impl Clock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    /// Block until the next tick or input
    pub fn next_event(&mut self) -> io::Result<ClockEvent> {
        loop {
            let now = Instant::now();
            if now >= self.next {
                self.next += self.period;
                if self.next <= now {
                    self.next = now + self.period;
                }
                return Ok(ClockEvent::Tick);
            }

            if event::poll(self.next - now)? {
                if let Some(input) = translate(event::read()?) {
                    return Ok(ClockEvent::Input(input));
                }
            }
        }
    }
}

/// Block until the user presses something (no timer)
pub fn wait_input() -> io::Result<Input> {
    loop {
        if let Some(input) = translate(event::read()?) {
            return Ok(input);
        }
    }
}

fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            tracing::trace!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match key.code {
                KeyCode::Char(' ') => Some(Input::Pause),
                _ => Some(Input::Other),
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Some(Input::Other),
            _ => None,
        },
        Event::Resize(..) => Some(Input::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_space_pauses() {
        assert_eq!(translate(key(KeyCode::Char(' '))), Some(Input::Pause));
    }

    #[test]
    fn test_other_keys_and_clicks_quit() {
        assert_eq!(translate(key(KeyCode::Char('q'))), Some(Input::Other));
        assert_eq!(translate(key(KeyCode::Esc)), Some(Input::Other));
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(Input::Other)
        );
    }

    #[test]
    fn test_releases_and_motion_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate(Event::Key(release)), None);
        assert_eq!(translate(mouse(MouseEventKind::Moved)), None);
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown)), None);
        assert_eq!(translate(Event::FocusLost), None);
    }

    #[test]
    fn test_resize_redraws() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(Input::Resize));
    }
}
