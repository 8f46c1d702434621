use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Poll crossterm on the blocking pool and forward key presses and resizes.
pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        pump(
            &tx,
            || event::poll(Duration::from_millis(250)),
            event::read,
        );
    });
}

/// Forward terminal events until the receiver is gone or the terminal fails.
/// A failure is reported as [`InputEvent::Closed`] since no key can arrive anymore.
fn pump(
    tx: &mpsc::Sender<Event>,
    mut poll: impl FnMut() -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<CtEvent>,
) {
    while !tx.is_closed() {
        let ev = match poll() {
            Ok(false) => continue,
            Ok(true) => read(),
            Err(e) => Err(e),
        };
        let ev = match ev {
            Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "terminal input failed");
                let _ = tx.blocking_send(Event::Input(InputEvent::Closed));
                break;
            }
        };
        if tx.blocking_send(Event::Input(ev)).is_err() {
            break;
        }
    }
}

pub fn map_input_to_action(ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Closed => Some(Action::Quit),
        InputEvent::Key(k) => map_key(k),
    }
}

fn map_key(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Action::Quit),
            't' => Some(Action::CycleTheme),
            'f' => Some(Action::ToggleFormat),
            's' => Some(Action::ToggleSeconds),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(map_input_to_action(key(KeyCode::Char('t'))), Some(Action::CycleTheme));
        assert_eq!(map_input_to_action(key(KeyCode::Char('f'))), Some(Action::ToggleFormat));
        assert_eq!(map_input_to_action(key(KeyCode::Char('s'))), Some(Action::ToggleSeconds));
        assert_eq!(map_input_to_action(key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn test_shortcuts_ignore_case() {
        assert_eq!(map_input_to_action(key(KeyCode::Char('T'))), Some(Action::CycleTheme));
        assert_eq!(map_input_to_action(key(KeyCode::Char('Q'))), Some(Action::Quit));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(map_input_to_action(key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_input_to_action(InputEvent::Key(ctrl_c)), Some(Action::Quit));
    }

    #[test]
    fn test_pump_forwards_presses_and_resizes() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut queued = vec![
            CtEvent::Resize(80, 24),
            CtEvent::Key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE)),
        ];
        pump(
            &tx,
            || Ok(true),
            || queued.pop().ok_or_else(|| io::Error::other("tty gone")),
        );

        assert!(matches!(rx.try_recv(), Ok(Event::Input(InputEvent::Key(k))) if k.code == KeyCode::Char('t')));
        assert!(matches!(rx.try_recv(), Ok(Event::Input(InputEvent::Resize))));
        assert!(matches!(rx.try_recv(), Ok(Event::Input(InputEvent::Closed))));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_pump_stops_on_poll_failure() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut polls = 0;
        pump(
            &tx,
            || {
                polls += 1;
                Err(io::Error::other("poll failed"))
            },
            || unreachable!("read after failed poll"),
        );

        assert_eq!(polls, 1);
        let ev = rx.try_recv().unwrap();
        assert!(matches!(ev, Event::Input(InputEvent::Closed)));
        assert_eq!(
            map_input_to_action(InputEvent::Closed),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_input_to_action(key(KeyCode::Char('c'))), None);
        assert_eq!(map_input_to_action(key(KeyCode::Enter)), None);
        assert_eq!(map_input_to_action(InputEvent::Resize), Some(Action::Resize));
    }
}
