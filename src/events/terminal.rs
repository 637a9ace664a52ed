use crate::state::{FormFocus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll for terminal events: {}", e);
                    break;
                }
            }
            // A send failure means the receiver is gone and the loop is done
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => match event {
                KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing exit terminal event '{:?}'...", event);
                    return Ok(false);
                }
                KeyEvent {
                    code: KeyCode::Char('d'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                } => {
                    debug!("Processing toggle log overlay event '{:?}'...", event);
                    state.toggle_debug_mode();
                }
                KeyEvent {
                    code: KeyCode::Esc,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    if state.is_debug_mode() {
                        debug!("Processing exit log overlay (Esc) event '{:?}'...", event);
                        state.exit_debug_mode();
                    } else {
                        debug!("Processing exit terminal event '{:?}'...", event);
                        return Ok(false);
                    }
                }
                KeyEvent {
                    code: KeyCode::Enter,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    // Enter advances focus field by field and submits once
                    // the submit control is reached
                    if state.current_focus() == FormFocus::Submit {
                        debug!("Processing submit form event '{:?}'...", event);
                        state.submit_form();
                    } else {
                        debug!("Processing commit field (Enter) event '{:?}'...", event);
                        state.focus_next_field();
                    }
                }
                KeyEvent {
                    code: KeyCode::Tab,
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Down,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing next field event '{:?}'...", event);
                    state.focus_next_field();
                }
                KeyEvent {
                    code: KeyCode::BackTab,
                    modifiers: KeyModifiers::SHIFT,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Up,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    debug!("Processing previous field event '{:?}'...", event);
                    state.focus_previous_field();
                }
                KeyEvent {
                    code: KeyCode::Backspace,
                    modifiers: KeyModifiers::NONE,
                    ..
                } => {
                    state.remove_field_char();
                }
                KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::NONE,
                    ..
                }
                | KeyEvent {
                    code: KeyCode::Char(c),
                    modifiers: KeyModifiers::SHIFT,
                    ..
                } => {
                    state.add_field_char(c);
                }
                _ => {
                    debug!("Skipping processing of terminal event '{:?}'...", event);
                }
            },
            Event::Tick => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Field;

    fn handler_with_sender() -> (mpsc::Sender<Event<KeyEvent>>, Handler) {
        let (tx, rx) = mpsc::channel();
        let handler = Handler {
            rx,
            _tx: tx.clone(),
        };
        (tx, handler)
    }

    #[test]
    fn test_handle_next_types_into_focused_field() {
        let (tx, handler) = handler_with_sender();
        let mut state = State::default();
        tx.send(Event::Input(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
        )))
        .unwrap();

        let proceed = handler.handle_next(&mut state).unwrap();

        assert!(proceed);
        assert_eq!(state.field_state(Field::Name).value(), "a");
    }

    #[test]
    fn test_handle_next_exits_on_ctrl_c() {
        let (tx, handler) = handler_with_sender();
        let mut state = State::default();
        tx.send(Event::Input(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();

        assert!(!handler.handle_next(&mut state).unwrap());
    }

    #[test]
    fn test_handle_next_errors_when_poll_thread_gone() {
        // All senders for the receiving side are dropped, as after the poll
        // thread exits; handle_next must surface an error rather than hang
        // or panic, so the render loop can tear the terminal down
        let (tx, rx) = mpsc::channel::<Event<KeyEvent>>();
        drop(tx);
        let (orphan_tx, _orphan_rx) = mpsc::channel();
        let handler = Handler {
            rx,
            _tx: orphan_tx,
        };
        let mut state = State::default();

        assert!(handler.handle_next(&mut state).is_err());
    }
}
