//! Bridges terminal key events to the synchronous [`crate::interpreter::InteractiveSource`]:
//! a background OS thread blocks on `crossterm::event::read`, decodes key
//! presses (and bracketed-paste bursts) to characters, and forwards them
//! over a bounded channel (shape borrowed from `core-input`'s reader task,
//! swapped from tokio onto `std::thread` + `crossbeam-channel` since the
//! engine itself is single-threaded and synchronous, not async).

use crossbeam_channel::{Receiver, Sender, bounded};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

const CHANNEL_CAPACITY: usize = 256;

/// Spawns the reader thread and returns the receiving half. The thread runs
/// until the channel's other end is dropped (send failing ends the loop) or
/// the terminal event stream itself errors out.
pub fn spawn_reader() -> Receiver<char> {
    let (tx, rx) = bounded(CHANNEL_CAPACITY);
    std::thread::spawn(move || reader_loop(tx));
    rx
}

fn reader_loop(tx: Sender<char>) {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(target: "input", error = %e, "terminal_read_failed");
                return;
            }
        };
        for ch in decode(event) {
            if tx.send(ch).is_err() {
                return;
            }
        }
    }
}

/// Key presses become zero or more characters; a bracketed paste forwards
/// its whole burst in one go; releases and other events contribute nothing.
fn decode(event: Event) -> Vec<char> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char(c) => vec![c],
            KeyCode::Enter => vec!['\n'],
            KeyCode::Tab => vec!['\t'],
            _ => Vec::new(),
        },
        Event::Paste(text) => text.chars().collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    #[test]
    fn key_press_decodes_to_its_character() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(decode(Event::Key(key)), vec!['x']);
    }

    #[test]
    fn key_release_contributes_nothing() {
        let mut key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(decode(Event::Key(key)), Vec::<char>::new());
    }

    #[test]
    fn bracketed_paste_forwards_the_whole_burst() {
        assert_eq!(
            decode(Event::Paste("hi there".to_string())),
            "hi there".chars().collect::<Vec<_>>()
        );
    }
}
