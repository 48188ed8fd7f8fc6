//! Key readers.
//!
//! - [`CrosstermKeyReader`]: blocking reads from the terminal (raw mode only
//!   while a key is being read).
//! - [`ChannelKeyReader`]: reads keys produced by a dedicated reader thread,
//!   for callers that must not block their own thread on stdin.
//! - [`ScriptedKeyReader`]: replays a fixed sequence (tests, demos).

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, trace};

use super::KeyPress;
use crate::error::{CanvasError, Result};

/// Source of key presses.
pub trait KeyReader {
    /// Block until the next key press.
    ///
    /// Returns [`CanvasError::InputClosed`] when no more input will arrive.
    fn read_key(&mut self) -> Result<KeyPress>;
}

// =============================================================================
// Terminal reader
// =============================================================================

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads key presses from the terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermKeyReader {
    _private: (),
}

impl CrosstermKeyReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyPress>> {
        let _raw = RawModeGuard::enable()?;
        if !event::poll(timeout)? {
            return Ok(None);
        }
        Ok(convert(event::read()?))
    }
}

impl KeyReader for CrosstermKeyReader {
    fn read_key(&mut self) -> Result<KeyPress> {
        let _raw = RawModeGuard::enable()?;
        loop {
            if let Some(key) = convert(event::read()?) {
                trace!(key = %key, "key read");
                return Ok(key);
            }
        }
    }
}

fn convert(event: Event) -> Option<KeyPress> {
    match event {
        Event::Key(key) => KeyPress::from_key_event(key),
        _ => None,
    }
}

// =============================================================================
// Threaded reader
// =============================================================================

/// Receives key presses from a background reader thread.
#[derive(Debug)]
pub struct ChannelKeyReader {
    receiver: Receiver<KeyPress>,
}

impl ChannelKeyReader {
    /// Wrap an existing receiver.
    pub fn new(receiver: Receiver<KeyPress>) -> Self {
        Self { receiver }
    }

    /// Spawn a thread that reads keys with `reader` and forwards them.
    ///
    /// The thread stops when the reader reports an error or the returned
    /// `ChannelKeyReader` is dropped.
    pub fn spawn<R>(mut reader: R) -> Result<(Self, JoinHandle<()>)>
    where
        R: KeyReader + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("shell-canvas-keys".to_string())
            .spawn(move || {
                loop {
                    match reader.read_key() {
                        Ok(key) => {
                            if tx.send(key).is_err() {
                                break; // Channel closed
                            }
                        }
                        Err(err) => {
                            debug!(error = %err, "key reader thread stopping");
                            break;
                        }
                    }
                }
            })?;
        Ok((Self::new(rx), handle))
    }

    /// Take a key if one is waiting.
    pub fn try_read_key(&mut self) -> Result<Option<KeyPress>> {
        match self.receiver.try_recv() {
            Ok(key) => Ok(Some(key)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(CanvasError::InputClosed),
        }
    }
}

impl KeyReader for ChannelKeyReader {
    fn read_key(&mut self) -> Result<KeyPress> {
        self.receiver.recv().map_err(|_| CanvasError::InputClosed)
    }
}

// =============================================================================
// Scripted reader
// =============================================================================

/// Replays a queue of key presses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeyReader {
    queue: VecDeque<KeyPress>,
}

impl ScriptedKeyReader {
    pub fn new(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            queue: keys.into_iter().collect(),
        }
    }

    /// One ordinary key per character of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(KeyPress::char))
    }

    pub fn push(&mut self, key: KeyPress) {
        self.queue.push_back(key);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl KeyReader for ScriptedKeyReader {
    fn read_key(&mut self) -> Result<KeyPress> {
        self.queue.pop_front().ok_or(CanvasError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;

    #[test]
    fn test_scripted_reader_replays_in_order() {
        let mut reader = ScriptedKeyReader::from_text("ab");
        reader.push(KeyPress::new(keys::TAB));
        assert_eq!(reader.remaining(), 3);

        assert_eq!(reader.read_key().unwrap(), KeyPress::char('a'));
        assert_eq!(reader.read_key().unwrap(), KeyPress::char('b'));
        assert!(reader.read_key().unwrap().is_tab());
        assert!(matches!(reader.read_key(), Err(CanvasError::InputClosed)));
    }

    #[test]
    fn test_channel_reader_forwards_thread_keys() {
        let script = ScriptedKeyReader::from_text("xyz");
        let (mut reader, handle) = ChannelKeyReader::spawn(script).unwrap();

        assert_eq!(reader.read_key().unwrap(), KeyPress::char('x'));
        assert_eq!(reader.read_key().unwrap(), KeyPress::char('y'));
        assert_eq!(reader.read_key().unwrap(), KeyPress::char('z'));

        handle.join().unwrap();
        assert!(matches!(reader.read_key(), Err(CanvasError::InputClosed)));
        assert!(matches!(reader.try_read_key(), Err(CanvasError::InputClosed)));
    }

    #[test]
    fn test_channel_reader_try_read_empty() {
        let (_tx, rx) = mpsc::channel::<KeyPress>();
        let mut reader = ChannelKeyReader::new(rx);
        assert_eq!(reader.try_read_key().unwrap(), None);
    }
}
