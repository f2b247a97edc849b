// Helpers shared by the responder unit tests

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

/// In-memory writer that clones share
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Runs `f` under a plain-text fmt subscriber and returns what it logged
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer: SharedBuffer = SharedBuffer::default();
    let writer: SharedBuffer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    buffer.contents()
}
