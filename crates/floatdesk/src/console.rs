//! Browser console logging

use std::io::{self, Write};

use tracing::Level;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and emits it as a single console line
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ConsoleMakeWriter;

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Route panics and `tracing` events to the browser console
///
/// Safe to call more than once; later calls leave the installed subscriber.
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(ConsoleMakeWriter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();
}
