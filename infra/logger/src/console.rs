use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Error,
    Warn,
    Log,
}

/// Buffers one formatted event and hands it to the browser console on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    channel: Channel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(channel: Channel) -> Self {
        Self { channel, buffer: Vec::new() }
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let value = JsValue::from_str(line.trim_end());
        match self.channel {
            Channel::Error => web_sys::console::error_1(&value),
            Channel::Warn => web_sys::console::warn_1(&value),
            Channel::Log => web_sys::console::log_1(&value),
        }
        self.buffer.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

/// [`MakeWriter`] routing events to `console.error`, `console.warn` or `console.log`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Channel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        let channel = match *meta.level() {
            Level::ERROR => Channel::Error,
            Level::WARN => Channel::Warn,
            _ => Channel::Log,
        };
        ConsoleWriter::new(channel)
    }
}
