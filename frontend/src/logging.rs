use std::io;

use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Routes the library's `tracing` events to the browser console.
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(format!("workout_tracker_lib=debug,{}=debug", env!("CARGO_CRATE_NAME"))))
        .with(tracing_subscriber::fmt::layer()
            .without_time()
            .with_ansi(false)
            .with_writer(ConsoleMakeWriter))
        .init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buffer: Vec::new() }
    }
}

/// Collects one formatted event and logs it when dropped.
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = event_line(&self.buffer) {
            gloo_console::log!(line);
        }
    }
}

fn event_line(buffer: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buffer);
    let line = line.trim_end();
    (!line.is_empty()).then(|| line.to_owned())
}
