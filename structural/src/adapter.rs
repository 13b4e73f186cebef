//! Adapting a modern text writer to the older `Writer` capability.

use tracing::info;

/// The capability existing callers are written against.
pub trait Writer {
    fn write(&self, s: &str) -> String;
}

/// The newer capability, with a different method name.
pub trait ModernWriter {
    fn write_text(&self, s: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleWriter;

impl Writer for ConsoleWriter {
    fn write(&self, s: &str) -> String {
        format!("ConsoleWriter: {s}")
    }
}

/// Modern writer that shouts: its output is always uppercase.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModernConsoleWriter;

impl ModernWriter for ModernConsoleWriter {
    fn write_text(&self, s: &str) -> String {
        format!("ModernConsoleWriter: {}", s.to_uppercase())
    }
}

/// Exposes a [`ModernWriter`] through `print` and the [`Writer`] trait.
#[derive(Clone, Debug, Default)]
pub struct PrinterAdapter<W: ModernWriter = ModernConsoleWriter> {
    printer: W,
}

impl<W: ModernWriter> PrinterAdapter<W> {
    pub fn new(printer: W) -> Self {
        Self { printer }
    }

    /// Uppercase `s` and hand it to the wrapped writer's `write_text`.
    pub fn print(&self, s: &str) -> String {
        info!("adapter translating print to write_text");
        self.printer.write_text(&s.to_uppercase())
    }
}

impl<W: ModernWriter> Writer for PrinterAdapter<W> {
    fn write(&self, s: &str) -> String {
        self.print(s)
    }
}
