/// Formatter adapters for rendering audit output
mod console_formatter;

pub use console_formatter::ConsoleFormatter;
