use std::io::{self, Write};

use crossterm::style::Stylize;
use serde::Serialize;

use crate::app::{GenerateResult, ProgressEvent, ProgressLevel, ProgressSink};

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Interactive,
    NonInteractive,
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_generate(result: &GenerateResult) -> io::Result<()> {
        Self::print_json(result)
    }

    fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        let mut stdout = io::stdout();
        stdout.write_all(json.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}

impl ProgressSink for JsonOutput {
    fn event(&self, _event: ProgressEvent) {}
}

pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn render(event: &ProgressEvent) -> String {
        let message = event.message.as_str();
        match event.level {
            ProgressLevel::Heading => message.bold().to_string(),
            ProgressLevel::Info | ProgressLevel::Rule => message.to_string(),
            ProgressLevel::Success => message.green().to_string(),
            ProgressLevel::Warning => message.yellow().to_string(),
            ProgressLevel::Error => message.red().to_string(),
        }
    }

    pub fn write_event<W: Write>(writer: &mut W, event: &ProgressEvent) -> io::Result<()> {
        writeln!(writer, "{}", Self::render(event))
    }
}

impl ProgressSink for ConsoleOutput {
    fn event(&self, event: ProgressEvent) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = Self::write_event(&mut stdout, &event) {
            tracing::warn!("failed to write progress line: {err}");
        }
    }
}
