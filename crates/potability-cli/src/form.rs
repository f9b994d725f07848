//! Interactive entry form.
//!
//! Prompts for each of the nine measurements in turn, shows the report, and
//! offers another sample. The previous sample's values become the defaults
//! for the next one.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use potability_domain::{FormField, PotabilityOracle, SampleRecord, FORM_FIELDS};
use potability_gatekeeper::Gatekeeper;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Source of input lines for the form.
pub trait LineSource {
    /// Read one line; `None` means the input is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.add_history_entry(line.as_str()).ok();
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// What the user entered for one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    /// A value within the field bounds
    Value(f64),
    /// Leave the form
    Exit,
}

/// Interpret one line of input for a field; blank keeps `current`.
pub fn parse_entry(field: &FormField, current: f64, line: &str) -> Result<Entry> {
    let line = line.trim();
    match line {
        "" => Ok(Entry::Value(current)),
        "exit" | "quit" | "q" => Ok(Entry::Exit),
        _ => {
            let value: f64 = line.parse().map_err(|_| {
                CliError::InvalidInput(format!("'{}' is not a number", line))
            })?;
            Ok(Entry::Value(field.check(value)?))
        }
    }
}

/// Prompt for a full sample; `None` if the user left the form.
pub fn prompt_sample<S: LineSource>(
    source: &mut S,
    formatter: &Formatter,
    start: SampleRecord,
) -> Result<Option<SampleRecord>> {
    let mut record = start;
    for field in &FORM_FIELDS {
        let current = record.value(field.feature);
        let prompt = format!(
            "{} [{} - {}] ({}): ",
            field.feature.label(),
            field.min,
            field.max,
            current
        );
        loop {
            let Some(line) = source.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_entry(field, current, &line) {
                Ok(Entry::Value(value)) => {
                    record.set(field.feature, value);
                    break;
                }
                Ok(Entry::Exit) => return Ok(None),
                Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
            }
        }
    }
    Ok(Some(record))
}

/// Run the form loop against any line source.
pub fn run_form_with<S, O>(
    source: &mut S,
    gatekeeper: &Gatekeeper,
    oracle: &O,
    formatter: &Formatter,
) -> Result<usize>
where
    S: LineSource,
    O: PotabilityOracle,
{
    let mut assessed = 0;
    let mut defaults = SampleRecord::default();

    while let Some(record) = prompt_sample(source, formatter, defaults)? {
        defaults = record;
        match gatekeeper.assess(record, oracle) {
            Ok(assessment) => {
                assessed += 1;
                println!("{}", formatter.format_assessment(&assessment)?);
            }
            Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
        }
        println!();

        let answer = source.read_line("Assess another sample? [Y/n] ")?;
        match answer.as_deref().map(|a| a.trim().to_lowercase()) {
            None => break,
            Some(a) if matches!(a.as_str(), "n" | "no" | "exit" | "quit" | "q") => break,
            Some(_) => {}
        }
    }

    debug!(assessed, "form closed");
    Ok(assessed)
}

/// Run the interactive form on the terminal.
pub fn run_form<O: PotabilityOracle>(
    config: &Config,
    gatekeeper: &Gatekeeper,
    oracle: &O,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Water Quality Prediction - press Enter to keep a value, 'exit' to quit")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    run_form_with(&mut editor, gatekeeper, oracle, formatter)?;

    // Save history
    editor.save_history(&history_path).ok();
    println!("{}", formatter.info("Goodbye!"));

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}
