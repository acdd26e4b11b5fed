//! Interactive confirmation of the extracted fields and the output format.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::models::submission::{ExtractedFields, OutputFormat, UNKNOWN};
use crate::output::sanitize_component;

/// Values the user settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedPosting {
    pub title: String,
    pub company: String,
    pub format: OutputFormat,
}

/// How the confirmation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Both fields and the format are settled.
    Confirmed(ConfirmedPosting),
    /// Input ended before everything was answered.
    Aborted,
}

/// Request/response prompter over any line-based input and output.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show the guesses and collect the final title, company and format.
    ///
    /// The format prompt is skipped when `default_format` is set. Invalid
    /// answers are re-asked until a valid one arrives or input ends.
    pub fn confirm(
        &mut self,
        guess: &ExtractedFields,
        default_format: Option<OutputFormat>,
    ) -> io::Result<Confirmation> {
        writeln!(self.output, "Detected from clipboard:")?;
        writeln!(self.output, "  Job title: {}", display(guess.title.as_deref()))?;
        writeln!(self.output, "  Company:   {}", display(guess.company.as_deref()))?;
        writeln!(self.output, "Press Enter to keep a value, or type a replacement.")?;

        let Some(title) = self.ask_field("Job title", guess.title.as_deref())? else {
            return Ok(Confirmation::Aborted);
        };
        let Some(company) = self.ask_field("Company", guess.company.as_deref())? else {
            return Ok(Confirmation::Aborted);
        };

        let format = match default_format {
            Some(format) => format,
            None => match self.ask_format()? {
                Some(format) => format,
                None => return Ok(Confirmation::Aborted),
            },
        };

        debug!("Confirmed title {:?}, company {:?}, format {}", title, company, format);

        Ok(Confirmation::Confirmed(ConfirmedPosting {
            title,
            company,
            format,
        }))
    }

    fn ask_field(&mut self, label: &str, guess: Option<&str>) -> io::Result<Option<String>> {
        loop {
            match guess {
                Some(value) => write!(self.output, "{label} [{value}]: ")?,
                None => write!(self.output, "{label} (not found, Enter for {UNKNOWN}): ")?,
            }

            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };

            if answer.is_empty() {
                return Ok(Some(guess.unwrap_or(UNKNOWN).to_string()));
            }

            if sanitize_component(&answer).is_some() {
                return Ok(Some(answer));
            }

            writeln!(self.output, "'{answer}' can't be used in a file name, try again.")?;
        }
    }

    fn ask_format(&mut self) -> io::Result<Option<OutputFormat>> {
        loop {
            write!(
                self.output,
                "Output format [txt/docx] ({}): ",
                OutputFormat::default()
            )?;

            let Some(answer) = self.read_answer()? else {
                return Ok(None);
            };

            if answer.is_empty() {
                return Ok(Some(OutputFormat::default()));
            }

            match answer.parse::<OutputFormat>() {
                Ok(format) => return Ok(Some(format)),
                Err(_) => writeln!(self.output, "Please enter 'txt' or 'docx'.")?,
            }
        }
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("not found")
}
