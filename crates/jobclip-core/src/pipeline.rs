//! One run of the tool: extract, confirm, write.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::error::Result;
use crate::extract::{HeuristicParser, PostingExtractor};
use crate::models::config::Config;
use crate::models::submission::OutputRecord;
use crate::output;
use crate::prompt::{Confirmation, Prompter};

/// What happened to the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The posting was written to this path.
    Saved(PathBuf),
    /// The user aborted; nothing was written.
    Aborted,
}

/// Process one clipboard submission.
///
/// `now` stamps the output file name.
pub fn process_submission<R: BufRead, W: Write>(
    config: &Config,
    text: &str,
    prompter: &mut Prompter<R, W>,
    now: NaiveDateTime,
) -> Result<Outcome> {
    let extraction = HeuristicParser::new().extract_from_text(text)?;
    for warning in &extraction.warnings {
        warn!("{}", warning);
    }

    let confirmed = match prompter.confirm(&extraction.fields, config.default_format)? {
        Confirmation::Confirmed(confirmed) => confirmed,
        Confirmation::Aborted => {
            info!("Confirmation aborted, nothing written");
            return Ok(Outcome::Aborted);
        }
    };

    let body = if config.strip_noise {
        extraction.cleaned_body()
    } else {
        extraction.body
    };

    let record = OutputRecord::new(
        &confirmed.company,
        &confirmed.title,
        body,
        confirmed.format,
        now,
    );
    let path = output::save(&config.save_folder, &record)?;

    Ok(Outcome::Saved(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractionError, JobclipError, WriteError};
    use crate::models::submission::OutputFormat;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::io::Cursor;

    const POSTING: &str =
        "About the job\nSenior Software Engineer\nAcme Corp\nSeniority level: Mid\nWe build rockets.\n";

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn prompter(answers: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.to_string()), Vec::new())
    }

    #[test]
    fn test_accepting_guesses_saves_verbatim_body() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());

        let outcome = process_submission(&config, POSTING, &mut prompter("\n\n\n"), now()).unwrap();

        let expected = dir
            .path()
            .join("Acme Corp - Senior Software Engineer - 2024-05-01_09-30.txt");
        assert_eq!(outcome, Outcome::Saved(expected.clone()));
        assert_eq!(fs::read_to_string(expected).unwrap(), POSTING);
    }

    #[test]
    fn test_user_values_and_docx() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());

        let outcome = process_submission(&config, POSTING, &mut prompter("X\nY\ndocx\n"), now()).unwrap();

        let expected = dir.path().join("Y - X - 2024-05-01_09-30.docx");
        assert_eq!(outcome, Outcome::Saved(expected.clone()));
        assert!(fs::read(expected).unwrap().starts_with(b"PK"));
    }

    #[test]
    fn test_strip_noise_option() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path())
            .with_default_format(Some(OutputFormat::Txt))
            .with_strip_noise(true);

        let Outcome::Saved(path) = process_submission(&config, POSTING, &mut prompter("\n\n"), now()).unwrap() else {
            panic!("expected a saved file");
        };

        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "About the job\nSenior Software Engineer\nAcme Corp\nWe build rockets.\n"
        );
    }

    #[test]
    fn test_empty_clipboard_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());

        let err = process_submission(&config, "   \n", &mut prompter("\n\n\n"), now()).unwrap_err();

        assert!(matches!(err, JobclipError::Extraction(ExtractionError::EmptyInput)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_abort_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path());

        let outcome = process_submission(&config, POSTING, &mut prompter("\n"), now()).unwrap();

        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_folder_removed_before_write() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("jobs");
        fs::create_dir(&folder).unwrap();
        let config = Config::new(&folder);
        fs::remove_dir(&folder).unwrap();

        let err = process_submission(&config, POSTING, &mut prompter("\n\n\n"), now()).unwrap_err();

        assert!(matches!(err, JobclipError::Write(WriteError::FolderMissing(_))));
        assert!(!folder.exists());
    }
}
