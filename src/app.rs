//! Headless host for the find-and-replace engine.

use anyhow::Result;
use std::io::Write;

use notepad_buffer::TextBuffer;
use notepad_config::Config;
use notepad_text_search::{FindReplaceSession, SearchError};

use crate::cli::Command;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    /// A user-facing notice; nothing was written.
    Notice(SearchError),
}

/// Run one command against its document, reporting to `out`.
pub fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<Status> {
    let mut session = FindReplaceSession::new();
    session.open();

    match command {
        Command::Find {
            file,
            query,
            match_mode,
        } => {
            let mut buffer = TextBuffer::from_file(&file)?;
            let whole_word = match_mode.resolve(config.search.match_whole_word);

            let matches = match session.find(&mut buffer, &query, whole_word) {
                Ok(matches) => matches,
                Err(err) => return Ok(Status::Notice(err)),
            };

            for m in &matches {
                let start = buffer.char_idx_to_cursor(m.start);
                let end = buffer.char_idx_to_cursor(m.end);
                writeln!(
                    out,
                    "{}:{}-{}:{}",
                    start.line + 1,
                    start.column + 1,
                    end.line + 1,
                    end.column + 1
                )?;
            }
            writeln!(out, "{} match(es)", matches.len())?;

            session.close(&mut buffer);
            Ok(Status::Done)
        }
        Command::Replace {
            file,
            query,
            replacement,
            match_mode,
            output,
        } => {
            let mut buffer = TextBuffer::from_file(&file)?;
            let whole_word = match_mode.resolve(config.search.match_whole_word);

            let count = match session.replace(&mut buffer, &query, &replacement, whole_word) {
                Ok(count) => count,
                Err(err) => return Ok(Status::Notice(err)),
            };

            match output {
                Some(path) => buffer.save_to(path)?,
                None => buffer.save()?,
            }
            writeln!(out, "Replaced {} occurrence(s)", count)?;

            session.close(&mut buffer);
            Ok(Status::Done)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::MatchMode;
    use std::fs;
    use std::path::Path;

    fn write_doc(dir: &Path, text: &str) -> std::path::PathBuf {
        let path = dir.join("doc.txt");
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_find_reports_positions() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "cat catalog\ncat");
        let mut out = Vec::new();

        let status = run(
            Command::Find {
                file,
                query: "cat".to_string(),
                match_mode: MatchMode::whole_word(),
            },
            &Config::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(status, Status::Done);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1:1-1:4\n2:1-2:4\n2 match(es)\n"
        );
    }

    #[test]
    fn test_find_whole_word_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "catalog");
        let mut config = Config::default();
        config.search.match_whole_word = true;

        let status = run(
            Command::Find {
                file,
                query: "cat".to_string(),
                match_mode: MatchMode::default(),
            },
            &config,
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(status, Status::Notice(SearchError::NotFound));
    }

    #[test]
    fn test_no_whole_word_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "catalog");
        let mut config = Config::default();
        config.search.match_whole_word = true;
        let mut out = Vec::new();

        let status = run(
            Command::Find {
                file,
                query: "cat".to_string(),
                match_mode: MatchMode::substring(),
            },
            &config,
            &mut out,
        )
        .unwrap();
        assert_eq!(status, Status::Done);
        assert_eq!(String::from_utf8(out).unwrap(), "1:1-1:4\n1 match(es)\n");
    }

    #[test]
    fn test_find_empty_query_notice() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "text");

        let status = run(
            Command::Find {
                file,
                query: String::new(),
                match_mode: MatchMode::default(),
            },
            &Config::default(),
            &mut Vec::new(),
        )
        .unwrap();
        assert_eq!(status, Status::Notice(SearchError::EmptyQuery));
    }

    #[test]
    fn test_replace_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "a a a");
        let mut out = Vec::new();

        let status = run(
            Command::Replace {
                file: file.clone(),
                query: "a".to_string(),
                replacement: "bb".to_string(),
                match_mode: MatchMode::default(),
                output: None,
            },
            &Config::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(status, Status::Done);
        assert_eq!(fs::read_to_string(&file).unwrap(), "bb bb bb");
        assert_eq!(String::from_utf8(out).unwrap(), "Replaced 3 occurrence(s)\n");
    }

    #[test]
    fn test_replace_to_output_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "one two one");
        let output = dir.path().join("out.txt");

        run(
            Command::Replace {
                file: file.clone(),
                query: "one".to_string(),
                replacement: "1".to_string(),
                match_mode: MatchMode::whole_word(),
                output: Some(output.clone()),
            },
            &Config::default(),
            &mut Vec::new(),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "one two one");
        assert_eq!(fs::read_to_string(&output).unwrap(), "1 two 1");
    }

    #[test]
    fn test_replace_empty_replacement_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_doc(dir.path(), "hello");

        let status = run(
            Command::Replace {
                file: file.clone(),
                query: "hello".to_string(),
                replacement: String::new(),
                match_mode: MatchMode::default(),
                output: None,
            },
            &Config::default(),
            &mut Vec::new(),
        )
        .unwrap();

        assert_eq!(status, Status::Notice(SearchError::EmptyReplacement));
        assert_eq!(fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            Command::Find {
                file: dir.path().join("missing.txt"),
                query: "x".to_string(),
                match_mode: MatchMode::default(),
            },
            &Config::default(),
            &mut Vec::new(),
        );
        assert!(result.is_err());
    }
}
