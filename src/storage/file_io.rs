//! File I/O for the expense file
//!
//! One expense per line, fields `date,category,amount,description`. Free-form
//! fields are written verbatim; callers must keep the delimiter out of them.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money, FIELD_DELIMITER};

const DATE_FORMAT: &str = "%Y-%m-%d";
const FIELD_COUNT: usize = 4;

/// Render an expense as one stored line (without terminator)
pub fn format_line(expense: &Expense) -> String {
    format!(
        "{date}{d}{category}{d}{amount}{d}{description}",
        date = expense.date().format(DATE_FORMAT),
        category = expense.category(),
        amount = expense.amount(),
        description = expense.description(),
        d = FIELD_DELIMITER,
    )
}

/// Parse one stored line; `line_no` is 1-based and only used for errors
pub fn parse_line(line_no: usize, line: &str) -> TrackerResult<Expense> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(TrackerError::parse(
            line_no,
            format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        ));
    }

    let date = NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT)
        .map_err(|e| TrackerError::parse(line_no, format!("bad date '{}': {}", fields[0], e)))?;
    let amount = Money::parse(fields[2]).map_err(|e| TrackerError::parse(line_no, e.to_string()))?;

    Ok(Expense::new(amount, fields[1], fields[3], date))
}

/// Read every line of a file
///
/// A missing file is reported as `TrackerError::NotFound` so callers can tell
/// it apart from other I/O failures.
pub fn read_lines<P: AsRef<Path>>(path: P) -> TrackerResult<Vec<String>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TrackerError::NotFound(path.display().to_string()),
        _ => TrackerError::Io(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    BufReader::new(file)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            line.map(|l| l.trim_end_matches('\r').to_string()).map_err(|e| {
                TrackerError::Io(format!(
                    "Failed to read {} line {}: {}",
                    path.display(),
                    i + 1,
                    e
                ))
            })
        })
        .collect()
}

/// Replace a file's contents atomically (write to temp, then rename)
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> TrackerResult<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in same directory so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single line, creating the file if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> TrackerResult<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| TrackerError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lunch() -> Expense {
        Expense::new(
            Money::from_cents(1550),
            "Food",
            "Lunch",
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        )
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(&lunch()), "2026-10-19,Food,15.50,Lunch");
    }

    #[test]
    fn test_parse_line() {
        let expense = parse_line(1, "2026-10-19,Food,15.50,Lunch").unwrap();
        assert_eq!(expense, lunch());

        // Amounts as written by floating-point formatters
        let expense = parse_line(1, "2026-10-19,Food,15.5,Lunch").unwrap();
        assert_eq!(expense.amount(), Money::from_cents(1550));

        let expense = parse_line(1, "2026-10-19,Misc,-2.0,").unwrap();
        assert_eq!(expense.amount(), Money::from_cents(-200));
        assert_eq!(expense.description(), "");
    }

    #[test]
    fn test_fraction_digits_survive_the_file() {
        let line = "2026-10-19,Fuel,0.004,x";
        let expense = parse_line(1, line).unwrap();
        assert_eq!(format_line(&expense), line);
    }

    #[test]
    fn test_parse_line_errors() {
        let err = parse_line(7, "2026-10-19,Food,15.50,Lunch, with friends").unwrap_err();
        assert!(matches!(err, TrackerError::Parse { line: 7, .. }));

        assert!(parse_line(1, "2026-10-19,Food,15.50").is_err());
        assert!(parse_line(1, "2026-10-19,Food,abc,Lunch").is_err());
        assert!(parse_line(1, "19/10/2026,Food,15.50,Lunch").is_err());
        assert!(parse_line(1, "").is_err());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_lines(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_strips_carriage_returns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        fs::write(&path, "a,b,1,c\r\nd,e,2,f\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["a,b,1,c", "d,e,2,f"]);
    }

    #[test]
    fn test_atomic_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");
        fs::write(&path, "old line\n").unwrap();

        write_lines_atomic(&path, ["one", "two"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        assert!(!temp_dir.path().join("expenses.txt.tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("expenses.txt");

        write_lines_atomic(&path, ["one"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.txt");

        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["one", "two"]);
    }
}
