//! Demonstration run: builds one employee from a text source and one from
//! direct values, then reports each record's label, name and salary.

use crate::config::AppConfig;
use crate::domain::Employee;
use crate::error::Result;
use std::io::Write;

/// Label written before each record in the report
const RECORD_LABEL: &str = "Employee";

/// Records built by a demo run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Employee read from the configured source
    pub from_source: Employee,
    /// Employee built from the configured direct values
    pub direct: Employee,
}

/// Demo application
pub struct App {
    config: AppConfig,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build both employees and write their report to `out`.
    ///
    /// Stops at the first failure, so nothing about the direct employee is
    /// written when the source cannot be read.
    pub fn run(&self, out: &mut impl Write) -> Result<Report> {
        let from_source = Employee::from_source(&self.config.source.path)?;
        write_record(out, &from_source)?;

        let direct = Employee::new(self.config.direct.name.clone(), self.config.direct.salary);
        write_record(out, &direct)?;

        out.flush()?;
        Ok(Report {
            from_source,
            direct,
        })
    }
}

fn write_record(out: &mut impl Write, employee: &Employee) -> std::io::Result<()> {
    writeln!(out, "{}", RECORD_LABEL)?;
    writeln!(out, "{}", employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DirectConfig, SourceConfig};
    use crate::domain::MIN_SALARY;
    use crate::error::{AppError, SourceError};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_with_source(path: PathBuf) -> AppConfig {
        AppConfig {
            source: SourceConfig { path },
            direct: DirectConfig::default(),
        }
    }

    #[test]
    fn test_run_report() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("employee_data.txt");
        fs::write(&path, "fernando\n").unwrap();

        let app = App::new(config_with_source(path));
        let mut out = Vec::new();
        let report = app.run(&mut out).unwrap();

        assert_eq!(report.from_source.name(), "fernando\n");
        assert_eq!(report.from_source.salary(), MIN_SALARY);
        assert_eq!(report.direct, Employee::new("fernando", 500000));

        let output = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(output, @r"
Employee
fernando
 30000
Employee
fernando 500000
");
    }

    #[test]
    fn test_run_clamps_direct_salary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("employee_data.txt");
        fs::write(&path, "bob").unwrap();

        let mut config = config_with_source(path);
        config.direct = DirectConfig {
            name: "alice".to_string(),
            salary: 1000,
        };

        let mut out = Vec::new();
        let report = App::new(config).run(&mut out).unwrap();
        assert_eq!(report.direct.salary(), 30000);

        let output = String::from_utf8(out).unwrap();
        assert!(output.ends_with("alice 30000\n"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_write_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("employee_data.txt");
        fs::write(&path, "fernando\n").unwrap();

        let err = App::new(config_with_source(path))
            .run(&mut FailingWriter)
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_run_missing_source() {
        let temp = TempDir::new().unwrap();
        let app = App::new(config_with_source(temp.path().join("missing.txt")));

        let mut out = Vec::new();
        let err = app.run(&mut out).unwrap_err();

        assert!(matches!(
            err,
            AppError::Source(SourceError::Unreadable { .. })
        ));
        assert!(out.is_empty());
    }
}
