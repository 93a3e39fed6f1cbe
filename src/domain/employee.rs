//! Employee record with a salary floor.

use crate::error::{SourceError, SourceResult};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Lowest salary any employee can hold. Lower inputs are raised to it.
pub const MIN_SALARY: i64 = 30000;

/// A named, salaried employee.
///
/// The salary floor is applied when the record is built, so
/// `salary() >= MIN_SALARY` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    name: String,
    salary: i64,
}

impl Employee {
    /// Create an employee, raising `salary` to [`MIN_SALARY`] if it is below the floor
    pub fn new(name: impl Into<String>, salary: i64) -> Self {
        let name = name.into();
        let salary = if salary >= MIN_SALARY {
            salary
        } else {
            tracing::debug!(
                "Salary {} for {:?} is below the floor, using {}",
                salary,
                name,
                MIN_SALARY
            );
            MIN_SALARY
        };

        Self { name, salary }
    }

    /// Create an employee paid [`MIN_SALARY`]
    pub fn with_min_salary(name: impl Into<String>) -> Self {
        Self::new(name, MIN_SALARY)
    }

    /// Create an employee named after the first line of a text file.
    ///
    /// The line is kept verbatim, including its line terminator. The file is
    /// closed before this returns.
    pub fn from_source(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let unreadable = |source: io::Error| SourceError::Unreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let employee = Self::from_reader(BufReader::new(file)).map_err(unreadable)?;

        tracing::info!("Loaded employee {:?} from {}", employee.name, path.display());
        Ok(employee)
    }

    /// Create an employee named after the first line of `reader`
    pub fn from_reader(mut reader: impl BufRead) -> io::Result<Self> {
        let mut name = String::new();
        reader.read_line(&mut name)?;
        Ok(Self::with_min_salary(name))
    }

    /// Employee name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Employee salary, never below [`MIN_SALARY`]
    pub fn salary(&self) -> i64 {
        self.salary
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.salary)
    }
}
