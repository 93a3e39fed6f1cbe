//! employee-record: an employee record with a salary floor
//!
//! This crate provides the [`Employee`] record, whose salary is raised to
//! [`MIN_SALARY`] at construction, and an alternate constructor that takes
//! the name from the first line of a text file.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;

pub use app::{App, Report};
pub use config::AppConfig;
pub use domain::{Employee, MIN_SALARY};
pub use error::{AppError, Result, SourceError};
