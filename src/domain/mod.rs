//! Domain entities for employee-record.

mod employee;

pub use employee::{Employee, MIN_SALARY};
