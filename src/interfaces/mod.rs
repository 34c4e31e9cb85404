//! Interface adapters: CSV input and report output for the batch runner.

pub mod csv;
