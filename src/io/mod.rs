pub mod csv;
pub mod log;

pub use csv::CsvRecorder;
pub use log::ConsoleLogger;
