pub mod override_reader;
pub mod report_writer;
pub mod roster_reader;
