pub mod columns;
pub mod csv;
pub mod roster;
pub mod spreadsheet;
