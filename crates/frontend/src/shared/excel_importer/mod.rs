pub mod parser;

pub use parser::{read_first_sheet, sheetjs_available};
