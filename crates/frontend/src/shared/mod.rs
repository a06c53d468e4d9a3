pub mod api_utils;
pub mod browser;
pub mod clipboard;
pub mod excel_importer;
pub mod icons;
pub mod modal_frame;
pub mod search_input;
pub mod storage;
