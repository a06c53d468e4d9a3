pub mod panel;

pub use panel::CartModal;
