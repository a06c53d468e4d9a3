pub mod delivery;
pub mod view;

pub use delivery::deliver;
pub use view::CheckoutForm;
