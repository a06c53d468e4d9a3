pub mod u501_browse_catalog;
pub mod u503_checkout;
