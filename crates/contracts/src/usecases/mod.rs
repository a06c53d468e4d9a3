pub mod u501_browse_catalog;
pub mod u502_product_detail;
pub mod u503_checkout;
