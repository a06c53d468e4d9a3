//! Headless storefront domain: catalog, cart, navigation, product detail and checkout.
//!
//! Nothing here touches the DOM; the `frontend` crate owns rendering and browser APIs
//! and drives everything through [`storefront::Storefront`].

pub mod domain;
pub mod shared;
pub mod storefront;
pub mod usecases;
