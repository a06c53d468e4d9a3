pub mod composer;
pub mod deep_link;

pub use composer::{compose_order_message, CheckoutError};
pub use deep_link::{deep_link, validate_destination, CheckoutLink, DeviceClass};

use crate::domain::a001_product::Catalog;
use crate::domain::a002_cart::{Cart, CartStorage};

/// Текст заказа + проверка номера + ссылка для устройства пользователя
pub fn checkout<S: CartStorage>(
    catalog: &Catalog,
    cart: &Cart<S>,
    note: &str,
    destination: &str,
    user_agent: &str,
) -> Result<CheckoutLink, CheckoutError> {
    let message = compose_order_message(catalog, cart, note)?;
    let digits = validate_destination(destination)?;
    let device = DeviceClass::from_user_agent(user_agent);
    Ok(CheckoutLink {
        url: deep_link(device, &digits, &message),
        device,
        message,
    })
}
