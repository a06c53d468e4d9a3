use super::composer::CheckoutError;

/// Грубая классификация устройства по User-Agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();
        let mobile = ["mobi", "android", "iphone", "ipad", "ipod"]
            .iter()
            .any(|marker| ua.contains(marker));
        if mobile {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Готовая ссылка на чат с заказом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLink {
    pub url: String,
    pub device: DeviceClass,
    pub message: String,
}

/// Оставляет только цифры номера. Меньше 6 цифр или заглушка `0000...` — ошибка настройки.
pub fn validate_destination(raw: &str) -> Result<String, CheckoutError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 6 || digits.starts_with("0000") {
        return Err(CheckoutError::MisconfiguredDestination);
    }
    Ok(digits)
}

/// wa.me на телефонах, web.whatsapp.com на десктопе
pub fn deep_link(device: DeviceClass, digits: &str, message: &str) -> String {
    let text = urlencoding::encode(message);
    match device {
        DeviceClass::Mobile => format!("https://wa.me/{digits}?text={text}"),
        DeviceClass::Desktop => {
            format!("https://web.whatsapp.com/send?phone={digits}&text={text}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class() {
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36";
        let desktop = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0";
        assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_user_agent(desktop), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_user_agent(""), DeviceClass::Desktop);
    }

    #[test]
    fn test_validate_destination() {
        assert_eq!(
            validate_destination("+54 9 (263) 465-5146"),
            Ok("5492634655146".to_string())
        );
        assert_eq!(
            validate_destination("12345"),
            Err(CheckoutError::MisconfiguredDestination)
        );
        assert_eq!(
            validate_destination("0000000000"),
            Err(CheckoutError::MisconfiguredDestination)
        );
        assert_eq!(validate_destination(""), Err(CheckoutError::MisconfiguredDestination));
    }

    #[test]
    fn test_deep_link_shapes() {
        assert_eq!(
            deep_link(DeviceClass::Mobile, "5491100", "1 x Mate\nTotal: $5"),
            "https://wa.me/5491100?text=1%20x%20Mate%0ATotal%3A%20%245"
        );
        assert_eq!(
            deep_link(DeviceClass::Desktop, "5491100", "hola"),
            "https://web.whatsapp.com/send?phone=5491100&text=hola"
        );
    }
}
