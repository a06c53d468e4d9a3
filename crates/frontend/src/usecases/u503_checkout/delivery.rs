use contracts::usecases::u503_checkout::CheckoutLink;

use crate::shared::browser;
use crate::shared::clipboard::copy_to_clipboard_or_else;

const COPIED_NOTICE: &str = "No se pudo abrir WhatsApp automáticamente. Enlace copiado al portapapeles. Pégalo en el navegador para continuar.";

/// Открыть ссылку на заказ.
///
/// Новая вкладка; если браузер её заблокировал, ссылка копируется в буфер
/// обмена; если и это не удалось, текущая страница уходит по ссылке.
pub fn deliver(link: &CheckoutLink) {
    let url = link.url.clone();
    log::info!("WhatsApp URL ({:?}): {}", link.device, url);

    match browser::open_in_new_tab(&url) {
        Ok(true) => {}
        Ok(false) => {
            log::warn!("window.open bloqueado, copiando enlace");
            let fallback = url.clone();
            copy_to_clipboard_or_else(
                &url,
                || browser::alert(COPIED_NOTICE),
                move || browser::navigate(&fallback),
            );
        }
        Err(e) => {
            log::warn!("window.open falló: {:?}", e);
            browser::navigate(&url);
        }
    }
}
