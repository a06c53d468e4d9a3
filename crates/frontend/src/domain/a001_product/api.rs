use contracts::domain::a001_product::{Catalog, CatalogSource, LoadError};
use contracts::shared::config::StoreConfig;

use crate::shared::api_utils::{fetch_bytes, fetch_text};
use crate::shared::excel_importer::{read_first_sheet, sheetjs_available};

async fn fetch_spreadsheet(url: &str) -> Result<Catalog, LoadError> {
    if !sheetjs_available() {
        return Err(LoadError::SheetJsMissing);
    }
    let bytes = fetch_bytes(url).await?;
    let rows = read_first_sheet(&bytes).map_err(|reason| LoadError::Parse {
        url: url.to_string(),
        reason,
    })?;
    Ok(Catalog::from_sheet_rows(&rows))
}

async fn fetch_json(url: &str) -> Result<Catalog, LoadError> {
    let text = fetch_text(url).await?;
    Catalog::from_json(url, &text)
}

/// Загрузить каталог: сначала xlsx, при любой ошибке JSON.
/// Пустой, но корректно прочитанный источник считается успехом.
pub async fn fetch_catalog(config: &StoreConfig) -> Result<(Catalog, CatalogSource), LoadError> {
    for source in CatalogSource::FALLBACK_ORDER {
        let result = match source {
            CatalogSource::Spreadsheet => fetch_spreadsheet(&config.products_xlsx).await,
            CatalogSource::Json => fetch_json(&config.products_json).await,
        };
        match result {
            Ok(catalog) => return Ok((catalog, source)),
            Err(LoadError::SheetJsMissing) => {
                log::warn!("SheetJS no disponible, se omite products.xlsx");
            }
            Err(e) => log::warn!("No se pudo cargar {}: {}", source.as_str(), e),
        }
    }
    log::error!("Error loading products");
    Err(LoadError::Exhausted)
}

/// `config.toml` рядом со страницей; при отсутствии или ошибке используются значения по умолчанию
pub async fn fetch_config() -> StoreConfig {
    match fetch_text("config.toml").await {
        Ok(text) => StoreConfig::from_toml_or_default(&text),
        Err(e) => {
            log::debug!("config.toml no disponible ({}), usando valores por defecto", e);
            StoreConfig::default()
        }
    }
}
