use contracts::domain::a001_product::SheetRow;
use wasm_bindgen::prelude::*;

/// JS binding к SheetJS: первая страница книги как массив объектов
/// (`XLSX.utils.sheet_to_json(sheet, { defval: '' })`), см. `index.html`
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = readFirstSheetRows, catch)]
    fn read_first_sheet_rows(data: &[u8]) -> Result<JsValue, JsValue>;
}

/// Подключена ли SheetJS на странице (глобальный `XLSX`)
pub fn sheetjs_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("XLSX")).unwrap_or(false)
}

/// Парсит xlsx и возвращает строки первой страницы: заголовок -> ячейка
pub fn read_first_sheet(bytes: &[u8]) -> Result<Vec<SheetRow>, String> {
    let rows = read_first_sheet_rows(bytes)
        .map_err(|e| format!("Error al leer el Excel: {:?}", e))?;

    if !rows.is_array() {
        return Err("El resultado del Excel no es un arreglo".to_string());
    }

    serde_wasm_bindgen::from_value(rows).map_err(|e| e.to_string())
}
