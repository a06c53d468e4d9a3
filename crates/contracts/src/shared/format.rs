/// Форматирует число как `toLocaleString('es-AR')`: точки между тысячами,
/// запятая перед дробной частью, не больше трёх знаков после запятой
/// без хвостовых нулей.
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567.0), "1.234.567");
/// assert_eq!(format_number(12.5), "12,5");
/// ```
pub fn format_number(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rounded = (value * 1000.0).round() / 1000.0;
    let negative = rounded < 0.0;

    let text = format!("{:.3}", rounded.abs());
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (text.as_str(), ""),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    if !fraction_part.is_empty() {
        result.push(',');
        result.push_str(fraction_part);
    }
    if negative {
        result.insert(0, '-');
    }
    result
}

/// Денежная сумма для витрины: `$` + число в формате es-AR
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1.000");
        assert_eq!(format_number(1234567.0), "1.234.567");
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(0.1234), "0,123");
        assert_eq!(format_number(-1500.25), "-1.500,25");
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(100.0), "$100");
        assert_eq!(format_money(250.0), "$250");
        assert_eq!(format_money(12500.0), "$12.500");
        assert_eq!(format_money(f64::NAN), "$0");
    }
}
