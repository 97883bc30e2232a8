// ============================================================================
// FORMAT - Textos derivados para las vistas (fechas es-MX, iniciales, etc.)
// ============================================================================

use chrono::{Datelike, NaiveDateTime, Weekday};

/// Iniciales a partir de las dos primeras palabras del nombre ("U" si no hay nombre)
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let second = words.next().and_then(|w| w.chars().next());
    match (first, second) {
        (Some(a), Some(b)) => format!("{}{}", a, b),
        (Some(a), None) => a.to_string(),
        _ => "U".to_string(),
    }
}

/// "#0042" - número de ticket con relleno a 4 dígitos
pub fn ticket_number(id: &str) -> String {
    format!("#{:0>4}", id)
}

/// Último segmento de una ruta ("uploads/x/reporte.xlsx" -> "reporte.xlsx")
pub fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

pub fn weekday_es(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Fecha corta es-MX: "5/3/2026"
pub fn format_date_es(dt: &NaiveDateTime) -> String {
    format!("{}/{}/{}", dt.day(), dt.month(), dt.year())
}

/// Hora de 24 h: "07:05:09"
pub fn format_time_24h(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Fecha y hora como en el historial: "5/3/2026, 07:05:09"
pub fn format_datetime_es(dt: &NaiveDateTime) -> String {
    format!("{}, {}", format_date_es(dt), format_time_24h(dt))
}

/// Texto del selector de adjuntos
pub fn attachments_label<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    if names.is_empty() {
        "Sin archivos seleccionados".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 5)
            .unwrap()
            .and_hms_opt(7, 5, 9)
            .unwrap()
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("Carlos Vallejo Ruiz"), "CV");
        assert_eq!(initials("  ana  "), "a");
        assert_eq!(initials(""), "U");
    }

    #[test]
    fn ticket_number_is_zero_padded() {
        assert_eq!(ticket_number("42"), "#0042");
        assert_eq!(ticket_number("65f1c2"), "#65f1c2");
    }

    #[test]
    fn file_name_keeps_last_segment() {
        assert_eq!(file_name("uploads/reports/r-1.xlsx"), "r-1.xlsx");
        assert_eq!(file_name("r-1.xlsx"), "r-1.xlsx");
    }

    #[test]
    fn dates_follow_es_mx_layout() {
        let dt = sample();
        assert_eq!(format_date_es(&dt), "5/3/2026");
        assert_eq!(format_time_24h(&dt), "07:05:09");
        assert_eq!(format_datetime_es(&dt), "5/3/2026, 07:05:09");
        assert_eq!(weekday_es(dt.weekday()), "Jueves");
    }

    #[test]
    fn attachments_label_lists_names() {
        assert_eq!(attachments_label(Vec::<&str>::new()), "Sin archivos seleccionados");
        assert_eq!(attachments_label(["a.png", "b.pdf"]), "a.png, b.pdf");
    }
}
