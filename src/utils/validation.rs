//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Formato de matrícula india: KA01MJ2022
    pub static ref REGISTRATION_NUMBER_RE: Regex =
        Regex::new(r"^[A-Z]{2}\d{2}[A-Z]{1,2}\d{4}$").unwrap();
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar formato de número de registro de vehículo
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    if !REGISTRATION_NUMBER_RE.is_match(value) {
        let mut error = ValidationError::new("registration_number");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"AA00AA0000".to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        let valid_date = "2024-01-15";
        assert!(validate_date(valid_date).is_ok());

        let invalid_date = "2024/01/15";
        assert!(validate_date(invalid_date).is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("KA01MJ2022").is_ok());
        assert!(validate_registration_number("MH12AB1234").is_ok());
        assert!(validate_registration_number("K01MJ2022").is_err());
        assert!(validate_registration_number("ka01mj2022").is_err());
        assert!(validate_registration_number("KA01MJ22").is_err());
    }
}
