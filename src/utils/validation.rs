use crate::utils::error::{DeltaError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(campo: &str, valor: &str) -> Result<()> {
    if valor.is_empty() {
        return Err(DeltaError::ConfigInvalida {
            campo: campo.to_string(),
            valor: valor.to_string(),
            motivo: "la URL no puede estar vacía".to_string(),
        });
    }

    match Url::parse(valor) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            esquema => Err(DeltaError::ConfigInvalida {
                campo: campo.to_string(),
                valor: valor.to_string(),
                motivo: format!("esquema de URL no soportado: {}", esquema),
            }),
        },
        Err(e) => Err(DeltaError::ConfigInvalida {
            campo: campo.to_string(),
            valor: valor.to_string(),
            motivo: format!("formato de URL inválido: {}", e),
        }),
    }
}

pub fn validate_non_empty(campo: &str, valor: &str) -> Result<()> {
    if valor.trim().is_empty() {
        return Err(DeltaError::ConfigInvalida {
            campo: campo.to_string(),
            valor: valor.to_string(),
            motivo: "el valor no puede estar vacío".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    campo: &str,
    valor: T,
    min: T,
    max: T,
) -> Result<()> {
    if valor < min || valor > max {
        return Err(DeltaError::ConfigInvalida {
            campo: campo.to_string(),
            valor: valor.to_string(),
            motivo: format!("el valor debe estar entre {} y {}", min, max),
        });
    }
    Ok(())
}
