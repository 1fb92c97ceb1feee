use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const TIMEOUT_SEGUNDOS_DEFECTO: u64 = 30;

/// Configuración del cliente. Sin archivo se usan los valores del
/// webservice productivo de Delta.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeltaConfig {
    #[serde(default)]
    pub webservice: WebserviceConfig,
    #[serde(default)]
    pub sistema: SistemaConfig,
    #[serde(default)]
    pub sesion: SesionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebserviceConfig {
    pub endpoint: String,
    pub timeout_segundos: Option<u64>,
}

impl Default for WebserviceConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://servidordeltapy.dyndns.org/WSDelta_POS/wsdelta_pos.asmx".to_string(),
            timeout_segundos: None,
        }
    }
}

/// Credenciales del sistema que el webservice exige en cada operación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SistemaConfig {
    pub usuario: String,
    pub password: String,
}

impl Default for SistemaConfig {
    fn default() -> Self {
        Self {
            usuario: "cEl$*eM".to_string(),
            password: "eMbA*mArB#$".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SesionConfig {
    pub archivo: String,
}

impl Default for SesionConfig {
    fn default() -> Self {
        Self {
            archivo: ".equipaje_sesion.json".to_string(),
        }
    }
}

impl DeltaConfig {
    pub fn from_file<P: AsRef<Path>>(ruta: P) -> Result<Self> {
        let contenido = std::fs::read_to_string(ruta)?;
        Self::from_toml_str(&contenido)
    }

    pub fn from_toml_str(contenido: &str) -> Result<Self> {
        Ok(toml::from_str(contenido)?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.webservice
                .timeout_segundos
                .unwrap_or(TIMEOUT_SEGUNDOS_DEFECTO),
        )
    }
}

impl Validate for DeltaConfig {
    fn validate(&self) -> Result<()> {
        validate_url("webservice.endpoint", &self.webservice.endpoint)?;
        validate_non_empty("sistema.usuario", &self.sistema.usuario)?;
        validate_non_empty("sistema.password", &self.sistema.password)?;
        validate_non_empty("sesion.archivo", &self.sesion.archivo)?;
        if let Some(timeout) = self.webservice.timeout_segundos {
            validate_range("webservice.timeout_segundos", timeout, 1, 300)?;
        }
        Ok(())
    }
}

impl ConfigProvider for DeltaConfig {
    fn endpoint(&self) -> &str {
        &self.webservice.endpoint
    }

    fn timeout(&self) -> Duration {
        DeltaConfig::timeout(self)
    }

    fn usuario_sistema(&self) -> &str {
        &self.sistema.usuario
    }

    fn password_sistema(&self) -> &str {
        &self.sistema.password
    }
}
