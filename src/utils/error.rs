use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeltaError {
    #[error("error de conexión: {0}")]
    Http(#[from] reqwest::Error),

    #[error("error HTTP {0} del webservice")]
    HttpStatus(u16),

    #[error("error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("error de serialización: {0}")]
    Serializacion(#[from] serde_json::Error),

    #[error("error de configuración: {0}")]
    ConfigToml(#[from] toml::de::Error),

    #[error("error de CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("valor inválido para {campo}: {motivo}")]
    ConfigInvalida {
        campo: String,
        valor: String,
        motivo: String,
    },

    #[error("el webservice devolvió error {codigo}: {descr}")]
    Soap { codigo: i32, descr: String },

    #[error("no hay sesión activa")]
    SinSesion,

    #[error("no hay servicios asignados para este interno")]
    SinServicios,

    #[error("el servicio {0} no está asignado a esta sesión")]
    ServicioDesconocido(i32),
}

pub type Result<T> = std::result::Result<T, DeltaError>;
