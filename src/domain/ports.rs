use crate::domain::model::Sesion;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Transporte hacia el webservice: envía un cuerpo SOAP y devuelve
/// el XML de respuesta completo. El timeout y los reintentos son
/// responsabilidad de la implementación.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    async fn call(&self, operacion: &str, cuerpo: String) -> Result<String>;
}

/// Almacén de la sesión negociada en el login.
pub trait SessionStore: Send + Sync {
    fn save(&self, sesion: &Sesion) -> Result<()>;
    fn load(&self) -> Result<Option<Sesion>>;
    fn clear(&self) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn usuario_sistema(&self) -> &str;
    fn password_sistema(&self) -> &str;
}
