use crate::core::envelope;
use crate::core::fields::CredencialesLogin;
use crate::core::parser;
use crate::core::{ConfigProvider, Result, ServicioLogin, SessionStore, Sesion, SoapTransport};
use crate::utils::error::DeltaError;
use chrono::Utc;

/// Login del chofer contra `Eq_Login` y manejo de la sesión resultante.
pub struct AuthRepository<T: SoapTransport, S: SessionStore> {
    transport: T,
    store: S,
    usuario_sistema: String,
    password_sistema: String,
}

impl<T: SoapTransport, S: SessionStore> AuthRepository<T, S> {
    pub fn new(transport: T, store: S, config: &impl ConfigProvider) -> Self {
        Self {
            transport,
            store,
            usuario_sistema: config.usuario_sistema().to_string(),
            password_sistema: config.password_sistema().to_string(),
        }
    }

    /// Autentica el interno y persiste la sesión con el primer servicio
    /// asignado como servicio activo.
    pub async fn login(&self, interno: &str, password: &str) -> Result<Sesion> {
        let campos = CredencialesLogin::new(
            interno,
            password,
            &self.usuario_sistema,
            &self.password_sistema,
        );
        let xml = self
            .transport
            .call(envelope::OP_LOGIN, envelope::login(&campos))
            .await?;

        let respuesta = parser::parse_login_response(&xml);
        if respuesta.error != 0 {
            return Err(DeltaError::Soap {
                codigo: respuesta.error,
                descr: respuesta
                    .descr
                    .unwrap_or_else(|| "Error en login".to_string()),
            });
        }

        let primero = respuesta
            .servicios
            .first()
            .cloned()
            .ok_or(DeltaError::SinServicios)?;

        let sesion = Sesion {
            interno: interno.trim().to_string(),
            id_servicio: primero.id_servicio,
            servicio: primero.servicio.trim().to_string(),
            usuario: self.usuario_sistema.clone(),
            password: self.password_sistema.clone(),
            servicios: respuesta.servicios,
            guardada_en: Utc::now(),
        };
        self.store.save(&sesion)?;

        tracing::info!(
            interno = %sesion.interno,
            id_servicio = sesion.id_servicio,
            servicios = sesion.servicios.len(),
            "sesión iniciada"
        );
        Ok(sesion)
    }

    pub fn sesion_actual(&self) -> Result<Option<Sesion>> {
        self.store.load()
    }

    /// Servicios asignados en el último login, en el orden del webservice.
    pub fn servicios(&self) -> Result<Vec<ServicioLogin>> {
        Ok(self
            .store
            .load()?
            .map(|sesion| sesion.servicios)
            .unwrap_or_default())
    }

    /// Cambia el servicio activo de la sesión por otro de los asignados.
    pub fn seleccionar_servicio(&self, id_servicio: i32) -> Result<Sesion> {
        let mut sesion = self.store.load()?.ok_or(DeltaError::SinSesion)?;
        let elegido = sesion
            .servicios
            .iter()
            .find(|s| s.id_servicio == id_servicio)
            .cloned()
            .ok_or(DeltaError::ServicioDesconocido(id_servicio))?;

        sesion.id_servicio = elegido.id_servicio;
        sesion.servicio = elegido.servicio.trim().to_string();
        self.store.save(&sesion)?;
        Ok(sesion)
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()
    }
}
