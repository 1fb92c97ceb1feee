use crate::core::fields::{pad_campo, ANCHO_EMPRESA, ANCHO_PASSWORD, ANCHO_USUARIO};
use crate::core::parser;
use crate::core::{envelope, Boleto, Result, SessionStore, SoapTransport};
use crate::utils::error::DeltaError;

/// Consulta de boletos con `Eq_LeerBoleto`.
pub struct ServicioRepository<T: SoapTransport, S: SessionStore> {
    transport: T,
    store: S,
}

impl<T: SoapTransport, S: SessionStore> ServicioRepository<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self { transport, store }
    }

    pub async fn leer_boleto(&self, empresa: &str, boleto: i64) -> Result<Boleto> {
        let sesion = self.store.load()?.ok_or(DeltaError::SinSesion)?;

        let cuerpo = envelope::leer_boleto(
            &pad_campo(empresa, ANCHO_EMPRESA),
            boleto,
            sesion.id_servicio,
            &pad_campo(&sesion.usuario, ANCHO_USUARIO),
            &pad_campo(&sesion.password, ANCHO_PASSWORD),
        );
        let xml = self.transport.call(envelope::OP_LEER_BOLETO, cuerpo).await?;

        let respuesta = parser::parse_boleto_response(&xml);
        if respuesta.error != 0 {
            return Err(DeltaError::Soap {
                codigo: respuesta.error,
                descr: respuesta
                    .descr
                    .unwrap_or_else(|| "Error al leer boleto".to_string()),
            });
        }

        Ok(Boleto {
            id: respuesta.id_boleto.unwrap_or(0),
            numero: boleto.to_string(),
            pasajero: respuesta.pasajero.unwrap_or_default(),
            documento: respuesta.documento.unwrap_or_default(),
            butaca: respuesta.butaca,
            id_servicio: sesion.id_servicio,
        })
    }
}
