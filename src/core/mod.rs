pub mod envelope;
pub mod fields;
pub mod listado;
pub mod parser;
pub mod servicio;

pub use crate::domain::model::{
    Boleto, BoletoRespuesta, EquipajeListado, EquipajeListadoInfo, EstadoRespuesta,
    ListaEquipajesItem, ListaEquipajesRespuesta, LoginRespuesta, ServicioLogin, Sesion,
};
pub use crate::domain::ports::{ConfigProvider, SessionStore, SoapTransport};
pub use crate::utils::error::Result;
