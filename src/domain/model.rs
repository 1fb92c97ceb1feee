use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Servicio asignado al chofer, tal como lo devuelve `Eq_Login`.
///
/// El campo `servicio` conserva el texto crudo del webservice
/// (ej. `"EPA ASU-ENC 31/01/2026 17:30"`); los demás campos se derivan
/// de ese texto por descomposición posicional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicioLogin {
    pub id_servicio: i32,
    pub servicio: String,
    pub empresa: String,
    pub origen: String,
    pub destino: String,
    pub fecha: Option<String>,
    pub hora: Option<String>,
}

/// Resultado estructurado de `Eq_Login`. `error == 0` indica éxito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRespuesta {
    pub error: i32,
    pub descr: Option<String>,
    pub servicios: Vec<ServicioLogin>,
}

/// Respuesta mínima de error + descripción (`Eq_LeerEquipaje` y afines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstadoRespuesta {
    pub error: i32,
    pub descr: Option<String>,
}

/// Respuesta de `Eq_LeerBoleto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoletoRespuesta {
    pub error: i32,
    pub descr: Option<String>,
    pub id_boleto: Option<i32>,
    pub butaca: Option<i32>,
    pub pasajero: Option<String>,
    pub documento: Option<String>,
}

/// Fila cruda de `Eq_ListaDeEquipajes`: boleto + campo compuesto `Texto`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListaEquipajesItem {
    pub id_boleto: i32,
    pub texto: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListaEquipajesRespuesta {
    pub error: i32,
    pub descr: Option<String>,
    pub items: Vec<ListaEquipajesItem>,
}

/// Descomposición del campo `Texto` de una fila del listado.
///
/// Formato esperado: `"15 -39503917- BARRIOS, ARTURO MOISES 0014367,0014368 0014369"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipajeListadoInfo {
    pub cantidad: i32,
    pub documento: String,
    pub pasajero: String,
    pub marbetes: Vec<String>,
}

/// Entrada del listado ya unida a su boleto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipajeListado {
    pub id_boleto: i32,
    pub cantidad: i32,
    pub documento: String,
    pub pasajero: String,
    pub marbetes: Vec<String>,
}

/// Boleto leído con `Eq_LeerBoleto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boleto {
    pub id: i32,
    pub numero: String,
    pub pasajero: String,
    pub documento: String,
    pub butaca: Option<i32>,
    pub id_servicio: i32,
}

/// Sesión negociada en el login y persistida entre invocaciones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sesion {
    pub interno: String,
    pub id_servicio: i32,
    pub servicio: String,
    pub usuario: String,
    pub password: String,
    pub servicios: Vec<ServicioLogin>,
    pub guardada_en: DateTime<Utc>,
}
