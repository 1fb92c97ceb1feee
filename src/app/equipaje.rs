use crate::core::fields::{pad_campo, truncar_campo, ANCHO_PASSWORD, ANCHO_USUARIO, LARGO_MARBETE};
use crate::core::{envelope, listado, parser};
use crate::core::{EquipajeListado, Result, SessionStore, SoapTransport};
use crate::utils::error::DeltaError;
use std::path::Path;

/// Validación de marbetes y listado de equipajes del servicio activo.
pub struct EquipajeRepository<T: SoapTransport, S: SessionStore> {
    transport: T,
    store: S,
}

impl<T: SoapTransport, S: SessionStore> EquipajeRepository<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self { transport, store }
    }

    /// Valida un marbete contra un boleto del servicio con `Eq_LeerEquipaje`.
    pub async fn leer_equipaje(&self, id_boleto: i32, marbete: &str) -> Result<()> {
        let sesion = self.store.load()?.ok_or(DeltaError::SinSesion)?;

        let cuerpo = envelope::leer_equipaje(
            sesion.id_servicio,
            id_boleto,
            &truncar_campo(marbete, LARGO_MARBETE),
            &pad_campo(&sesion.usuario, ANCHO_USUARIO),
            &pad_campo(&sesion.password, ANCHO_PASSWORD),
        );
        let xml = self
            .transport
            .call(envelope::OP_LEER_EQUIPAJE, cuerpo)
            .await?;

        let estado = parser::parse_estado_response(&xml);
        if estado.error != 0 {
            return Err(DeltaError::Soap {
                codigo: estado.error,
                descr: estado
                    .descr
                    .unwrap_or_else(|| "Marbete inválido".to_string()),
            });
        }
        Ok(())
    }

    /// Lista los equipajes del servicio activo con `Eq_ListaDeEquipajes`.
    ///
    /// Las filas cuyo campo `Texto` no se puede interpretar se saltean;
    /// el resto del listado se devuelve igual.
    pub async fn lista_de_equipajes(&self) -> Result<Vec<EquipajeListado>> {
        let sesion = self.store.load()?.ok_or(DeltaError::SinSesion)?;
        if sesion.id_servicio == 0 {
            return Ok(Vec::new());
        }

        let cuerpo = envelope::lista_de_equipajes(
            sesion.id_servicio,
            &pad_campo(&sesion.usuario, ANCHO_USUARIO),
            &pad_campo(&sesion.password, ANCHO_PASSWORD),
        );
        let xml = self
            .transport
            .call(envelope::OP_LISTA_EQUIPAJES, cuerpo)
            .await?;

        let respuesta = parser::parse_lista_response(&xml);
        if respuesta.error != 0 {
            return Err(DeltaError::Soap {
                codigo: respuesta.error,
                descr: respuesta
                    .descr
                    .unwrap_or_else(|| "Error al obtener lista".to_string()),
            });
        }

        let entradas: Vec<EquipajeListado> = respuesta
            .items
            .iter()
            .filter_map(|item| {
                let info = listado::parse_texto(&item.texto);
                if info.is_none() {
                    tracing::warn!(id_boleto = item.id_boleto, texto = %item.texto, "entrada de listado ilegible, se saltea");
                }
                info.map(|info| EquipajeListado {
                    id_boleto: item.id_boleto,
                    cantidad: info.cantidad,
                    documento: info.documento,
                    pasajero: info.pasajero,
                    marbetes: info.marbetes,
                })
            })
            .collect();

        Ok(entradas)
    }
}

/// Exporta el listado a un archivo CSV con un marbete por columna unida.
pub fn exportar_csv(entradas: &[EquipajeListado], destino: &Path) -> Result<()> {
    let mut escritor = csv::Writer::from_path(destino)?;
    escritor.write_record(["id_boleto", "cantidad", "documento", "pasajero", "marbetes"])?;
    for entrada in entradas {
        escritor.write_record([
            entrada.id_boleto.to_string(),
            entrada.cantidad.to_string(),
            entrada.documento.clone(),
            entrada.pasajero.clone(),
            entrada.marbetes.join(" "),
        ])?;
    }
    escritor.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exportar_csv() {
        let entradas = vec![
            EquipajeListado {
                id_boleto: 31,
                cantidad: 15,
                documento: "39503917".to_string(),
                pasajero: "BARRIOS, ARTURO MOISES".to_string(),
                marbetes: vec![
                    "0014367".to_string(),
                    "0014368".to_string(),
                    "0014369".to_string(),
                ],
            },
            EquipajeListado {
                id_boleto: 33,
                cantidad: 1,
                documento: "1234567".to_string(),
                pasajero: "GONZALEZ, MARIA".to_string(),
                marbetes: vec!["0020001".to_string()],
            },
        ];

        let dir = tempdir().expect("tempdir");
        let destino = dir.path().join("listado.csv");
        exportar_csv(&entradas, &destino).expect("exportar");

        let contenido = std::fs::read_to_string(&destino).expect("leer csv");
        let mut lineas = contenido.lines();
        assert_eq!(
            lineas.next(),
            Some("id_boleto,cantidad,documento,pasajero,marbetes")
        );
        assert_eq!(
            lineas.next(),
            Some("31,15,39503917,\"BARRIOS, ARTURO MOISES\",0014367 0014368 0014369")
        );
        assert_eq!(
            lineas.next(),
            Some("33,1,1234567,\"GONZALEZ, MARIA\",0020001")
        );
    }
}
