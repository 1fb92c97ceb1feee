//! Lectura de las respuestas XML del webservice.
//!
//! Las respuestas no siguen un esquema publicado: se recorre el markup
//! secuencialmente y se capturan elementos por nombre, tomando la primera
//! aparición de cada uno a cualquier profundidad. Una entrada que no se
//! puede tokenizar produce un resultado estructurado con `error = -1`,
//! nunca un fallo hacia el llamador.

use crate::core::servicio::parse_campo_servicio;
use crate::domain::model::{
    BoletoRespuesta, EstadoRespuesta, ListaEquipajesItem, ListaEquipajesRespuesta, LoginRespuesta,
    ServicioLogin,
};
use quick_xml::events::Event;
use quick_xml::Reader;

fn descr_ilegible(e: quick_xml::Error) -> String {
    format!("Error parseando respuesta: {}", e)
}

/// Respuesta de `Eq_Login`: código de error, descripción y la lista de
/// servicios asignados en orden de documento. El primer servicio es el
/// que el llamador selecciona por defecto.
pub fn parse_login_response(xml: &str) -> LoginRespuesta {
    match walk_login(xml) {
        Ok(respuesta) => respuesta,
        Err(e) => LoginRespuesta {
            error: -1,
            descr: Some(descr_ilegible(e)),
            servicios: Vec::new(),
        },
    }
}

fn walk_login(xml: &str) -> Result<LoginRespuesta, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut error: Option<i32> = None;
    let mut descr: Option<String> = None;
    let mut servicios = Vec::new();

    let mut en_bloque = false;
    let mut id_actual: Option<i32> = None;
    let mut servicio_actual: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Error" if error.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    error = Some(texto.trim().parse().unwrap_or(-1));
                }
                b"Descr" if descr.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    descr = Some(texto.trim().to_string());
                }
                b"Eq_Login" => {
                    en_bloque = true;
                    id_actual = None;
                    servicio_actual = None;
                }
                b"IdServicio" if en_bloque => {
                    let texto = reader.read_text(e.name())?;
                    id_actual = texto.trim().parse().ok();
                }
                b"Servicio" if en_bloque => {
                    let texto = reader.read_text(e.name())?;
                    servicio_actual = Some(texto.trim().to_string());
                }
                _ => {}
            },
            Event::End(e) => {
                if e.local_name().as_ref() == b"Eq_Login" && en_bloque {
                    if let (Some(id_servicio), Some(servicio)) =
                        (id_actual.take(), servicio_actual.take())
                    {
                        let campos = parse_campo_servicio(&servicio);
                        servicios.push(ServicioLogin {
                            id_servicio,
                            servicio,
                            empresa: campos.empresa,
                            origen: campos.origen,
                            destino: campos.destino,
                            fecha: campos.fecha,
                            hora: campos.hora,
                        });
                    }
                    en_bloque = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let error = error.unwrap_or(-1);
    if error != 0 {
        servicios.clear();
    }
    Ok(LoginRespuesta {
        error,
        descr,
        servicios,
    })
}

/// Respuesta mínima (`Error` + `Descr`) usada por `Eq_LeerEquipaje`.
/// La ausencia del código de error se reporta como -1.
pub fn parse_estado_response(xml: &str) -> EstadoRespuesta {
    match walk_estado(xml) {
        Ok(respuesta) => respuesta,
        Err(e) => EstadoRespuesta {
            error: -1,
            descr: Some(descr_ilegible(e)),
        },
    }
}

fn walk_estado(xml: &str) -> Result<EstadoRespuesta, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut error: Option<i32> = None;
    let mut descr: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Error" if error.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    error = Some(texto.trim().parse().unwrap_or(-1));
                }
                b"Descr" if descr.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    descr = Some(texto.trim().to_string());
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(EstadoRespuesta {
        error: error.unwrap_or(-1),
        descr,
    })
}

/// Respuesta de `Eq_LeerBoleto`.
pub fn parse_boleto_response(xml: &str) -> BoletoRespuesta {
    match walk_boleto(xml) {
        Ok(respuesta) => respuesta,
        Err(e) => BoletoRespuesta {
            error: -1,
            descr: Some(descr_ilegible(e)),
            id_boleto: None,
            butaca: None,
            pasajero: None,
            documento: None,
        },
    }
}

fn walk_boleto(xml: &str) -> Result<BoletoRespuesta, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut error: Option<i32> = None;
    let mut descr: Option<String> = None;
    let mut id_boleto: Option<i32> = None;
    let mut butaca: Option<i32> = None;
    let mut pasajero: Option<String> = None;
    let mut documento: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Error" if error.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    error = Some(texto.trim().parse().unwrap_or(-1));
                }
                b"Descr" if descr.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    descr = Some(texto.trim().to_string());
                }
                b"IdBoleto" if id_boleto.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    id_boleto = texto.trim().parse().ok();
                }
                b"Butaca" if butaca.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    butaca = texto.trim().parse().ok();
                }
                b"Pasajero" if pasajero.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    pasajero = Some(texto.trim().to_string());
                }
                b"Documento" if documento.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    documento = Some(texto.trim().to_string());
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(BoletoRespuesta {
        error: error.unwrap_or(-1),
        descr,
        id_boleto,
        butaca,
        pasajero,
        documento,
    })
}

/// Respuesta de `Eq_ListaDeEquipajes`: filas repetidas de
/// (`HD_IdBoleto`, `Texto`) en orden de documento. El campo `Texto` se
/// interpreta aparte con [`crate::core::listado::parse_texto`].
pub fn parse_lista_response(xml: &str) -> ListaEquipajesRespuesta {
    match walk_lista(xml) {
        Ok(respuesta) => respuesta,
        Err(e) => ListaEquipajesRespuesta {
            error: -1,
            descr: Some(descr_ilegible(e)),
            items: Vec::new(),
        },
    }
}

fn walk_lista(xml: &str) -> Result<ListaEquipajesRespuesta, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut error: Option<i32> = None;
    let mut descr: Option<String> = None;
    let mut items = Vec::new();

    let mut en_fila = false;
    let mut id_actual: Option<i32> = None;
    let mut texto_actual: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Error" if error.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    error = Some(texto.trim().parse().unwrap_or(-1));
                }
                b"Descr" if descr.is_none() => {
                    let texto = reader.read_text(e.name())?;
                    descr = Some(texto.trim().to_string());
                }
                b"Eq_ListaDeEquipajes" => {
                    en_fila = true;
                    id_actual = None;
                    texto_actual = None;
                }
                b"HD_IdBoleto" if en_fila => {
                    let texto = reader.read_text(e.name())?;
                    id_actual = texto.trim().parse().ok();
                }
                b"Texto" if en_fila => {
                    let texto = reader.read_text(e.name())?;
                    texto_actual = Some(texto.trim().to_string());
                }
                _ => {}
            },
            Event::End(e) => {
                if e.local_name().as_ref() == b"Eq_ListaDeEquipajes" && en_fila {
                    if let (Some(id_boleto), Some(texto)) = (id_actual.take(), texto_actual.take())
                    {
                        items.push(ListaEquipajesItem { id_boleto, texto });
                    }
                    en_fila = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let error = error.unwrap_or(-1);
    if error != 0 {
        items.clear();
    }
    Ok(ListaEquipajesRespuesta {
        error,
        descr,
        items,
    })
}
