//! Mini-parser del campo `Texto` de `Eq_ListaDeEquipajes`.
//!
//! Formato: `"<cantidad> -<documento>- <pasajero> <marbete1>,<marbete2> <marbete3>"`.

use crate::domain::model::EquipajeListadoInfo;

/// Interpreta una entrada del listado. Devuelve `None` si la entrada no
/// sigue el formato; el llamador debe saltearla sin abortar el listado.
pub fn parse_texto(texto: &str) -> Option<EquipajeListadoInfo> {
    let recortado = texto.trim();
    let partes: Vec<&str> = recortado.split(' ').collect();
    if partes.len() < 3 {
        return None;
    }

    let cantidad: i32 = partes[0].parse().ok()?;
    let documento = partes[1].replace('-', "");

    // Resto del texto después del token del documento.
    let despues = recortado.find(partes[1])? + partes[1].len();
    let resto = recortado[despues..].trim();

    // El nombre del pasajero termina donde empieza el primer dígito.
    let (pasajero, bloque_marbetes) = match resto.find(|c: char| c.is_ascii_digit()) {
        Some(corte) if corte > 0 => (resto[..corte].trim(), &resto[corte..]),
        _ => (resto, ""),
    };

    let marbetes = bloque_marbetes
        .split([' ', ','])
        .filter(|f| !f.is_empty())
        .map(String::from)
        .collect();

    Some(EquipajeListadoInfo {
        cantidad,
        documento,
        pasajero: pasajero.to_string(),
        marbetes,
    })
}
