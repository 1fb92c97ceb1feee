//! Descomposición heurística del campo `Servicio` de `Eq_Login`.
//!
//! El webservice no ofrece un formato estructurado: devuelve una línea
//! como `"EPA ASU-ENC 31/01/2026 17:30"` o `"EPA FAR-CDE 19/02/26 22:00"`.
//! Se extraen fecha y hora por patrón y el resto se parte por posición.

use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampoServicio {
    pub empresa: String,
    pub origen: String,
    pub destino: String,
    pub fecha: Option<String>,
    pub hora: Option<String>,
}

fn patron_fecha() -> &'static Regex {
    static PATRON: OnceLock<Regex> = OnceLock::new();
    PATRON.get_or_init(|| Regex::new(r"\d{2}/\d{2}/\d{2,4}").expect("patrón fijo"))
}

fn patron_hora() -> &'static Regex {
    static PATRON: OnceLock<Regex> = OnceLock::new();
    PATRON.get_or_init(|| Regex::new(r"\d{2}:\d{2}").expect("patrón fijo"))
}

/// Años de dos dígitos se asumen del 2000 en adelante.
fn expandir_anio(fecha: &str) -> String {
    let partes: Vec<&str> = fecha.split('/').collect();
    if partes.len() == 3 && partes[2].len() == 2 {
        format!("{}/{}/20{}", partes[0], partes[1], partes[2])
    } else {
        fecha.to_string()
    }
}

/// Descompone el texto del servicio en empresa, origen, destino, fecha y hora.
///
/// Es una heurística de mejor esfuerzo: ante un texto que no siga el
/// formato conocido los componentes quedan como cadena vacía o ausentes,
/// nunca se falla.
pub fn parse_campo_servicio(texto: &str) -> CampoServicio {
    let fecha_match = patron_fecha().find(texto);
    let hora_match = patron_hora().find(texto);

    let fecha = fecha_match.map(|m| expandir_anio(m.as_str()));
    let hora = hora_match.map(|m| m.as_str().to_string());

    let mut sin_fecha_hora = texto.to_string();
    if let Some(m) = fecha_match {
        sin_fecha_hora = sin_fecha_hora.replacen(m.as_str(), "", 1);
    }
    if let Some(m) = hora_match {
        sin_fecha_hora = sin_fecha_hora.replacen(m.as_str(), "", 1);
    }
    let sin_fecha_hora = sin_fecha_hora.trim();

    let mut partes = sin_fecha_hora.splitn(2, ' ');
    let empresa = partes.next().unwrap_or("").to_string();
    let ruta = partes.next().unwrap_or("");

    let mut ruta_partes = ruta.splitn(2, '-');
    let origen = ruta_partes.next().unwrap_or("").to_string();
    let destino = ruta_partes.next().unwrap_or("").to_string();

    CampoServicio {
        empresa,
        origen,
        destino,
        fecha,
        hora,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formato_completo_con_anio_largo() {
        let campo = parse_campo_servicio("EPA ASU-ENC 31/01/2026 17:30");
        assert_eq!(campo.empresa, "EPA");
        assert_eq!(campo.origen, "ASU");
        assert_eq!(campo.destino, "ENC");
        assert_eq!(campo.fecha.as_deref(), Some("31/01/2026"));
        assert_eq!(campo.hora.as_deref(), Some("17:30"));
    }

    #[test]
    fn test_anio_corto_se_expande_a_2000() {
        let campo = parse_campo_servicio("EPA FAR-CDE 19/02/26 22:00");
        assert_eq!(campo.fecha.as_deref(), Some("19/02/2026"));
        assert_eq!(campo.hora.as_deref(), Some("22:00"));
        assert_eq!(campo.origen, "FAR");
        assert_eq!(campo.destino, "CDE");
    }

    #[test]
    fn test_sin_ruta() {
        let campo = parse_campo_servicio("EPA 31/01/2026 17:30");
        assert_eq!(campo.empresa, "EPA");
        assert_eq!(campo.origen, "");
        assert_eq!(campo.destino, "");
    }

    #[test]
    fn test_ruta_sin_destino() {
        let campo = parse_campo_servicio("EPA ASU 31/01/2026 17:30");
        assert_eq!(campo.origen, "ASU");
        assert_eq!(campo.destino, "");
    }

    #[test]
    fn test_sin_fecha_ni_hora() {
        let campo = parse_campo_servicio("SERVICIO ESPECIAL");
        assert_eq!(campo.empresa, "SERVICIO");
        assert_eq!(campo.origen, "ESPECIAL");
        assert_eq!(campo.destino, "");
        assert_eq!(campo.fecha, None);
        assert_eq!(campo.hora, None);
    }

    #[test]
    fn test_texto_vacio() {
        let campo = parse_campo_servicio("");
        assert_eq!(campo, CampoServicio::default());
    }
}
