//! Anchos fijos del contrato del webservice.
//!
//! El servicio espera campos CHAR de ancho exacto: el relleno es con
//! espacios al final y el sobrante se corta sin avisar. El corte
//! silencioso es comportamiento del contrato, no un defecto.

pub const ANCHO_NRO_INTERNO: usize = 10;
pub const ANCHO_USUARIO: usize = 7;
pub const ANCHO_PASSWORD: usize = 7;
pub const ANCHO_EMPRESA: usize = 3;
pub const LARGO_MARBETE: usize = 15;

/// Rellena con espacios al final y corta al ancho exacto.
pub fn pad_campo(valor: &str, ancho: usize) -> String {
    let mut campo: String = valor.chars().take(ancho).collect();
    let usados = campo.chars().count();
    campo.extend(std::iter::repeat(' ').take(ancho - usados));
    campo
}

/// Corta al largo máximo sin rellenar (campos VARCHAR como el marbete).
pub fn truncar_campo(valor: &str, largo: usize) -> String {
    valor.chars().take(largo).collect()
}

/// Los cuatro campos de `Eq_Login`, ya ajustados a su ancho fijo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredencialesLogin {
    pub nro_interno: String,
    pub password_usuario: String,
    pub usuario: String,
    pub password: String,
}

impl CredencialesLogin {
    pub fn new(interno: &str, password_usuario: &str, usuario: &str, password: &str) -> Self {
        Self {
            nro_interno: pad_campo(interno, ANCHO_NRO_INTERNO),
            password_usuario: pad_campo(password_usuario, ANCHO_PASSWORD),
            usuario: pad_campo(usuario, ANCHO_USUARIO),
            password: pad_campo(password, ANCHO_PASSWORD),
        }
    }
}
