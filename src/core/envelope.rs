//! Construcción de los cuerpos SOAP 1.1 de las cuatro operaciones del
//! webservice. El orden y el nombre de los elementos son parte del
//! contrato y deben reproducirse tal cual.

use crate::core::fields::CredencialesLogin;
use quick_xml::escape::escape;

pub const NAMESPACE: &str = "Delta";
pub const ACTION_PREFIX: &str = "Delta/";

pub const OP_LOGIN: &str = "Eq_Login";
pub const OP_LEER_BOLETO: &str = "Eq_LeerBoleto";
pub const OP_LEER_EQUIPAJE: &str = "Eq_LeerEquipaje";
pub const OP_LISTA_EQUIPAJES: &str = "Eq_ListaDeEquipajes";

pub fn soap_action(operacion: &str) -> String {
    format!("{}{}", ACTION_PREFIX, operacion)
}

fn envolver(cuerpo: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <soap:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">\n\
         \x20 <soap:Body>\n\
         {}\n\
         \x20 </soap:Body>\n\
         </soap:Envelope>",
        cuerpo
    )
}

fn elemento(nombre: &str, valor: &str) -> String {
    format!("      <{}>{}</{}>", nombre, escape(valor), nombre)
}

fn operacion(nombre: &str, elementos: &[String]) -> String {
    format!(
        "    <{} xmlns=\"{}\">\n{}\n    </{}>",
        nombre,
        NAMESPACE,
        elementos.join("\n"),
        nombre
    )
}

pub fn login(campos: &CredencialesLogin) -> String {
    envolver(&operacion(
        OP_LOGIN,
        &[
            elemento("NroInterno", &campos.nro_interno),
            elemento("PasswordUsuario", &campos.password_usuario),
            elemento("Usuario", &campos.usuario),
            elemento("Password", &campos.password),
        ],
    ))
}

pub fn leer_boleto(
    empresa: &str,
    boleto: i64,
    id_servicio: i32,
    usuario: &str,
    password: &str,
) -> String {
    envolver(&operacion(
        OP_LEER_BOLETO,
        &[
            elemento("Empresa", empresa),
            elemento("Boleto", &boleto.to_string()),
            elemento("IdServicio", &id_servicio.to_string()),
            elemento("Usuario", usuario),
            elemento("Password", password),
        ],
    ))
}

pub fn leer_equipaje(
    id_servicio: i32,
    id_boleto: i32,
    marbete: &str,
    usuario: &str,
    password: &str,
) -> String {
    envolver(&operacion(
        OP_LEER_EQUIPAJE,
        &[
            elemento("IdServicio", &id_servicio.to_string()),
            elemento("IdBoleto", &id_boleto.to_string()),
            elemento("Marbete", marbete),
            elemento("Usuario", usuario),
            elemento("Password", password),
        ],
    ))
}

pub fn lista_de_equipajes(id_servicio: i32, usuario: &str, password: &str) -> String {
    envolver(&operacion(
        OP_LISTA_EQUIPAJES,
        &[
            elemento("IdServicio", &id_servicio.to_string()),
            elemento("Usuario", usuario),
            elemento("Password", password),
        ],
    ))
}
