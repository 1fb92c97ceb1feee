pub mod auth;
pub mod equipaje;
pub mod servicio;
