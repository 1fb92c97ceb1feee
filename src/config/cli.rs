use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "equipaje")]
#[command(about = "Cliente del WebService Delta para check-in de equipaje")]
pub struct Cli {
    /// Archivo de configuración TOML (opcional)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Habilita salida detallada
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub comando: Comando,
}

#[derive(Debug, Subcommand)]
pub enum Comando {
    /// Inicia sesión con el interno del chofer
    Login {
        interno: String,
        password: String,
    },
    /// Muestra los servicios asignados en la sesión actual
    Servicios,
    /// Cambia el servicio activo de la sesión
    Seleccionar {
        id_servicio: i32,
    },
    /// Consulta un boleto por empresa y número
    Boleto {
        empresa: String,
        numero: i64,
    },
    /// Valida un marbete contra un boleto del servicio
    Equipaje {
        id_boleto: i32,
        marbete: String,
    },
    /// Lista los equipajes del servicio activo
    Lista {
        /// Exporta el listado a un archivo CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Cierra la sesión activa
    Logout,
}
