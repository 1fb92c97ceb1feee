pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::prefs::ArchivoSesion;
pub use adapters::soap::SoapClient;
pub use app::auth::AuthRepository;
pub use app::equipaje::EquipajeRepository;
pub use app::servicio::ServicioRepository;
pub use config::DeltaConfig;
pub use utils::error::{DeltaError, Result};
