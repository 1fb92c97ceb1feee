use crate::core::{Result, SessionStore, Sesion};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Almacén de sesión en un archivo JSON local, el equivalente de las
/// preferencias de la aplicación móvil.
#[derive(Debug, Clone)]
pub struct ArchivoSesion {
    ruta: PathBuf,
}

impl ArchivoSesion {
    pub fn new(ruta: impl Into<PathBuf>) -> Self {
        Self { ruta: ruta.into() }
    }
}

impl SessionStore for ArchivoSesion {
    fn save(&self, sesion: &Sesion) -> Result<()> {
        if let Some(padre) = self.ruta.parent() {
            if !padre.as_os_str().is_empty() {
                fs::create_dir_all(padre)?;
            }
        }
        let json = serde_json::to_string_pretty(sesion)?;
        fs::write(&self.ruta, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Sesion>> {
        match fs::read_to_string(&self.ruta) {
            Ok(contenido) => Ok(Some(serde_json::from_str(&contenido)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.ruta) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
