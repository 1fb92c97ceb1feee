use clap::Parser;
use delta_equipaje::config::cli::{Cli, Comando};
use delta_equipaje::domain::model::ServicioLogin;
use delta_equipaje::utils::logger;
use delta_equipaje::utils::validation::Validate;
use delta_equipaje::{
    app, ArchivoSesion, AuthRepository, DeltaConfig, EquipajeRepository, ServicioRepository,
    SoapClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = match &cli.config {
        Some(ruta) => DeltaConfig::from_file(ruta)?,
        None => DeltaConfig::default(),
    };
    if let Err(e) = config.validate() {
        tracing::error!("configuración inválida: {}", e);
        eprintln!("configuración inválida: {}", e);
        std::process::exit(1);
    }

    let transport = SoapClient::new(config.webservice.endpoint.clone(), config.timeout())?;
    let store = ArchivoSesion::new(&config.sesion.archivo);

    match cli.comando {
        Comando::Login { interno, password } => {
            let auth = AuthRepository::new(transport, store, &config);
            let sesion = auth.login(&interno, &password).await?;
            println!("Sesión iniciada para el interno {}", sesion.interno);
            println!(
                "Servicio activo: {} ({})",
                sesion.servicio, sesion.id_servicio
            );
            for servicio in &sesion.servicios {
                imprimir_servicio(servicio);
            }
        }
        Comando::Servicios => {
            let auth = AuthRepository::new(transport, store, &config);
            let servicios = auth.servicios()?;
            if servicios.is_empty() {
                println!("No hay sesión activa. Use el comando login.");
            } else {
                for servicio in &servicios {
                    imprimir_servicio(servicio);
                }
            }
        }
        Comando::Seleccionar { id_servicio } => {
            let auth = AuthRepository::new(transport, store, &config);
            let sesion = auth.seleccionar_servicio(id_servicio)?;
            println!(
                "Servicio activo: {} ({})",
                sesion.servicio, sesion.id_servicio
            );
        }
        Comando::Boleto { empresa, numero } => {
            let repo = ServicioRepository::new(transport, store);
            let boleto = repo.leer_boleto(&empresa, numero).await?;
            println!("Boleto {} (id {})", boleto.numero, boleto.id);
            println!("Pasajero: {}", boleto.pasajero);
            println!("Documento: {}", boleto.documento);
            if let Some(butaca) = boleto.butaca {
                println!("Butaca: {}", butaca);
            }
        }
        Comando::Equipaje { id_boleto, marbete } => {
            let repo = EquipajeRepository::new(transport, store);
            repo.leer_equipaje(id_boleto, &marbete).await?;
            println!("Marbete {} validado para el boleto {}", marbete, id_boleto);
        }
        Comando::Lista { csv } => {
            let repo = EquipajeRepository::new(transport, store);
            let lista = repo.lista_de_equipajes().await?;
            if lista.is_empty() {
                println!("No hay equipajes registrados para el servicio.");
            }
            for entrada in &lista {
                println!(
                    "boleto {} | {} bulto(s) | doc {} | {} | marbetes: {}",
                    entrada.id_boleto,
                    entrada.cantidad,
                    entrada.documento,
                    entrada.pasajero,
                    entrada.marbetes.join(", ")
                );
            }
            if let Some(ruta) = csv {
                app::equipaje::exportar_csv(&lista, &ruta)?;
                println!("Listado exportado a {}", ruta.display());
            }
        }
        Comando::Logout => {
            let auth = AuthRepository::new(transport, store, &config);
            auth.logout()?;
            println!("Sesión cerrada.");
        }
    }

    Ok(())
}

fn imprimir_servicio(servicio: &ServicioLogin) {
    println!(
        "  [{}] {} {}-{} {} {}",
        servicio.id_servicio,
        servicio.empresa,
        servicio.origen,
        servicio.destino,
        servicio.fecha.as_deref().unwrap_or("-"),
        servicio.hora.as_deref().unwrap_or("-")
    );
}
