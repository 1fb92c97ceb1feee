use anyhow::Result;
use chrono::Utc;
use delta_equipaje::app::equipaje::exportar_csv;
use delta_equipaje::domain::model::{ServicioLogin, Sesion};
use delta_equipaje::domain::ports::SessionStore;
use delta_equipaje::{
    ArchivoSesion, DeltaError, EquipajeRepository, ServicioRepository, SoapClient,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn sesion_activa(id_servicio: i32) -> Sesion {
    Sesion {
        interno: "1234".to_string(),
        id_servicio,
        servicio: "EPA ASU-ENC 31/01/2026 17:30".to_string(),
        usuario: "cEl$*eM".to_string(),
        password: "eMbA*mArB#$".to_string(),
        servicios: vec![ServicioLogin {
            id_servicio,
            servicio: "EPA ASU-ENC 31/01/2026 17:30".to_string(),
            empresa: "EPA".to_string(),
            origen: "ASU".to_string(),
            destino: "ENC".to_string(),
            fecha: Some("31/01/2026".to_string()),
            hora: Some("17:30".to_string()),
        }],
        guardada_en: Utc::now(),
    }
}

fn store_con_sesion(dir: &TempDir, id_servicio: i32) -> Result<ArchivoSesion> {
    let store = ArchivoSesion::new(dir.path().join("sesion.json"));
    store.save(&sesion_activa(id_servicio))?;
    Ok(store)
}

fn transport(server: &MockServer) -> Result<SoapClient> {
    Ok(SoapClient::new(
        server.url("/wsdelta.asmx"),
        Duration::from_secs(5),
    )?)
}

#[tokio::test]
async fn leer_boleto_usa_la_sesion_y_arma_el_boleto() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/wsdelta.asmx")
            .header("SOAPAction", "\"Delta/Eq_LeerBoleto\"")
            .body_contains("<Empresa>EPA</Empresa>")
            .body_contains("<Boleto>100010720003193</Boleto>")
            .body_contains("<IdServicio>101</IdServicio>")
            .body_contains("<Usuario>cEl$*eM</Usuario>")
            .body_contains("<Password>eMbA*mA</Password>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(
                r#"<Eq_LeerBoletoResult>
                    <Error>0</Error><Descr>OK</Descr>
                    <IdBoleto>555</IdBoleto><Butaca>12</Butaca>
                    <Pasajero>BARRIOS, ARTURO</Pasajero>
                    <Documento>39503917</Documento>
                </Eq_LeerBoletoResult>"#,
            );
    });

    let dir = TempDir::new()?;
    let repo = ServicioRepository::new(transport(&server)?, store_con_sesion(&dir, 101)?);

    let boleto = repo.leer_boleto("EPA", 100010720003193).await?;
    mock.assert();

    assert_eq!(boleto.id, 555);
    assert_eq!(boleto.numero, "100010720003193");
    assert_eq!(boleto.pasajero, "BARRIOS, ARTURO");
    assert_eq!(boleto.documento, "39503917");
    assert_eq!(boleto.butaca, Some(12));
    assert_eq!(boleto.id_servicio, 101);

    Ok(())
}

#[tokio::test]
async fn leer_boleto_sin_sesion_falla_sin_llamar_al_webservice() -> Result<()> {
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let store = ArchivoSesion::new(dir.path().join("sesion.json"));
    let repo = ServicioRepository::new(transport(&server)?, store);

    assert!(matches!(
        repo.leer_boleto("EPA", 1).await,
        Err(DeltaError::SinSesion)
    ));
    Ok(())
}

#[tokio::test]
async fn marbete_valido_y_marbete_rechazado() -> Result<()> {
    let server = MockServer::start();
    let mut valido = server.mock(|when, then| {
        when.method(POST)
            .path("/wsdelta.asmx")
            .header("SOAPAction", "\"Delta/Eq_LeerEquipaje\"")
            .body_contains("<Marbete>MARBETE000KKK00</Marbete>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body("<r><Error>0</Error><Descr>OK</Descr></r>");
    });

    let dir = TempDir::new()?;
    let repo = EquipajeRepository::new(transport(&server)?, store_con_sesion(&dir, 101)?);

    // el marbete se corta a 15 caracteres antes de enviarse
    repo.leer_equipaje(555, "MARBETE000KKK002").await?;
    valido.assert();

    valido.delete();
    server.mock(|when, then| {
        when.method(POST).path("/wsdelta.asmx");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body("<r><Error>3</Error><Descr>Marbete ya utilizado</Descr></r>");
    });

    match repo.leer_equipaje(555, "0014367").await {
        Err(DeltaError::Soap { codigo, descr }) => {
            assert_eq!(codigo, 3);
            assert_eq!(descr, "Marbete ya utilizado");
        }
        otro => panic!("se esperaba el rechazo del marbete, se obtuvo {:?}", otro),
    }

    Ok(())
}

#[tokio::test]
async fn lista_saltea_entradas_ilegibles_y_exporta_csv() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/wsdelta.asmx")
            .header("SOAPAction", "\"Delta/Eq_ListaDeEquipajes\"")
            .body_contains("<IdServicio>101</IdServicio>");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(
                r#"<Eq_ListaDeEquipajesResult>
                    <Error>0</Error><Descr>OK</Descr>
                    <Eq_ListaDeEquipajes>
                      <HD_IdBoleto>31</HD_IdBoleto>
                      <Texto>15 -39503917- BARRIOS, ARTURO MOISES 0014367,0014368 0014369</Texto>
                    </Eq_ListaDeEquipajes>
                    <Eq_ListaDeEquipajes>
                      <HD_IdBoleto>32</HD_IdBoleto>
                      <Texto>sin formato conocido</Texto>
                    </Eq_ListaDeEquipajes>
                    <Eq_ListaDeEquipajes>
                      <HD_IdBoleto>33</HD_IdBoleto>
                      <Texto>1 -1234567- GONZALEZ, MARIA 0020001</Texto>
                    </Eq_ListaDeEquipajes>
                </Eq_ListaDeEquipajesResult>"#,
            );
    });

    let dir = TempDir::new()?;
    let repo = EquipajeRepository::new(transport(&server)?, store_con_sesion(&dir, 101)?);

    let lista = repo.lista_de_equipajes().await?;
    mock.assert();

    assert_eq!(lista.len(), 2);
    assert_eq!(lista[0].id_boleto, 31);
    assert_eq!(lista[0].cantidad, 15);
    assert_eq!(lista[0].pasajero, "BARRIOS, ARTURO MOISES");
    assert_eq!(lista[0].marbetes, vec!["0014367", "0014368", "0014369"]);
    assert_eq!(lista[1].id_boleto, 33);
    assert_eq!(lista[1].documento, "1234567");

    let destino = dir.path().join("listado.csv");
    exportar_csv(&lista, &destino)?;
    let contenido = std::fs::read_to_string(&destino)?;
    assert!(contenido.starts_with("id_boleto,cantidad,documento,pasajero,marbetes"));
    assert!(contenido.contains("31,15,39503917"));
    assert!(contenido.contains("0014367 0014368 0014369"));

    Ok(())
}

#[tokio::test]
async fn lista_con_servicio_cero_no_llama_al_webservice() -> Result<()> {
    // sin mocks registrados: cualquier llamada devolvería 404 y fallaría
    let server = MockServer::start();
    let dir = TempDir::new()?;
    let repo = EquipajeRepository::new(transport(&server)?, store_con_sesion(&dir, 0)?);

    let lista = repo.lista_de_equipajes().await?;
    assert!(lista.is_empty());
    Ok(())
}

#[tokio::test]
async fn lista_con_error_expone_la_descripcion() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/wsdelta.asmx");
        then.status(200)
            .header("Content-Type", "text/xml; charset=utf-8")
            .body("<r><Error>9</Error><Descr>Servicio cerrado</Descr></r>");
    });

    let dir = TempDir::new()?;
    let repo = EquipajeRepository::new(transport(&server)?, store_con_sesion(&dir, 101)?);

    match repo.lista_de_equipajes().await {
        Err(DeltaError::Soap { codigo, descr }) => {
            assert_eq!(codigo, 9);
            assert_eq!(descr, "Servicio cerrado");
        }
        otro => panic!("se esperaba el error del webservice, se obtuvo {:?}", otro),
    }
    Ok(())
}
