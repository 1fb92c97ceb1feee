use crate::core::envelope;
use crate::core::{Result, SoapTransport};
use crate::utils::error::DeltaError;
use async_trait::async_trait;
use std::time::Duration;

pub const TIMEOUT_DEFECTO: Duration = Duration::from_secs(30);

/// Cliente SOAP sobre `reqwest` para el webservice de Delta.
pub struct SoapClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SoapClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl SoapTransport for SoapClient {
    async fn call(&self, operacion: &str, cuerpo: String) -> Result<String> {
        tracing::debug!(operacion, "enviando solicitud SOAP");

        let respuesta = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "text/xml; charset=utf-8")
            .header("SOAPAction", format!("\"{}\"", envelope::soap_action(operacion)))
            .body(cuerpo)
            .send()
            .await?;

        let estado = respuesta.status();
        tracing::debug!(operacion, estado = estado.as_u16(), "respuesta recibida");

        if !estado.is_success() {
            return Err(DeltaError::HttpStatus(estado.as_u16()));
        }

        Ok(respuesta.text().await?)
    }
}
