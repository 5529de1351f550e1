use async_trait::async_trait;
use reqwest::{Client, Url};
use search_engine::{HttpResponse, HttpTransport, TransportError};
use std::time::Duration;

pub(crate) struct CatalogTransport {
    client: Client,
}

impl CatalogTransport {
    pub(crate) fn create(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(request_timeout).build()?;

        Ok(Self { client })
    }
}

fn to_transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Other(Box::new(error))
    }
}

#[async_trait]
impl HttpTransport for CatalogTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(to_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(to_transport_error)?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
