use crate::Category;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";
pub const RESULT_LIMIT: u32 = 200;

// RFC 3986 unreserved characters stay as they are.
const TERM_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("Search endpoint must not contain a query or fragment: {0}")]
    EndpointHasQuery(String),
    #[error("Unable to build search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub endpoint: String,
    pub term: String,
    pub limit: u32,
    pub entity: &'static str,
    url: Url,
}

impl RequestDescriptor {
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Debug, Clone)]
pub struct QueryBuilder {
    endpoint: String,
}

impl QueryBuilder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(
        &self,
        text: &str,
        category: Category,
    ) -> Result<RequestDescriptor, EncodingError> {
        if self.endpoint.contains(|c: char| c == '?' || c == '#') {
            return Err(EncodingError::EndpointHasQuery(self.endpoint.clone()));
        }

        let term = utf8_percent_encode(text, TERM_ESCAPE_SET).to_string();
        let entity = category.entity_name();

        let url = Url::parse(&format!(
            "{}?term={}&limit={}&entity={}",
            self.endpoint, term, RESULT_LIMIT, entity
        ))?;

        Ok(RequestDescriptor {
            endpoint: self.endpoint.clone(),
            term,
            limit: RESULT_LIMIT,
            entity,
            url,
        })
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
