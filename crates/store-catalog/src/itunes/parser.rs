use crate::{SearchResult, SearchResults};
use serde_json::{Map, Value};
use tracing::{debug, warn};

type Record = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed JSON response: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("Expected `results` array in response")]
    MissingResults,
}

/// Shape of a raw catalog record, resolved once per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordShape {
    Track,
    Audiobook,
    Software,
    EBook,
}

impl RecordShape {
    fn classify(record: &Record) -> Option<Self> {
        // E-books are the only records that come without `wrapperType`.
        match record.get("wrapperType") {
            Some(wrapper_type) => match wrapper_type.as_str() {
                Some("track") => Some(RecordShape::Track),
                Some("audiobook") => Some(RecordShape::Audiobook),
                Some("software") => Some(RecordShape::Software),
                _ => None,
            },
            None => match record.get("kind").and_then(Value::as_str) {
                Some("ebook") => Some(RecordShape::EBook),
                _ => None,
            },
        }
    }

    fn name_field(&self) -> &'static str {
        match self {
            RecordShape::Audiobook => "collectionName",
            _ => "trackName",
        }
    }

    fn store_url_field(&self) -> &'static str {
        match self {
            RecordShape::Audiobook => "collectionViewUrl",
            _ => "trackViewUrl",
        }
    }

    fn price_field(&self) -> &'static str {
        match self {
            RecordShape::Track => "trackPrice",
            RecordShape::Audiobook => "collectionPrice",
            RecordShape::Software | RecordShape::EBook => "price",
        }
    }

    fn kind(&self, record: &Record) -> String {
        match self {
            RecordShape::Audiobook => "audiobook".to_string(),
            _ => get_string(record, "kind"),
        }
    }

    fn genre(&self, record: &Record) -> String {
        match self {
            RecordShape::EBook => record
                .get("genres")
                .and_then(Value::as_array)
                .map(|genres| {
                    genres
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default(),
            _ => get_string(record, "primaryGenreName"),
        }
    }

    fn parse(&self, record: &Record) -> Option<SearchResult> {
        let name = get_string(record, self.name_field());
        let store_url = get_string(record, self.store_url_field());

        if name.is_empty() || store_url.is_empty() {
            debug!(shape = ?self, "Dropping record without name or store URL");
            return None;
        }

        Some(SearchResult {
            name,
            artist_name: get_string(record, "artistName"),
            artwork_url_small: get_string(record, "artworkUrl60"),
            artwork_url_large: get_string(record, "artworkUrl100"),
            store_url,
            kind: self.kind(record),
            currency: get_string(record, "currency"),
            price: get_price(record, self.price_field()),
            genre: self.genre(record),
        })
    }
}

fn get_string(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn get_price(record: &Record, key: &str) -> f64 {
    record
        .get(key)
        .and_then(Value::as_f64)
        .filter(|price| price.is_finite() && *price >= 0.0)
        .unwrap_or(0.0)
}

fn parse_record(value: &Value) -> Option<SearchResult> {
    let record = match value.as_object() {
        Some(record) => record,
        None => {
            warn!("Expected a JSON object in `results` array");
            return None;
        }
    };

    RecordShape::classify(record)?.parse(record)
}

/// Parses a raw search response body, sorted by name.
pub fn try_parse_search_results(body: &[u8]) -> Result<SearchResults, ParseError> {
    let response: Value = serde_json::from_slice(body)?;

    let records = response
        .get("results")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingResults)?;

    let mut results: SearchResults = records.iter().filter_map(parse_record).collect();

    results.sort_by_cached_key(|result| result.name.to_lowercase());

    Ok(results)
}

/// Same as [`try_parse_search_results`] but any parse error yields no results.
pub fn parse_search_results(body: &[u8]) -> SearchResults {
    match try_parse_search_results(body) {
        Ok(results) => results,
        Err(error) => {
            warn!(?error, "Unable to parse search response");
            vec![]
        }
    }
}
