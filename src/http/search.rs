use actix_web::web::{Data, Query};
use actix_web::{HttpResponse, Responder};
use search_engine::{Category, SearchEngine, SearchOutcome, SearchResult, SearchState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const NETWORK_ERROR_MESSAGE: &str =
    "There was an error reading from the iTunes Store. Please try again.";

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    term: String,
    #[serde(default)]
    category: Category,
}

#[derive(Debug, Serialize)]
struct SearchResultView<'a> {
    name: &'a str,
    artist: &'a str,
    subtitle: String,
    kind: &'a str,
    genre: &'a str,
    price: String,
    artwork_url_small: &'a str,
    artwork_url_large: &'a str,
    store_url: &'a str,
}

impl<'a> From<&'a SearchResult> for SearchResultView<'a> {
    fn from(result: &'a SearchResult) -> Self {
        Self {
            name: &result.name,
            artist: result.artist_display(),
            subtitle: result.subtitle(),
            kind: result.kind_for_display(),
            genre: &result.genre,
            price: result.price_text(),
            artwork_url_small: &result.artwork_url_small,
            artwork_url_large: &result.artwork_url_large,
            store_url: &result.store_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum StateView<'a> {
    NotSearchedYet,
    Loading,
    NoResults,
    Results { results: Vec<SearchResultView<'a>> },
}

impl<'a> From<&'a SearchState> for StateView<'a> {
    fn from(state: &'a SearchState) -> Self {
        match state {
            SearchState::NotSearchedYet => StateView::NotSearchedYet,
            SearchState::Loading => StateView::Loading,
            SearchState::NoResults => StateView::NoResults,
            SearchState::Results(results) => StateView::Results {
                results: results.iter().map(SearchResultView::from).collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    outcome: SearchOutcome,
    state: StateView<'a>,
}

pub(crate) async fn search(
    search_engine: Data<Arc<SearchEngine>>,
    query: Query<SearchQuery>,
) -> impl Responder {
    match search_engine.search(&query.term, query.category).await {
        Ok(SearchOutcome::Failed) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": NETWORK_ERROR_MESSAGE,
        })),
        Ok(outcome) => {
            let state = search_engine.state();

            HttpResponse::Ok().json(SearchResponse {
                outcome,
                state: StateView::from(&state),
            })
        }
        Err(error) => {
            warn!(?error, term = %query.term, "Unable to build search request");

            HttpResponse::BadRequest().json(serde_json::json!({
                "error": error.to_string(),
            }))
        }
    }
}

pub(crate) async fn get_search_state(search_engine: Data<Arc<SearchEngine>>) -> impl Responder {
    let state = search_engine.state();

    HttpResponse::Ok().json(StateView::from(&state))
}

#[cfg(test)]
mod tests {
    use super::{get_search_state, search, NETWORK_ERROR_MESSAGE};
    use actix_web::web::{self, Data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use reqwest::Url;
    use search_engine::{
        HttpResponse, HttpTransport, SearchEngine, SearchState, TransportError,
    };
    use std::sync::Arc;
    use store_catalog::QueryBuilder;

    struct TransportMock(u16, &'static str);

    #[async_trait]
    impl HttpTransport for TransportMock {
        async fn get(&self, _url: &Url) -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse {
                status: self.0,
                body: self.1.as_bytes().to_vec(),
            })
        }
    }

    const TRACK_RESPONSE: &str = r#"{"resultCount": 1, "results": [{
        "wrapperType": "track", "kind": "song", "trackName": "Children", "artistName": "",
        "trackViewUrl": "https://example.com/children", "trackPrice": 0, "currency": "USD"
    }]}"#;

    fn engine(status: u16, body: &'static str) -> Data<Arc<SearchEngine>> {
        engine_with_endpoint(QueryBuilder::default(), status, body)
    }

    fn engine_with_endpoint(
        query_builder: QueryBuilder,
        status: u16,
        body: &'static str,
    ) -> Data<Arc<SearchEngine>> {
        Data::new(Arc::new(SearchEngine::new(
            query_builder,
            Arc::new(TransportMock(status, body)),
        )))
    }

    #[actix_rt::test]
    async fn test_search_renders_results() {
        let app = test::init_service(
            App::new()
                .app_data(engine(200, TRACK_RESPONSE))
                .route("/search", web::get().to(search)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/search?term=children&category=music")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(
            serde_json::json!({
                "outcome": "completed",
                "state": {
                    "status": "results",
                    "results": [{
                        "name": "Children",
                        "artist": "Unknown",
                        "subtitle": "Unknown",
                        "kind": "Song",
                        "genre": "",
                        "price": "Free",
                        "artwork_url_small": "",
                        "artwork_url_large": "",
                        "store_url": "https://example.com/children",
                    }],
                },
            }),
            body
        );
    }

    #[actix_rt::test]
    async fn test_search_without_results() {
        let app = test::init_service(
            App::new()
                .app_data(engine(200, r#"{"resultCount": 0, "results": []}"#))
                .route("/search", web::get().to(search)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/search?term=nothing")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!("no_results", body["state"]["status"]);
    }

    #[actix_rt::test]
    async fn test_failed_search_is_reported_as_network_error() {
        let search_engine = engine(500, "");
        let app = test::init_service(
            App::new()
                .app_data(search_engine.clone())
                .route("/search", web::get().to(search))
                .route("/state", web::get().to(get_search_state)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/search?term=children")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(502, response.status().as_u16());

        let body: serde_json::Value = test::read_body_json(response).await;

        assert_eq!(serde_json::json!({ "error": NETWORK_ERROR_MESSAGE }), body);

        let request = test::TestRequest::get().uri("/state").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(serde_json::json!({ "status": "not_searched_yet" }), body);
    }

    #[actix_rt::test]
    async fn test_blank_search_is_skipped() {
        let app = test::init_service(
            App::new()
                .app_data(engine(200, TRACK_RESPONSE))
                .route("/search", web::get().to(search)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/search?term=%20%20")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!("skipped", body["outcome"]);
        assert_eq!("not_searched_yet", body["state"]["status"]);
    }

    #[actix_rt::test]
    async fn test_unbuildable_search_url_is_a_bad_request() {
        let search_engine =
            engine_with_endpoint(QueryBuilder::new("not a url"), 200, TRACK_RESPONSE);
        let app = test::init_service(
            App::new()
                .app_data(search_engine.clone())
                .route("/search", web::get().to(search)),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/search?term=children")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(400, response.status().as_u16());

        let body: serde_json::Value = test::read_body_json(response).await;

        assert_eq!(
            "Unable to build search URL: relative URL without a base",
            body["error"]
        );
        assert_eq!(SearchState::NotSearchedYet, search_engine.state());
    }
}
