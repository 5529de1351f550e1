mod parser;
mod query;


pub use parser::{parse_search_results, try_parse_search_results, ParseError};
pub use query::{EncodingError, QueryBuilder, RequestDescriptor, DEFAULT_ENDPOINT, RESULT_LIMIT};
