mod health;
mod search;

pub(crate) use health::readiness_check;
pub(crate) use search::{get_search_state, search};
