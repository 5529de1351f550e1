mod catalog_transport;
pub(crate) use catalog_transport::*;
