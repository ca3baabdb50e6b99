//! Client decorators that attach credentials to outbound requests.

mod url_param;

pub use url_param::UrlParam;
