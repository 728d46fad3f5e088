pub mod facet_options;
pub mod listing;
pub mod session_store;
pub mod toast_sink;
pub mod url_param;
