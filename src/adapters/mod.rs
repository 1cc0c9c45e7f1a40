mod reqwest_http_client;

pub use reqwest_http_client::ReqwestHttpClient;
