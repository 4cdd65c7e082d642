use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use super::auth::AuthError;

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;
pub type HttpClient = hyper::Client<HttpsConnector>;

/// Fails when the platform's root certificates cannot be loaded.
pub fn http_client() -> error_stack::Result<HttpClient, AuthError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(AuthError::BuildHttpClient)
        .attach_printable("Could not load the native root certificates")?
        .https_or_http()
        .enable_http1()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
