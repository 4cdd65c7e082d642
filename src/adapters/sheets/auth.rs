use std::path::Path;

use error_stack::ResultExt;
use google_sheets4::oauth2::{self, authenticator::Authenticator};
use thiserror::Error;
use tracing::instrument;

use super::http_client::{HttpClient, HttpsConnector};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Could not build the HTTPS client")]
    BuildHttpClient,
    #[error("Could not read service account private key")]
    ReadServiceAccountKey,
    #[error("Could not create an authenticator")]
    BuildAuthenticator,
}

#[instrument(skip(client))]
pub async fn auth(
    priv_key_path: &Path,
    client: HttpClient,
) -> error_stack::Result<Authenticator<HttpsConnector>, AuthError> {
    let secret: oauth2::ServiceAccountKey = oauth2::read_service_account_key(priv_key_path)
        .await
        .change_context(AuthError::ReadServiceAccountKey)
        .attach_printable_lazy(|| {
            format!(
                "Provide a valid service account key at '{}' to enable Google Sheets forwarding",
                priv_key_path.display()
            )
        })?;

    oauth2::ServiceAccountAuthenticator::with_client(secret, client)
        .build()
        .await
        .change_context(AuthError::BuildAuthenticator)
}
