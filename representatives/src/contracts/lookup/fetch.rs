use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use shared_kernel::http_client::{HttpClient, StatusCode};
use url::Url;

use super::{
    AddressCandidate, LEVEL_ADMINISTRATIVE_AREA_1, LEVEL_COUNTRY, ROLE_LEGISLATOR_LOWER_BODY,
    ROLE_LEGISLATOR_UPPER_BODY,
};

pub(crate) fn generate_lookup_url(
    host: &str,
    api_key: &Secret<String>,
    address: &AddressCandidate,
) -> anyhow::Result<Url> {
    let path_details = "/representatives";
    let host_with_path = &format!("{}{}", host, path_details);
    Url::parse_with_params(
        host_with_path,
        &[
            ("address", address.as_ref()),
            ("key", api_key.expose_secret().as_str()),
            ("levels", LEVEL_COUNTRY),
            ("levels", LEVEL_ADMINISTRATIVE_AREA_1),
            ("roles", ROLE_LEGISLATOR_UPPER_BODY),
            ("roles", ROLE_LEGISLATOR_LOWER_BODY),
        ],
    )
    .context("Failed to parse url")
}

/// One GET, no retries. Status and body are handed back uninterpreted;
/// deciding what they mean is the reshaper's job.
#[tracing::instrument(err, skip(api_key), level = "info")]
pub(crate) async fn fetch(
    host: &str,
    api_key: &Secret<String>,
    address: &AddressCandidate,
) -> anyhow::Result<(StatusCode, String)> {
    let url = generate_lookup_url(host, api_key, address)?;
    HttpClient::get_text_with_status(url).await
}
