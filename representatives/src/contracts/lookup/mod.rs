use secrecy::Secret;
use serde::{Deserialize, Serialize};
use shared_kernel::{non_empty_string, string_key};
use thiserror::Error;

mod display;
mod fetch;
mod reshape;

/// The civic information API only ever gets asked for these two levels and
/// two roles, together, on every request.
pub(crate) const LEVEL_COUNTRY: &str = "country";
pub(crate) const LEVEL_ADMINISTRATIVE_AREA_1: &str = "administrativeArea1";
pub(crate) const ROLE_LEGISLATOR_UPPER_BODY: &str = "legislatorUpperBody";
pub(crate) const ROLE_LEGISLATOR_LOWER_BODY: &str = "legislatorLowerBody";

string_key!(DivisionId);

non_empty_string!(AddressCandidate);

/// A government position tied to one electoral division. `officials` holds
/// the names resolved from the response's flat officials array.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Office {
    pub name: String,
    pub division_id: DivisionId,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub official_indices: Vec<usize>,
    #[serde(default)]
    pub officials: Vec<String>,
}

/// An electoral division and the offices kept for it, ordered for display.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Division {
    pub division_id: DivisionId,
    pub division_name: String,
    pub display_order: i64,
    pub offices: Vec<Office>,
}

#[derive(Debug)]
pub struct RepresentativesReport {
    pub divisions: Vec<Division>,
    pub display_text: String,
}

#[derive(Error, Debug)]
pub enum LookupError {
    /// The API answered with an error body; the message carries its
    /// `"{code}: {message}"` rendering.
    #[error("{0}")]
    UpstreamError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
}

pub struct RepresentativesFinder;

impl Default for RepresentativesFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl RepresentativesFinder {
    pub fn new() -> Self {
        RepresentativesFinder
    }

    #[tracing::instrument(skip(self, api_key), level = "debug")]
    pub async fn lookup(
        &self,
        api_key: Secret<String>,
        address: String,
    ) -> Result<RepresentativesReport, LookupError> {
        use crate::config::SETTINGS_CONFIG;
        search::lookup(&SETTINGS_CONFIG.civic_api.host, &api_key, address).await
    }
}

pub(crate) mod search {
    use secrecy::Secret;
    use std::fmt::Debug;

    use super::{display, fetch, reshape, AddressCandidate, LookupError, RepresentativesReport};

    #[tracing::instrument(err, skip(api_key), level = "info")]
    pub(crate) async fn lookup<T>(
        host: &str,
        api_key: &Secret<String>,
        address: T,
    ) -> Result<RepresentativesReport, LookupError>
    where
        T: TryInto<AddressCandidate, Error = String> + Debug,
    {
        let address = address.try_into().map_err(|err| {
            LookupError::InvalidRequest(format!(
                "Cannot look up representatives for an empty address. Error: {err}"
            ))
        })?;
        let (status, body) = fetch::fetch(host, api_key, &address).await?;
        let divisions = reshape::reshape(status, &body)?;
        let display_text = display::prepare_display_text(&divisions);
        Ok(RepresentativesReport {
            divisions,
            display_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use secrecy::Secret;
    use serde_json::json;

    use super::search;
    use super::LookupError;

    fn api_key() -> Secret<String> {
        Secret::new("test-key".to_string())
    }

    #[tokio::test]
    async fn test_that_lookup_resolves_divisions_and_officials_from_the_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/representatives")
                .query_param("address", "350 Fifth Avenue, New York, NY")
                .query_param("key", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "kind": "civicinfo#representativeInfoResponse",
                    "divisions": {
                        "ocd-division/country:us": {
                            "name": "United States",
                            "officeIndices": [0]
                        },
                        "ocd-division/country:us/state:ny/cd:12": {
                            "name": "New York's 12th congressional district",
                            "officeIndices": [1]
                        }
                    },
                    "offices": [
                        {
                            "name": "U.S. Senator",
                            "divisionId": "ocd-division/country:us",
                            "levels": ["country"],
                            "roles": ["legislatorUpperBody"],
                            "officialIndices": [0, 1]
                        },
                        {
                            "name": "U.S. Representative",
                            "divisionId": "ocd-division/country:us/state:ny/cd:12",
                            "levels": ["country"],
                            "roles": ["legislatorLowerBody"],
                            "officialIndices": [2]
                        }
                    ],
                    "officials": [
                        { "name": "Charles E. Schumer", "party": "Democratic Party" },
                        { "name": "Kirsten E. Gillibrand", "party": "Democratic Party" },
                        { "name": "Jerrold Nadler", "party": "Democratic Party" }
                    ]
                }));
        });

        let report = search::lookup(
            &server.base_url(),
            &api_key(),
            "350 Fifth Avenue, New York, NY".to_string(),
        )
        .await
        .expect("lookup should succeed");

        mock.assert();
        assert_eq!(report.divisions.len(), 2);
        let country = &report.divisions[0];
        assert_eq!(country.division_id, *"ocd-division/country:us");
        assert_eq!(
            country.offices[0].officials,
            vec!["Charles E. Schumer", "Kirsten E. Gillibrand"]
        );
        assert!(report
            .display_text
            .contains("<b>Congressional Representative:</b> Jerrold Nadler"));
    }

    #[tokio::test]
    async fn test_that_an_error_body_is_surfaced_as_an_upstream_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/representatives");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(json!({
                    "error": {
                        "code": 400,
                        "message": "Invalid address",
                        "errors": [
                            { "reason": "parseError", "message": "Invalid address" }
                        ]
                    }
                }));
        });

        let result = search::lookup(
            &server.base_url(),
            &api_key(),
            "not a real place".to_string(),
        )
        .await;

        mock.assert();
        match result {
            Err(LookupError::UpstreamError(message)) => {
                assert_eq!(message, "400: Invalid address");
            }
            other => panic!("Expected an upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_that_an_empty_address_is_rejected_before_any_request_is_made() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/representatives");
            then.status(200);
        });

        let result = search::lookup(&server.base_url(), &api_key(), "   ".to_string()).await;

        assert!(matches!(result, Err(LookupError::InvalidRequest(_))));
        mock.assert_hits(0);
    }
}
