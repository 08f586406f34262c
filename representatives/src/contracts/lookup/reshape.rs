use std::collections::HashMap;

use anyhow::{anyhow, Context};
use serde::Deserialize;
use serde_json::Value;
use shared_kernel::http_client::StatusCode;

use super::{Division, DivisionId, LookupError, Office};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RawDivision {
    name: String,
    #[serde(default)]
    office_indices: Vec<i64>,
}

#[derive(Deserialize, Debug)]
struct RawOfficial {
    name: String,
}

#[derive(Deserialize, Debug)]
struct RawLookupResponse {
    divisions: HashMap<DivisionId, RawDivision>,
    officials: Vec<RawOfficial>,
    offices: Vec<Office>,
}

#[derive(Deserialize, Debug, Default)]
struct RawErrorResponse {
    #[serde(default)]
    error: RawErrorBody,
}

#[derive(Deserialize, Debug, Default)]
struct RawErrorBody {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Cross-links the response's parallel offices/officials/divisions
/// collections into divisions sorted for display. Indices that do not
/// resolve are fatal for the whole request; there are no partial results.
pub(crate) fn reshape(status: StatusCode, body: &str) -> Result<Vec<Division>, LookupError> {
    let value: Value = serde_json::from_str(body)
        .context("Response body is not valid JSON")
        .map_err(LookupError::InternalError)?;
    if !value.is_object() {
        return Err(LookupError::InternalError(anyhow!(
            "Response body is not a JSON object"
        )));
    }

    if status != StatusCode::OK || value.get("divisions").is_none() {
        let response: RawErrorResponse = serde_json::from_value(value)
            .context("Failed to deserialize error response")
            .map_err(LookupError::InternalError)?;
        return Err(LookupError::UpstreamError(format!(
            "{}: {}",
            response.error.code, response.error.message
        )));
    }

    let raw: RawLookupResponse = serde_json::from_value(value)
        .context("Response is missing expected divisions/officials/offices collections")
        .map_err(LookupError::InternalError)?;

    // Index-addressable lookup table for resolving officialIndices.
    let officials = raw
        .officials
        .into_iter()
        .map(|official| official.name)
        .collect::<Vec<_>>();

    let mut divisions: Vec<Division> = Vec::new();
    let mut positions_by_id: HashMap<DivisionId, usize> = HashMap::new();

    for mut office in raw.offices {
        // An office nobody holds represents a vacant or inapplicable seat.
        if office.official_indices.is_empty() {
            continue;
        }

        office.officials = office
            .official_indices
            .iter()
            .map(|&index| {
                officials.get(index).cloned().ok_or_else(|| {
                    anyhow!(
                        "Office {:?} references official index {index} but the response only has {} officials",
                        office.name,
                        officials.len()
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match positions_by_id.get(&office.division_id) {
            Some(&position) => divisions[position].offices.push(office),
            None => {
                let raw_division = raw.divisions.get(&office.division_id).ok_or_else(|| {
                    anyhow!(
                        "Office {:?} references unknown division {}",
                        office.name,
                        office.division_id
                    )
                })?;
                let display_order = raw_division.office_indices.first().copied().unwrap_or(0);
                let division_id = office.division_id.clone();
                positions_by_id.insert(division_id.clone(), divisions.len());
                divisions.push(Division {
                    division_id,
                    division_name: raw_division.name.clone(),
                    display_order,
                    offices: vec![office],
                });
            }
        }
    }

    // sort_by_key is stable, so divisions with equal display order keep
    // their encounter order.
    divisions.sort_by_key(|division| division.display_order);

    Ok(divisions)
}
