use actix_web::web;
use representatives::contracts::lookup::{Division, LookupError};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::app_container::Application;
use crate::errors::ApiError;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Request {
    api_key: Secret<String>,
    address: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ReportResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportResponse {
    data: Vec<Division>,
    display_text: String,
}

impl LookupResponse {
    fn success(data: ReportResponse) -> Self {
        LookupResponse {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }

    fn failure(error_message: String) -> Self {
        LookupResponse {
            success: false,
            data: None,
            error_message: Some(error_message),
        }
    }
}

#[tracing::instrument(err, skip(app), level = "info")]
async fn lookup_representatives(
    data: web::Query<Request>,
    app: web::Data<Application>,
) -> Result<web::Json<LookupResponse>, ApiError> {
    let data = data.into_inner();
    let result = app.representatives.lookup(data.api_key, data.address).await;

    let response = match result {
        Ok(report) => LookupResponse::success(ReportResponse {
            data: report.divisions,
            display_text: report.display_text,
        }),
        Err(LookupError::UpstreamError(message)) => LookupResponse::failure(message),
        Err(LookupError::InvalidRequest(message)) => LookupResponse::failure(message),
        Err(LookupError::InternalError(err)) => return Err(ApiError::InternalServerError(err)),
    };
    Ok(web::Json(response))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lookup").service(web::resource("").route(web::get().to(lookup_representatives))),
    );
}
