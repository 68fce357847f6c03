use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a marketing status.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketingStatusDoc {
    /// Assigned by the server; omit or send 0 when adding.
    pub marketing_status_id: i32,
    pub marketing_status_name: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::marketing_status::get_by_id,
        crate::routes::marketing_status::get_by_name,
        crate::routes::marketing_status::get_all,
        crate::routes::marketing_status::get_all_mapped,
        crate::routes::marketing_status::add,
        crate::routes::marketing_status::update,
        crate::routes::marketing_status::delete,
    ),
    components(schemas(HealthResponse, MarketingStatusDoc)),
    tags(
        (name = "health"),
        (name = "marketing-status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/one/marketingstatus/byid/{id}",
            "/one/marketingstatus/{name}",
            "/all/marketingstatus",
            "/all/marketingstatus/mapped",
            "/add/marketingstatus",
            "/update/marketingstatus",
            "/delete/marketingstatus/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
