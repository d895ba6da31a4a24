//! Generic entity service: the single point of contact with one REST
//! resource. Isolates envelope-shape variance and error normalization
//! from every consumer.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use contracts::shared::page::{Page, PageRequest};

use crate::config::ClientConfig;
use crate::envelope::{looks_like_envelope_miss, ListEnvelope};
use crate::error::ApiError;
use crate::http::ApiClient;

/// Static description of one REST resource.
///
/// Per-entity modules implement this for the contracts record type;
/// everything else about the five operations is generic.
pub trait RestResource: DeserializeOwned + Serialize + Clone {
    /// Write payload for create/update.
    type Dto: Serialize;

    /// Resource path under the base URL, e.g. `/api/equipment`.
    fn endpoint() -> &'static str;

    /// Envelope mapping for list responses.
    fn envelope() -> ListEnvelope;

    /// Canonical record id.
    fn record_id(&self) -> &str;

    /// Singular display name, e.g. "Equipment".
    fn element_name() -> &'static str;

    /// Plural display name for list screens.
    fn list_name() -> &'static str;

    /// Server-enforced `limit` ceiling, where one exists.
    fn page_size_ceiling() -> Option<u32> {
        None
    }
}

/// CRUD wrapper over one REST resource.
pub struct EntityService<T: RestResource> {
    client: ApiClient,
    _marker: PhantomData<T>,
}

impl<T: RestResource> EntityService<T> {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(config)?,
            _marker: PhantomData,
        })
    }

    /// Fetch one page: `GET {endpoint}?page={n}&limit={m}`.
    ///
    /// A response whose envelope matches no candidate yields an empty
    /// page in lenient mode; under `strict_envelopes` a non-empty
    /// unrecognized payload is an error instead.
    pub async fn list(&self, request: PageRequest) -> Result<Page<T>, ApiError> {
        self.list_sorted(request, None).await
    }

    /// `list` with the optional `sortBy` query parameter.
    pub async fn list_sorted(
        &self,
        request: PageRequest,
        sort_by: Option<&str>,
    ) -> Result<Page<T>, ApiError> {
        let request = match T::page_size_ceiling() {
            Some(ceiling) => request.with_ceiling(ceiling),
            None => request,
        };
        let mut query = vec![
            ("page", request.page.to_string()),
            ("limit", request.per_page.to_string()),
        ];
        if let Some(field) = sort_by {
            query.push(("sortBy", field.to_string()));
        }
        let payload = self.client.get_json(T::endpoint(), &query).await?;

        let envelope = T::envelope();
        let raw_items = match envelope.extract_items(&payload) {
            Some(items) => items,
            None => {
                if self.client.config().strict_envelopes && looks_like_envelope_miss(&payload) {
                    return Err(ApiError::UnexpectedEnvelope {
                        resource: T::element_name(),
                    });
                }
                Vec::new()
            }
        };

        let mut items = Vec::with_capacity(raw_items.len());
        for raw in raw_items {
            let record: T =
                serde_json::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))?;
            items.push(record);
        }
        let total = envelope.extract_total(&payload).unwrap_or(items.len() as u64);
        Ok(Page::new(items, total))
    }

    /// Fetch one record; 404 surfaces as `ApiError::NotFound`.
    pub async fn get(&self, id: &str) -> Result<T, ApiError> {
        let payload = self
            .client
            .get_json(&format!("{}/{}", T::endpoint(), id), &[])
            .await?;
        decode_record(payload)
    }

    /// Persist a new record; returns the server's canonical
    /// representation, including generated id and timestamps.
    pub async fn create(&self, dto: &T::Dto) -> Result<T, ApiError> {
        let payload = self.client.post_json(T::endpoint(), dto).await?;
        decode_record(payload)
    }

    /// Partial update: fields absent from the DTO stay untouched
    /// server-side.
    pub async fn update(&self, id: &str, dto: &T::Dto) -> Result<T, ApiError> {
        let payload = self
            .client
            .put_json(&format!("{}/{}", T::endpoint(), id), dto)
            .await?;
        decode_record(payload)
    }

    /// Remove a record. Deleting an already-deleted id surfaces the
    /// server's error rather than silently succeeding.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{}/{}", T::endpoint(), id))
            .await
    }
}

/// Single records arrive either bare or wrapped in `{"data": ...}`.
fn decode_record<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    let record = match payload.get("data") {
        Some(inner) if !inner.is_null() => inner.clone(),
        _ => payload,
    };
    serde_json::from_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestApi;
    use contracts::domain::cheque::{Cheque, ChequeDto};
    use contracts::domain::equipment::{Equipment, EquipmentDto};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn test_list_normalizes_nested_envelope() {
        let api = TestApi::start().await;
        api.mock_get_json(
            "/api/equipment",
            json!({"data": {"equipments": [{"id": "eq-1", "equipmentName": "Drill"}],
                   "pagination": {"totalCount": 1}}}),
        )
        .await;

        let service = api.service::<Equipment>();
        let page = service.list(PageRequest::new(1, 25)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].equipment_name, "Drill");
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_list_probes_alternate_envelope_key() {
        let api = TestApi::start().await;
        api.mock_get_json(
            "/api/equipment",
            json!({"data": {"equipment": [
                {"id": "eq-1", "equipmentName": "Drill"},
                {"id": "eq-2", "equipmentName": "Saw"}
            ]}}),
        )
        .await;

        let page = api
            .service::<Equipment>()
            .list(PageRequest::first(50))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 2);
        // total falls back to items.len() when the pagination block is absent
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_list_empty_envelope_yields_empty_page() {
        let api = TestApi::start().await;
        api.mock_get_json("/api/equipment", json!({})).await;

        let page = api
            .service::<Equipment>()
            .list(PageRequest::first(50))
            .await
            .unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unrecognized_envelope() {
        let api = TestApi::start().await;
        api.mock_get_json("/api/equipment", json!({"weird": {"shape": true}}))
            .await;

        let result = api
            .strict_service::<Equipment>()
            .list(PageRequest::first(50))
            .await;
        assert!(matches!(
            result,
            Err(ApiError::UnexpectedEnvelope { resource: "Equipment" })
        ));
    }

    #[tokio::test]
    async fn test_list_clamps_page_size_to_server_ceiling() {
        let api = TestApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "200"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&api.server)
            .await;

        // equipment's ceiling is 200; the 500 request must be clamped
        let page = api
            .service::<Equipment>()
            .list(PageRequest::new(1, 500))
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_get_unwraps_data_wrapper() {
        let api = TestApi::start().await;
        api.mock_get_json(
            "/api/equipment/eq-1",
            json!({"data": {"id": "eq-1", "equipmentName": "Drill"}}),
        )
        .await;

        let record = api.service::<Equipment>().get("eq-1").await.unwrap();
        assert_eq!(record.id, "eq-1");
    }

    #[tokio::test]
    async fn test_get_maps_not_found() {
        let api = TestApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment/missing"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"message": "Equipment not found"})),
            )
            .mount(&api.server)
            .await;

        let result = api.service::<Equipment>().get("missing").await;
        match result {
            Err(ApiError::NotFound(message)) => assert_eq!(message, "Equipment not found"),
            other => panic!("expected NotFound, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test]
    async fn test_create_returns_canonical_record() {
        let api = TestApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(201).set_body_json(
                json!({"data": {"id": "eq-9", "equipmentName": "Drill", "status": "active"}}),
            ))
            .mount(&api.server)
            .await;

        let dto = EquipmentDto {
            equipment_name: Some("Drill".to_string()),
            ..Default::default()
        };
        let record = api.service::<Equipment>().create(&dto).await.unwrap();
        assert_eq!(record.id, "eq-9");
        assert_eq!(record.status.as_deref(), Some("active"));
    }

    #[tokio::test]
    async fn test_create_then_list_includes_record() {
        let api = TestApi::start().await;
        Mock::given(method("POST"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(201).set_body_json(
                json!({"data": {"id": "eq-9", "equipmentName": "Grinder"}}),
            ))
            .mount(&api.server)
            .await;
        api.mock_get_json(
            "/api/equipment",
            json!({"data": {"equipments": [
                {"id": "eq-1", "equipmentName": "Drill"},
                {"id": "eq-9", "equipmentName": "Grinder"}
            ], "pagination": {"totalCount": 2}}}),
        )
        .await;

        let service = api.service::<Equipment>();
        let dto = EquipmentDto {
            equipment_name: Some("Grinder".to_string()),
            ..Default::default()
        };
        let created = service.create(&dto).await.unwrap();
        let page = service.list(PageRequest::first(50)).await.unwrap();
        assert!(page.items.iter().any(|e| e.id == created.id));
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let api = TestApi::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/cheques/c-1"))
            .and(body_json(json!({"status": "cleared"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": "c-1", "chequeNumber": "000412", "status": "cleared"}),
            ))
            .mount(&api.server)
            .await;

        let dto = ChequeDto {
            status: Some("cleared".to_string()),
            ..Default::default()
        };
        let record = api.service::<Cheque>().update("c-1", &dto).await.unwrap();
        assert_eq!(record.status.as_deref(), Some("cleared"));
    }

    #[tokio::test]
    async fn test_update_then_get_reads_back_field() {
        let api = TestApi::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/cheques/c-1"))
            .and(body_json(json!({"status": "cleared"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": "c-1", "chequeNumber": "000412", "status": "cleared"}),
            ))
            .mount(&api.server)
            .await;
        api.mock_get_json(
            "/api/cheques/c-1",
            json!({"data": {"id": "c-1", "chequeNumber": "000412", "status": "cleared"}}),
        )
        .await;

        let service = api.service::<Cheque>();
        let dto = ChequeDto {
            status: Some("cleared".to_string()),
            ..Default::default()
        };
        service.update("c-1", &dto).await.unwrap();
        let record = service.get("c-1").await.unwrap();
        assert_eq!(record.status.as_deref(), Some("cleared"));
    }

    #[tokio::test]
    async fn test_delete_then_list_excludes_record() {
        let api = TestApi::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/equipment/eq-1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&api.server)
            .await;
        api.mock_get_json(
            "/api/equipment",
            json!({"data": {"equipments": [{"id": "eq-2", "equipmentName": "Saw"}],
                   "pagination": {"totalCount": 1}}}),
        )
        .await;

        let service = api.service::<Equipment>();
        service.delete("eq-1").await.unwrap();
        let page = service.list(PageRequest::first(50)).await.unwrap();
        assert!(page.items.iter().all(|e| e.id != "eq-1"));
    }

    #[tokio::test]
    async fn test_delete_of_gone_record_surfaces_error() {
        let api = TestApi::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/equipment/eq-1"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "already deleted"})),
            )
            .mount(&api.server)
            .await;

        let result = api.service::<Equipment>().delete("eq-1").await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_unauthorized_is_a_typed_error() {
        let api = TestApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&api.server)
            .await;

        let result = api.service::<Equipment>().list(PageRequest::first(50)).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_server_error_message_comes_from_body() {
        let api = TestApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})),
            )
            .mount(&api.server)
            .await;

        let result = api.service::<Equipment>().list(PageRequest::first(50)).await;
        match result {
            Err(ApiError::Server { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "db down");
            }
            other => panic!("expected Server error, got {:?}", other.map(|p| p.total)),
        }
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let api = TestApi::start().await;
        Mock::given(method("GET"))
            .and(path("/api/equipment"))
            .and(wiremock::matchers::header(
                "Authorization",
                "Bearer secret-token",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&api.server)
            .await;

        let service = api.authed_service::<Equipment>("secret-token");
        let page = service.list(PageRequest::first(50)).await.unwrap();
        assert!(page.is_empty());
    }
}
