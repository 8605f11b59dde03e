//! REST binding of a resource: list queries and single-record mutations.

use std::marker::PhantomData;

use async_trait::async_trait;
use contracts::domain::common::Resource;
use contracts::shared::error::AppError;
use contracts::shared::list::{decode_list_response, ListRequest, ListResult, ListSource};
use contracts::shared::mutation::{
    decode_mutation_response, mutation_body, MutationKind, MutationOutcome, RecordGateway,
};

use crate::shared::api_utils::{list_path, mutation_path};
use crate::shared::http::ApiClient;

/// `GET /api/{resource}` and `POST /api/{resource}/{action}` for one resource.
pub struct HttpResource<R> {
    client: ApiClient,
    _resource: PhantomData<R>,
}

impl<R: Resource> HttpResource<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<R: Resource> ListSource<R> for HttpResource<R> {
    async fn fetch(
        &self,
        request: &ListRequest<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError> {
        let path = list_path(R::PATH, &request.to_query_string());
        let response = self.client.get(&path).await?;
        decode_list_response::<R>(response.status, &response.body, request)
    }
}

#[async_trait(?Send)]
impl<R: Resource> RecordGateway<R> for HttpResource<R> {
    async fn send(&self, kind: MutationKind, record: &R) -> Result<MutationOutcome, AppError> {
        let body = mutation_body(kind, record)?;
        let path = mutation_path(R::PATH, kind.endpoint());
        let response = self.client.post_json(&path, &body).await?;
        decode_mutation_response(kind, response.status, &response.body)
    }
}
