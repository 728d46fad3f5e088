//! Paginated list queries.

use std::marker::PhantomData;

use common::{facets::FacetSet, inquiry::Inquiry};
use engine::{ListFuture, ListService, SessionView};
use serde::de::DeserializeOwned;

use crate::{api::http, config::ApiConfig};

/// `POST {base}/{resource}/list` with the inquiry as the body.
pub struct RestListService<E> {
    config: ApiConfig,
    resource: &'static str,
    session: SessionView,
    _entity: PhantomData<fn() -> E>,
}

impl<E> RestListService<E> {
    pub fn new(config: ApiConfig, resource: &'static str, session: SessionView) -> Self {
        Self { config, resource, session, _entity: PhantomData }
    }
}

impl<F: FacetSet, E: DeserializeOwned + 'static> ListService<F, E> for RestListService<E> {
    fn fetch_list(&self, inquiry: Inquiry<F>) -> ListFuture<E> {
        let url = self.config.list_url(self.resource);
        let token = self.session.access_token();
        Box::pin(async move {
            let response = http::post(&url, token.as_deref(), &inquiry).await?;
            http::read_json(response).await
        })
    }
}
