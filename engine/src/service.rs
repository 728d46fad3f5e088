use common::inquiry::{Inquiry, ListPage};
use futures::future::LocalBoxFuture;

use crate::error::RemoteError;

pub type ListFuture<E> = LocalBoxFuture<'static, Result<ListPage<E>, RemoteError>>;

/// The remote paginated list query for one kind of entity.
pub trait ListService<F, E> {
    fn fetch_list(&self, inquiry: Inquiry<F>) -> ListFuture<E>;
}
