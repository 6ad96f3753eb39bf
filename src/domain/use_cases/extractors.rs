use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::{
    errors::AppError,
    repositories::sqlx_repo::SqlxStore,
    session::{NewSession, SessionId},
    AppState,
};

/// Extractor for the visitor's session, attached by `SessionMiddleware`.
/// Usage: Add `session: Session` as a parameter to your handler function.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    id: SessionId,
    is_new: bool,
}

impl Session {
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// True when the request carried no valid session cookie.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let extensions = req.extensions();

        match extensions.get::<SessionId>() {
            Some(id) => ready(Ok(Session {
                id: *id,
                is_new: extensions.contains::<NewSession>(),
            })),
            None => ready(Err(
                AppError::Session("session middleware is not installed".into()).into(),
            )),
        }
    }
}

/// Checks a connection out of the pool for the duration of the handler.
/// Usage: Add `mut store: SqlxStore` as a parameter to your handler function.
impl FromRequest for SqlxStore {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let state = state.ok_or_else(|| {
                tracing::error!("AppState missing in store extractor");
                AppError::InternalError("application state is not configured".into())
            })?;

            let store = SqlxStore::acquire(&state.pool).await?;
            Ok(store)
        })
    }
}
