use actix_web::{
    cookie::{Cookie, SameSite},
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::{
    constants::SESSION_COOKIE,
    session::{NewSession, SessionId},
};

/// Ensures every request carries a `SessionId` in its extensions, issuing a
/// fresh session cookie when the client did not send a valid one.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SessionMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let (session_id, is_new) = match read_session_cookie(&req) {
                Some(id) => (id, false),
                None => (SessionId::generate(), true),
            };

            req.extensions_mut().insert(session_id);
            if is_new {
                req.extensions_mut().insert(NewSession);
            }

            let mut res = service.call(req).await?;

            if is_new {
                tracing::debug!(%session_id, "Issuing new session cookie");
                if let Err(e) = res.response_mut().add_cookie(&session_cookie(session_id)) {
                    tracing::warn!("Failed to set session cookie: {}", e);
                }
            }

            Ok(res)
        })
    }
}

fn read_session_cookie(req: &ServiceRequest) -> Option<SessionId> {
    req.cookie(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

fn session_cookie(id: SessionId) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}
