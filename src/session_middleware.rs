use actix_web::{
  body::MessageBody,
  dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
  http::header::{HeaderValue, CACHE_CONTROL},
  Error,
  HttpMessage,
};
use core::future::Ready;
use futures_util::future::LocalBoxFuture;
use std::{future::ready, rc::Rc};
use zhurnal_api_common::context::ZhurnalContext;
use zhurnal_db_schema::newtypes::UserId;
use zhurnal_db_views::structs::UserView;
use zhurnal_utils::{
  claims::Claims,
  error::{ZhurnalError, ZhurnalErrorExt, ZhurnalErrorType},
};

static AUTH_COOKIE_NAME: &str = "auth";

/// Resolves the session token into a [`UserView`] and parks it in the
/// request extensions, where the extractor picks it up. A missing or invalid
/// token is not an error here; public routes work without one and protected
/// routes answer with their login redirect.
#[derive(Clone)]
pub struct SessionMiddleware {
  context: ZhurnalContext,
}

impl SessionMiddleware {
  pub fn new(context: ZhurnalContext) -> Self {
    SessionMiddleware { context }
  }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: MessageBody + 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Transform = SessionService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(SessionService {
      service: Rc::new(service),
      context: self.context.clone(),
    }))
  }
}

pub struct SessionService<S> {
  service: Rc<S>,
  context: ZhurnalContext,
}

impl<S, B> Service<ServiceRequest> for SessionService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<B>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let svc = self.service.clone();
    let context = self.context.clone();

    Box::pin(async move {
      let jwt = jwt_from_request(&req);

      if let Some(jwt) = &jwt {
        // Ignore any invalid auth so the site can still be browsed
        if let Ok(user_view) = user_view_from_jwt(jwt, &context).await {
          req.extensions_mut().insert(user_view);
        }
      }

      let mut res = svc.call(req).await?;

      // Responses for logged-in users are private; anonymous ones may be
      // cached for as long as the home feed stays stale anyway.
      let cache_value = if jwt.is_some() {
        "private"
      } else {
        "public, max-age=20"
      };
      res
        .headers_mut()
        .insert(CACHE_CONTROL, HeaderValue::from_static(cache_value));
      Ok(res)
    })
  }
}

/// Reads the token from the `auth` header, falling back to the `auth`
/// cookie for browser clients.
fn jwt_from_request(req: &ServiceRequest) -> Option<String> {
  req
    .headers()
    .get(AUTH_COOKIE_NAME)
    .and_then(|h| h.to_str().ok())
    .map(ToString::to_string)
    .or_else(|| req.cookie(AUTH_COOKIE_NAME).map(|c| c.value().to_string()))
}

async fn user_view_from_jwt(jwt: &str, context: &ZhurnalContext) -> Result<UserView, ZhurnalError> {
  let claims = Claims::decode(jwt, &context.secret().jwt_secret)
    .with_zhurnal_type(ZhurnalErrorType::IncorrectLogin)?
    .claims;
  let user_view = UserView::read(&mut context.pool(), UserId(claims.sub)).await?;
  Ok(user_view)
}
