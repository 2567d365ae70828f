//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Handlers only ever ask the session for the current [`Principal`]; login
//! and logout go through [`SessionContext::log_in`] and
//! [`SessionContext::log_out`]. A stored id only counts while an account
//! with that id exists.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, warn};

use crate::domain::ports::AccountService;
use crate::domain::{Error, Principal, UserId};

pub(crate) const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Start an authenticated session for `user_id`.
    ///
    /// The session is renewed first so a pre-login cookie cannot be reused.
    pub fn log_in(&self, user_id: &UserId) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Forget everything stored in the session.
    pub fn log_out(&self) {
        self.0.purge();
    }

    /// Fetch the current user id from the session, if present.
    ///
    /// A cookie holding something other than a user id is treated as an
    /// anonymous session.
    pub fn user_id(&self) -> Result<Option<UserId>, Error> {
        let id = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(id.and_then(|raw| match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid user id in session cookie");
                None
            }
        }))
    }

    /// Caller identity for the access policy.
    ///
    /// An id with no matching account, such as one issued before the user
    /// store was reset, is dropped from the session and treated as anonymous.
    pub async fn principal(&self, accounts: &dyn AccountService) -> Result<Principal, Error> {
        let Some(user_id) = self.user_id()? else {
            return Ok(Principal::Anonymous);
        };
        match accounts.find_user(&user_id).await? {
            Some(user) => Ok(Principal::User(user.id().clone())),
            None => {
                debug!(%user_id, "session refers to an unknown user");
                self.0.remove(USER_ID_KEY);
                Ok(Principal::Anonymous)
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockAccountService;
    use crate::domain::{User, Username};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use actix_web::{App, HttpResponse, test, web};

    const USER: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    /// Accounts that know only [`USER`].
    fn accounts() -> web::Data<MockAccountService> {
        let mut accounts = MockAccountService::new();
        accounts.expect_find_user().returning(|id| {
            Ok((id.to_string() == USER).then(|| {
                User::new(id.clone(), Username::new("reader").expect("fixture name"))
            }))
        });
        web::Data::new(accounts)
    }

    async fn describe(
        session: SessionContext,
        accounts: web::Data<MockAccountService>,
    ) -> Result<HttpResponse, Error> {
        let body = match session.principal(accounts.get_ref()).await? {
            Principal::Anonymous => "anonymous".to_owned(),
            Principal::User(id) => id.to_string(),
        };
        Ok(HttpResponse::Ok().body(body))
    }

    #[actix_web::test]
    async fn log_in_then_principal_round_trips() {
        let app = test::init_service(
            App::new()
                .app_data(accounts())
                .wrap(test_session_middleware())
                .route(
                    "/login",
                    web::post().to(|session: SessionContext| async move {
                        session.log_in(&UserId::new(USER).expect("fixture id"))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route("/whoami", web::get().to(describe)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::post().uri("/login").to_request()).await;
        let cookie = session_cookie(&res);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, USER);
    }

    #[actix_web::test]
    async fn no_cookie_is_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(accounts())
                .wrap(test_session_middleware())
                .route("/whoami", web::get().to(describe)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(test::read_body(res).await, "anonymous");
    }

    #[actix_web::test]
    async fn tampered_user_id_is_anonymous() {
        let app = test::init_service(
            App::new()
                .app_data(accounts())
                .wrap(test_session_middleware())
                .route(
                    "/set-invalid",
                    web::get().to(|session: Session| async move {
                        session
                            .insert(USER_ID_KEY, "not-a-uuid")
                            .expect("set invalid user id");
                        HttpResponse::Ok()
                    }),
                )
                .route("/whoami", web::get().to(describe)),
        )
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/set-invalid").to_request(),
        )
        .await;
        let cookie = session_cookie(&res);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "anonymous");
    }

    #[actix_web::test]
    async fn unknown_user_id_is_anonymous() {
        const STRANGER: &str = "9b2d7e44-0c1a-4f5e-8d3b-6a7c8e9f0a1b";
        let app = test::init_service(
            App::new()
                .app_data(accounts())
                .wrap(test_session_middleware())
                .route(
                    "/login",
                    web::post().to(|session: SessionContext| async move {
                        session.log_in(&UserId::new(STRANGER).expect("fixture id"))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .route("/whoami", web::get().to(describe)),
        )
        .await;

        let res =
            test::call_service(&app, test::TestRequest::post().uri("/login").to_request()).await;
        let cookie = session_cookie(&res);

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/whoami")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(test::read_body(res).await, "anonymous");
    }
}
