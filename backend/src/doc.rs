//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] lists every page route, the health probes and the error
//! payload. Swagger UI serves it in debug builds; `openapi-dump` prints it.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{CommentForm, CredentialsForm, Error, ErrorCode, NoteForm};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /auth/login/ or POST /auth/signup/.",
            ))),
        );
    }
}

/// OpenAPI document for the HTTP interface.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Quill API",
        description = "News with reader comments and private notes. Pages are JSON documents; \
                       refusals are redirects to login or plain 404s."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::news::home,
        crate::inbound::http::news::detail,
        crate::inbound::http::news::add_comment,
        crate::inbound::http::news::edit_comment_page,
        crate::inbound::http::news::edit_comment,
        crate::inbound::http::news::delete_comment_page,
        crate::inbound::http::news::delete_comment,
        crate::inbound::http::notes::landing,
        crate::inbound::http::notes::list,
        crate::inbound::http::notes::add_page,
        crate::inbound::http::notes::add,
        crate::inbound::http::notes::detail,
        crate::inbound::http::notes::edit_page,
        crate::inbound::http::notes::edit,
        crate::inbound::http::notes::delete_page,
        crate::inbound::http::notes::delete,
        crate::inbound::http::notes::done,
        crate::inbound::http::accounts::signup_page,
        crate::inbound::http::accounts::signup,
        crate::inbound::http::accounts::login_page,
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(Error, ErrorCode, CommentForm, NoteForm, CredentialsForm)),
    tags(
        (name = "news", description = "Public news pages"),
        (name = "comments", description = "Reader comments; owners edit and delete their own"),
        (name = "notes", description = "Private notes visible to their author only"),
        (name = "auth", description = "Signup, login and logout"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
