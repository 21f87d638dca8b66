use thiserror::Error;
use tur_api::ApiError;
use tur_core::{CoreError, Role};

#[derive(Debug, Error)]
pub enum AuthError {
    /// The access gate was used outside an authenticated scope. This is a
    /// programming error, not a user-facing condition.
    #[error("no session context: identity required outside an authenticated scope")]
    MissingSessionContext,

    #[error("requires role {required}, current role is {actual}")]
    Forbidden { required: Role, actual: Role },

    #[error("token expired; run `tur auth login` to refresh")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("unexpected auth response: {0}")]
    InvalidResponse(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
