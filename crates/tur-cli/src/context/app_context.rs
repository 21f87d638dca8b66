use std::sync::Arc;

use tur_api::ApiClient;
use tur_api::auth::LoginRequest;
use tur_auth::{AuthError, SessionStore, SessionWriter, TokenSource, TokenStore, flow};
use tur_config::TurismoConfig;
use tur_core::Identity;

/// Whether startup should try to restore the stored session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionMode {
    Restore,
    Anonymous,
}

/// Shared application resources initialized once at startup.
///
/// Owns the session writer; commands get `&SessionStore` for reads and go
/// through [`AppContext::login`] / [`AppContext::logout`] for changes.
pub struct AppContext {
    pub config: TurismoConfig,
    pub api: ApiClient,
    pub session: SessionStore,
    pub tokens: TokenStore,
    pub token_source: Option<TokenSource>,
    writer: SessionWriter,
}

impl AppContext {
    pub async fn init(config: TurismoConfig, mode: SessionMode) -> Self {
        let api = ApiClient::from_config(&config.api);
        let tokens = TokenStore::new(&config.auth.keyring_service);
        let (session, writer) = SessionStore::new();

        let mut ctx = Self {
            config,
            api,
            session,
            tokens,
            token_source: None,
            writer,
        };
        if mode == SessionMode::Restore {
            ctx.restore().await;
        }
        ctx
    }

    async fn restore(&mut self) {
        let Some((jwt, source)) = self.tokens.load_with_source() else {
            tracing::debug!("no stored session token; running anonymously");
            return;
        };

        match flow::restore(
            &mut self.api,
            &self.writer,
            &jwt,
            self.config.auth.expiry_buffer_secs,
        )
        .await
        {
            Ok(identity) => {
                tracing::debug!(user_id = %identity.id, ?source, "session restored");
                self.token_source = Some(source);
            }
            Err(error) => {
                tracing::warn!(%error, ?source, "stored session could not be restored; running anonymously");
            }
        }
    }

    pub async fn login(&mut self, request: &LoginRequest) -> Result<Arc<Identity>, AuthError> {
        let identity = flow::login(&mut self.api, &self.writer, &self.tokens, request).await?;
        self.token_source = self.tokens.detect_source();
        Ok(identity)
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        flow::logout(&mut self.api, &self.writer, &self.tokens)?;
        self.token_source = None;
        Ok(())
    }
}
