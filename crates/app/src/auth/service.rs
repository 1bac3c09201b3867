//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    auth::{
        AccessTokenMetadata, AccessTokenVersion, AuthServiceError, IssuedAccessToken,
        NewAccessToken, Operator, TokenHasher, build_verifier_input, format_access_token,
        generate_access_token_secret, parse_access_token, repository::PgAuthRepository,
    },
    domain::staff::records::StaffUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
    hasher: TokenHasher,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, hasher: TokenHasher) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
            hasher,
        }
    }

    /// Issue a new access token for the given operator account.
    ///
    /// The raw token is only ever returned here; storage keeps its HMAC.
    ///
    /// # Errors
    ///
    /// Returns an error if database insertion fails.
    pub async fn issue_access_token(
        &self,
        staff_uuid: StaffUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedAccessToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = AccessTokenVersion::V1;
        let secret = generate_access_token_secret();
        let token = format_access_token(token_uuid, version, &secret);

        let verifier_input = build_verifier_input(&token_uuid, version, &staff_uuid, &secret);
        let token_hash = self.hasher.hash(&verifier_input);

        let metadata = self
            .repository
            .create_access_token(&NewAccessToken {
                uuid: token_uuid,
                staff_uuid,
                version,
                token_hash,
                expires_at,
            })
            .await
            .map_err(AuthServiceError::from)?;

        Ok(IssuedAccessToken { token, metadata })
    }

    /// List all tokens for the given operator account.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_access_tokens(
        &self,
        staff_uuid: StaffUuid,
    ) -> Result<Vec<AccessTokenMetadata>, AuthServiceError> {
        self.repository
            .list_access_tokens(staff_uuid)
            .await
            .map_err(AuthServiceError::from)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_access_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        self.repository
            .revoke_access_token(token_uuid)
            .await
            .map(|record| record.is_some())
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Operator, AuthServiceError> {
        let parsed = parse_access_token(bearer_token).map_err(|_| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_access_token(parsed.token_uuid)
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::NotFound)?;

        if token.version != parsed.version {
            return Err(AuthServiceError::NotFound);
        }

        let verifier_input = build_verifier_input(
            &parsed.token_uuid,
            parsed.version,
            &token.staff_uuid,
            &parsed.secret,
        );

        if !self.hasher.verify(&verifier_input, &token.token_hash) {
            return Err(AuthServiceError::NotFound);
        }

        self.repository
            .mark_access_token_used(parsed.token_uuid)
            .await
            .map_err(AuthServiceError::from)?;

        Ok(Operator {
            staff_uuid: token.staff_uuid,
            role: token.role,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the operator behind it.
    ///
    /// Every failure mode collapses to [`AuthServiceError::NotFound`] so
    /// callers cannot distinguish unknown, revoked, expired, and forged
    /// tokens.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Operator, AuthServiceError>;
}
