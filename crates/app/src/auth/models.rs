//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{
    auth::AccessTokenVersion,
    domain::staff::records::{StaffRole, StaffUuid},
};

/// Token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveAccessToken {
    /// Operator account that owns this token.
    pub staff_uuid: StaffUuid,

    /// Role of the owning account.
    pub role: StaffRole,

    /// Token format/hash version.
    pub version: AccessTokenVersion,

    /// HMAC verifier for the token secret material.
    pub token_hash: String,
}

/// Access token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct AccessTokenMetadata {
    pub uuid: Uuid,
    pub staff_uuid: StaffUuid,
    pub version: AccessTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New access token persistence payload.
#[derive(Debug, Clone)]
pub struct NewAccessToken {
    pub uuid: Uuid,
    pub staff_uuid: StaffUuid,
    pub version: AccessTokenVersion,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// Token issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedAccessToken {
    pub token: String,
    pub metadata: AccessTokenMetadata,
}

/// The authenticated principal behind a back-office request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub staff_uuid: StaffUuid,
    pub role: StaffRole,
}
