//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication. Field names
//! follow the wire format expected by the existing web frontend (camelCase,
//! `_id` for record ids), so these types must not be renamed casually.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Which account partition a login should be checked against.
///
/// This is a caller-supplied routing hint, not a security boundary: the
/// partition determines which role claim, if any, can be issued. Any value
/// other than `"admin"` falls back to the member partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum AccountType {
    Admin,
    User,
}

impl From<String> for AccountType {
    fn from(value: String) -> Self {
        if value == "admin" {
            AccountType::Admin
        } else {
            AccountType::User
        }
    }
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::User
    }
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    pub password: String,
}

/// Registration response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub roll_number: String,
    pub token: String,
}

/// Registration response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub data: RegisterData,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub account_type: AccountType,
}

/// Login response payload — the stored identity minus its credential hash,
/// augmented with the issued role and token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    pub created_at: i64,
    pub role: String,
    pub token: String,
}

/// Login response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub data: LoginData,
}

// =============================================================================
// Profile API DTOs
// =============================================================================

/// Profile summary — a read-time projection, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub full_name: String,
    pub email: String,
    pub student_id: String,
    pub joined_date: String,
    pub registered_events: u64,
    pub upcoming_events: u64,
    pub completed_events: u64,
}

// =============================================================================
// Health API DTOs
// =============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}
