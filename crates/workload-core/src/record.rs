//! Structured record schema for serialization benchmarks.
//!
//! Field names and ordering are part of the contract: downstream
//! benchmarks round-trip these records through JSON and YAML serializers
//! and compare against the original payload, so the declared order must
//! not change.

use serde::{Deserialize, Serialize};

/// A single benchmark record with nested sub-objects and collections.
///
/// Date fields (`created_at`, `updated_at`) are pre-formatted `%Y-%m-%d`
/// strings so that round-tripping through serializers is lossless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub job_title: String,
    pub address: Address,
    pub created_at: String,
    pub updated_at: String,
    pub description: String,
    pub password: String,
    pub ip_address: String,
    pub user_agent: String,
    pub tags: Vec<String>,
    pub status: Status,
    pub metadata: Metadata,
}

/// Postal address sub-object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Engagement counters and account flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub views: i64,
    pub likes: i64,
    pub favorites: i64,
    pub last_login: String,
    pub is_premium: bool,
}

/// Account status drawn from a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
    Inactive,
    Deleted,
}

impl Status {
    /// All statuses, for uniform selection during generation.
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Pending,
        Status::Inactive,
        Status::Deleted,
    ];

    /// The lowercase label used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Inactive => "inactive",
            Status::Deleted => "deleted",
        }
    }
}
