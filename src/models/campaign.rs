//! Modelo de TourCampaign
//!
//! Campañas de tours ofrecidas por la empresa de alquiler.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la campaña
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Planned,
    Open,
    Closed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Planned => "planned",
            CampaignStatus::Open => "open",
            CampaignStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(CampaignStatus::Planned),
            "open" => Some(CampaignStatus::Open),
            "closed" => Some(CampaignStatus::Closed),
            _ => None,
        }
    }

    pub fn allowed() -> &'static [&'static str] {
        &["planned", "open", "closed"]
    }
}

/// TourCampaign - mapea exactamente a la tabla campaigns
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_per_seat: rust_decimal::Decimal,
    pub seats: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
