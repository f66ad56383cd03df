use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::campaign::Campaign;

// Request para crear una campaña de tour
#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub price_per_seat: f64,
    pub seats: i32,
}

// Request para actualizar una campaña de tour
#[derive(Debug, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub destination: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub price_per_seat: Option<f64>,
    pub seats: Option<i32>,
    pub status: Option<String>,
}

// Filtros de listado de campañas
#[derive(Debug, Deserialize)]
pub struct CampaignFilters {
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// Response de campaña
#[derive(Debug, Serialize)]
pub struct CampaignResponse {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_per_seat: f64,
    pub seats: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            destination: campaign.destination,
            description: campaign.description,
            start_date: campaign.start_date,
            end_date: campaign.end_date,
            price_per_seat: campaign.price_per_seat.to_string().parse().unwrap_or(0.0),
            seats: campaign.seats,
            status: campaign.status,
            created_at: campaign.created_at,
        }
    }
}
