use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    helpers::format_date,
    prelude::*,
    req::HttpClient,
    stats::response_structs::InspectionPage,
    types::{
        Classification, Inspection, ItemEstimate, Locality, LocalityEstimate, Region,
        RegionEstimate, Tender,
    },
    ApiBase, Error,
};

/// Typed client for the tender statistics and inspection API.
///
/// One method per endpoint; paths, query parameter names and response
/// shapes match the HTTP contract verbatim.
#[derive(Debug)]
pub struct StatsClient {
    pub http_client: HttpClient,
}

impl StatsClient {
    pub fn new(client: Option<Client>, base: Option<ApiBase>) -> Result<StatsClient> {
        let base_url = base.unwrap_or(ApiBase::Production).get_url();
        Self::with_base_url(client, base_url)
    }

    /// Build a client against an explicit base URL, e.g. a staging host.
    pub fn with_base_url(client: Option<Client>, base_url: String) -> Result<StatsClient> {
        Ok(StatsClient {
            http_client: HttpClient::new(client, base_url)?,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.http_client.get(path, query).await?;
        serde_json::from_str(&body).map_err(|e| Error::JsonParse(e.to_string()))
    }

    /// List all regions.
    pub async fn regions(&self) -> Result<Vec<Region>> {
        self.get_json("/regions", &[]).await
    }

    /// List the localities of one region.
    pub async fn localities(&self, region_id: u64) -> Result<Vec<Locality>> {
        self.get_json(&format!("/regions/{region_id}/localities"), &[])
            .await
    }

    /// List all item classifications.
    pub async fn item_classifications(&self) -> Result<Vec<Classification>> {
        self.get_json("/items/classifications", &[]).await
    }

    /// Average item prices for a classification within one year.
    pub async fn item_estimates(
        &self,
        year: u16,
        classification_id: &str,
    ) -> Result<Vec<ItemEstimate>> {
        let query = [
            ("year", year.to_string()),
            ("classificationId", classification_id.to_string()),
        ];
        self.get_json("/estimates/items", &query).await
    }

    /// Expenditure statistics per locality of one region within one year.
    pub async fn locality_estimates(
        &self,
        region_id: u64,
        year: u16,
    ) -> Result<Vec<LocalityEstimate>> {
        let query = [
            ("regionId", region_id.to_string()),
            ("year", year.to_string()),
        ];
        self.get_json("/estimates/localities", &query).await
    }

    /// Expenditure statistics per region within one year.
    pub async fn region_estimates(&self, year: u16) -> Result<Vec<RegionEstimate>> {
        let query = [("year", year.to_string())];
        self.get_json("/estimates/regions", &query).await
    }

    /// Corruption-risk inspection report for one tender.
    pub async fn tender_inspection(&self, tender_id: &str) -> Result<Inspection> {
        self.get_json(&format!("/inspections/tenders/{tender_id}"), &[])
            .await
    }

    /// Tender record from the procurement registry.
    pub async fn tender(&self, tender_id: &str) -> Result<Tender> {
        self.get_json(&format!("/tenders/{tender_id}"), &[]).await
    }

    /// Inspection listing for one locality over a date range.
    pub async fn locality_inspections(
        &self,
        locality_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<InspectionPage> {
        let query = [("from", format_date(from)), ("to", format_date(to))];
        self.get_json(&format!("/inspections/localities/{locality_id}"), &query)
            .await
    }

    /// Inspection listing for one region over a date range.
    pub async fn region_inspections(
        &self,
        region_id: u64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<InspectionPage> {
        let query = [("from", format_date(from)), ("to", format_date(to))];
        self.get_json(&format!("/inspections/regions/{region_id}"), &query)
            .await
    }
}
