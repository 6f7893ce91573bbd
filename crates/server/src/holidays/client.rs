use reqwest::header::ACCEPT;
use shared_types::{BankHolidays, CalendarConfig, CalendarError};
use std::time::Duration;

use super::{non_working_days, parse_bank_holidays};
use crate::calendar::NonWorkingDaySet;

/// HTTP client for the remote bank holiday calendar.
#[derive(Debug, Clone)]
pub struct BankHolidaysClient {
    http: reqwest::Client,
    url: String,
    division: Option<String>,
}

impl BankHolidaysClient {
    pub fn new(config: &CalendarConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.holiday_fetch_timeout_secs))
            .build()
            .map_err(|e| CalendarError::unavailable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.bank_holidays_url.clone(),
            division: config.division_filter().map(str::to_string),
        })
    }

    /// Retrieve the raw payload, unfiltered.
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_payload(&self) -> Result<BankHolidays, CalendarError> {
        let response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CalendarError::unavailable(format!("Bank holiday request timed out: {e}"))
                } else {
                    CalendarError::unavailable(format!("Bank holiday request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(CalendarError::unavailable(format!(
                "Bank holiday API error ({status})"
            )));
        }

        let body = response.text().await.map_err(|e| {
            CalendarError::unavailable(format!("Failed to read bank holiday response: {e}"))
        })?;

        parse_bank_holidays(&body)
    }

    /// Fetch and flatten the configured division into a date set.
    pub async fn fetch(&self) -> Result<NonWorkingDaySet, CalendarError> {
        let payload = self.fetch_payload().await.inspect_err(|e| {
            tracing::error!(error = %e, url = %self.url, "Failed to load bank holidays");
        })?;
        let days = non_working_days(&payload, self.division.as_deref())?;
        tracing::info!(
            division = self.division.as_deref().unwrap_or("all"),
            count = days.len(),
            "Bank holidays loaded"
        );
        Ok(days)
    }
}
