//! Query parameter sets for the report endpoints.

use thiserror::Error;

use crate::range::DateRange;

/// Traffic sources queried when the user leaves the filter untouched
pub const DEFAULT_TRAFFIC_SOURCE_IDS: &str = "1,6";
/// Tracker date mode for explicit start/end dates
pub const DEFAULT_DATE_TYPE: &str = "custom-time";
/// Timezone the tracker reports in
pub const DEFAULT_TIMEZONE: &str = "America/Atikokan";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Please enter an email address.")]
    MissingEmail,
    #[error("'{0}' is not a valid email address.")]
    InvalidEmail(String),
    #[error("Traffic source IDs must be comma-separated numbers, got '{0}'.")]
    InvalidTrafficSource(String),
}

/// Filters for the raw tracker report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerReportParams {
    pub range: DateRange,
    pub traffic_source_ids: String,
    pub date_type: String,
    pub timezone: String,
}

impl TrackerReportParams {
    /// Params with the tracker defaults for everything but the range
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            traffic_source_ids: DEFAULT_TRAFFIC_SOURCE_IDS.to_string(),
            date_type: DEFAULT_DATE_TYPE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }

    /// Build from raw form fields, normalizing the traffic source list.
    /// Blank date type / timezone fall back to the defaults.
    pub fn from_form(
        range: DateRange,
        traffic_source_ids: &str,
        date_type: &str,
        timezone: &str,
    ) -> Result<Self, ParamError> {
        let traffic_source_ids = normalize_traffic_sources(traffic_source_ids)?;
        let date_type = non_blank_or(date_type, DEFAULT_DATE_TYPE);
        let timezone = non_blank_or(timezone, DEFAULT_TIMEZONE);

        Ok(Self {
            range,
            traffic_source_ids,
            date_type,
            timezone,
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.range.query_pairs();
        pairs.push(("trafficSourceIds", self.traffic_source_ids.clone()));
        pairs.push(("dateType", self.date_type.clone()));
        pairs.push(("timezone", self.timezone.clone()));
        pairs
    }
}

/// Parameters for the ad platform test query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdsTestParams {
    pub email: String,
    pub range: DateRange,
}

impl AdsTestParams {
    pub fn new(email: &str, range: DateRange) -> Result<Self, ParamError> {
        Ok(Self {
            email: validate_email(email)?,
            range,
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("email", self.email.clone())];
        pairs.extend(self.range.query_pairs());
        pairs
    }
}

/// Trim an email and check it has the `local@domain` shape.
pub fn validate_email(email: &str) -> Result<String, ParamError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ParamError::MissingEmail);
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace) =>
        {
            Ok(email.to_string())
        }
        _ => Err(ParamError::InvalidEmail(email.to_string())),
    }
}

/// `" 1, 6 ,"` -> `"1,6"`. Empty input means the defaults.
pub fn normalize_traffic_sources(input: &str) -> Result<String, ParamError> {
    let ids = input
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u32>()
                .map(|n| n.to_string())
                .map_err(|_| ParamError::InvalidTrafficSource(input.trim().to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Ok(DEFAULT_TRAFFIC_SOURCE_IDS.to_string());
    }
    Ok(ids.join(","))
}

fn non_blank_or(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
