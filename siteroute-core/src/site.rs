//! Stored site records and their projection onto destinations.
//!
//! Site records come from a loosely-typed store where coordinates may be
//! missing, blank, JSON numbers, or strings that may not be numeric. Only records with both coordinates
//! parseable and inside the valid ranges become destinations.

use crate::{Destination, GeoPoint};

/// A site as held by the sites data store.
///
/// # Examples
/// ```
/// use siteroute_core::SiteRecord;
///
/// let site = SiteRecord::new("s1", Some("41.01"), Some("28.97"));
/// let destination = site.destination().expect("coordinates parse");
/// assert_eq!(destination.reference, "s1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteRecord {
    /// Store identifier.
    pub id: String,
    /// Display name, when recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Latitude as stored.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "raw_coordinate::deserialize")
    )]
    pub latitude: Option<String>,
    /// Longitude as stored.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "raw_coordinate::deserialize")
    )]
    pub longitude: Option<String>,
}

impl SiteRecord {
    /// Build a record without a name.
    #[must_use]
    pub fn new(id: &str, latitude: Option<&str>, longitude: Option<&str>) -> Self {
        Self {
            id: id.to_owned(),
            name: None,
            latitude: latitude.map(str::to_owned),
            longitude: longitude.map(str::to_owned),
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Parsed location, if both coordinates are usable.
    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        let lat = parse_coordinate(self.latitude.as_deref())?;
        let lng = parse_coordinate(self.longitude.as_deref())?;
        GeoPoint::try_new(lat, lng).ok()
    }

    /// Project onto a destination referencing the record id.
    #[must_use]
    pub fn destination(&self) -> Option<Destination<String>> {
        self.location()
            .map(|location| Destination::new(self.id.clone(), location))
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
}

/// Stored coordinates arrive either as JSON numbers or as text.
#[cfg(feature = "serde")]
mod raw_coordinate {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCoordinate {
        Number(f64),
        Text(String),
    }

    /// Normalise a number or string into the textual form `parse_coordinate` reads.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawCoordinate>::deserialize(deserializer)?;
        Ok(raw.map(|value| match value {
            RawCoordinate::Number(number) => number.to_string(),
            RawCoordinate::Text(text) => text,
        }))
    }
}

/// Keep the records that carry usable coordinates, in input order.
///
/// Each destination borrows its originating record, so callers can map the
/// planned order back to names or ids. Skipped records are logged at `warn`.
pub fn project_sites<'a, I>(records: I) -> Vec<Destination<&'a SiteRecord>>
where
    I: IntoIterator<Item = &'a SiteRecord>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let location = record.location();
            if location.is_none() {
                log::warn!("skipping site {} without usable coordinates", record.id);
            }
            location.map(|point| Destination::new(record, point))
        })
        .collect()
}
