use crate::catalog::epoch::parse_epoch;
use crate::catalog::error::NormalizeError;
use crate::catalog::types::{CatalogEntry, NumberMode, Numeric, OrbitalStateRecord};
use crate::reader::Row;

/// Placeholder for descriptive fields missing from the export.
pub const UNKNOWN: &str = "UNKNOWN";

const CATALOG_NUMBER: &[&str] = &["NORAD_CAT_ID", "norad_cat_id"];
const OBJECT_NAME: &[&str] = &["OBJECT_NAME", "object_name", "name"];
const OBJECT_ID: &[&str] = &["OBJECT_ID", "international_designator"];
const COUNTRY_CODE: &[&str] = &["COUNTRY_CODE", "country_code", "country"];
const LAUNCH_DATE: &[&str] = &["LAUNCH_DATE", "launch_date"];
const OBJECT_TYPE: &[&str] = &["OBJECT_TYPE", "object_type"];
const RCS_SIZE: &[&str] = &["RCS_SIZE", "rcs_size"];
const EPOCH: &[&str] = &["EPOCH", "epoch"];
const TLE_LINE1: &[&str] = &["TLE_LINE1", "tle_line1", "LINE1"];
const TLE_LINE2: &[&str] = &["TLE_LINE2", "tle_line2", "LINE2"];

// (field name used in errors, accepted headers)
const MEAN_MOTION: (&str, &[&str]) = ("MEAN_MOTION", &["MEAN_MOTION", "mean_motion"]);
const ECCENTRICITY: (&str, &[&str]) = ("ECCENTRICITY", &["ECCENTRICITY", "eccentricity"]);
const INCLINATION: (&str, &[&str]) = ("INCLINATION", &["INCLINATION", "inclination"]);
const RA_OF_ASC_NODE: (&str, &[&str]) = ("RA_OF_ASC_NODE", &["RA_OF_ASC_NODE", "raan"]);
const ARG_OF_PERICENTER: (&str, &[&str]) =
    ("ARG_OF_PERICENTER", &["ARG_OF_PERICENTER", "arg_of_pericenter"]);
const MEAN_ANOMALY: (&str, &[&str]) = ("MEAN_ANOMALY", &["MEAN_ANOMALY", "mean_anomaly"]);
const BSTAR: (&str, &[&str]) = ("BSTAR", &["BSTAR", "bstar"]);
const MEAN_MOTION_DOT: (&str, &[&str]) = ("MEAN_MOTION_DOT", &["MEAN_MOTION_DOT"]);
const MEAN_MOTION_DDOT: (&str, &[&str]) = ("MEAN_MOTION_DDOT", &["MEAN_MOTION_DDOT"]);

/// Maps raw CSV rows onto catalog entries and orbital state records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    numbers: NumberMode,
}

impl Normalizer {
    pub fn new(numbers: NumberMode) -> Self {
        Self { numbers }
    }

    /// Returns `None` for rows without a catalog number.
    pub fn normalize(
        &self,
        row: &Row,
    ) -> Result<Option<(CatalogEntry, OrbitalStateRecord)>, NormalizeError> {
        let Some(catalog_number) = row.first_of(CATALOG_NUMBER) else {
            return Ok(None);
        };
        let catalog_number = catalog_number.to_string();

        let entry = CatalogEntry {
            catalog_number: catalog_number.clone(),
            name: row
                .first_of(OBJECT_NAME)
                .map(String::from)
                .unwrap_or_else(|| format!("NORAD {}", catalog_number)),
            international_designator: optional(row, OBJECT_ID),
            country_code: descriptive(row, COUNTRY_CODE),
            launch_date: optional(row, LAUNCH_DATE),
            object_type: descriptive(row, OBJECT_TYPE),
            rcs_size: descriptive(row, RCS_SIZE),
        };

        let number = |(field, names): (&'static str, &[&str])| {
            self.numeric(row, &catalog_number, field, names)
        };

        let raw_epoch = row.first_of(EPOCH);
        let record = OrbitalStateRecord {
            raw_epoch: raw_epoch.map(String::from),
            epoch: raw_epoch.map(parse_epoch),
            mean_motion: number(MEAN_MOTION)?,
            eccentricity: number(ECCENTRICITY)?,
            inclination: number(INCLINATION)?,
            ra_of_asc_node: number(RA_OF_ASC_NODE)?,
            arg_of_pericenter: number(ARG_OF_PERICENTER)?,
            mean_anomaly: number(MEAN_ANOMALY)?,
            tle_line1: optional(row, TLE_LINE1),
            tle_line2: optional(row, TLE_LINE2),
            bstar: number(BSTAR)?,
            mean_motion_dot: number(MEAN_MOTION_DOT)?,
            mean_motion_ddot: number(MEAN_MOTION_DDOT)?,
            catalog_number,
        };

        Ok(Some((entry, record)))
    }

    fn numeric(
        &self,
        row: &Row,
        catalog_number: &str,
        field: &'static str,
        names: &[&str],
    ) -> Result<Numeric, NormalizeError> {
        let raw = row.first_of(names);
        match self.numbers {
            NumberMode::Strict => match raw {
                None => Ok(Numeric::Parsed(0.0)),
                Some(text) => text.parse::<f64>().map(Numeric::Parsed).map_err(|_| {
                    NormalizeError::InvalidNumber {
                        catalog_number: catalog_number.to_string(),
                        field,
                        value: text.to_string(),
                    }
                }),
            },
            NumberMode::Deferred => Ok(Numeric::Deferred(raw.unwrap_or("0").to_string())),
        }
    }
}

fn optional(row: &Row, names: &[&str]) -> Option<String> {
    row.first_of(names).map(String::from)
}

fn descriptive(row: &Row, names: &[&str]) -> String {
    row.first_of(names).unwrap_or(UNKNOWN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iss_row() -> Row {
        [
            ("NORAD_CAT_ID", "25544"),
            ("OBJECT_NAME", "ISS (ZARYA)"),
            ("OBJECT_ID", "1998-067A"),
            ("COUNTRY_CODE", "ISS"),
            ("LAUNCH_DATE", "1998-11-20"),
            ("OBJECT_TYPE", "PAYLOAD"),
            ("RCS_SIZE", "LARGE"),
            ("EPOCH", "2026-02-22T10:00:00.123456"),
            ("MEAN_MOTION", "15.49507896"),
            ("ECCENTRICITY", "0.0001413"),
            ("INCLINATION", "51.6461"),
            ("RA_OF_ASC_NODE", "221.2784"),
            ("ARG_OF_PERICENTER", "89.1723"),
            ("MEAN_ANOMALY", "280.4612"),
            ("BSTAR", "-0.000031515"),
            ("MEAN_MOTION_DOT", "-0.00002218"),
            ("MEAN_MOTION_DDOT", "0"),
            ("TLE_LINE1", "1 25544U 98067A ..."),
            ("TLE_LINE2", "2 25544  51.6461 ..."),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn maps_a_full_row() {
        let (entry, record) = Normalizer::default()
            .normalize(&iss_row())
            .unwrap()
            .unwrap();

        assert_eq!(entry.catalog_number, "25544");
        assert_eq!(entry.name, "ISS (ZARYA)");
        assert_eq!(entry.international_designator.as_deref(), Some("1998-067A"));
        assert_eq!(entry.launch_date.as_deref(), Some("1998-11-20"));
        assert_eq!(entry.rcs_size, "LARGE");

        assert_eq!(record.catalog_number, "25544");
        assert_eq!(record.raw_epoch.as_deref(), Some("2026-02-22T10:00:00.123456"));
        assert_eq!(record.epoch.as_deref(), Some("2026-02-22 10:00:00"));
        assert_eq!(record.inclination, Numeric::Parsed(51.6461));
        assert_eq!(record.bstar, Numeric::Parsed(-0.000031515));
        assert_eq!(record.tle_line2.as_deref(), Some("2 25544  51.6461 ..."));
    }

    #[test]
    fn row_without_catalog_number_is_skipped() {
        let row: Row = [("NORAD_CAT_ID", ""), ("OBJECT_NAME", "DEBRIS")]
            .into_iter()
            .collect();
        assert!(Normalizer::default().normalize(&row).unwrap().is_none());

        let row: Row = [("OBJECT_NAME", "DEBRIS")].into_iter().collect();
        assert!(Normalizer::default().normalize(&row).unwrap().is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let row: Row = [("norad_cat_id", "900")].into_iter().collect();
        let (entry, record) = Normalizer::default().normalize(&row).unwrap().unwrap();

        assert_eq!(entry.name, "NORAD 900");
        assert_eq!(entry.country_code, UNKNOWN);
        assert_eq!(entry.object_type, UNKNOWN);
        assert_eq!(entry.rcs_size, UNKNOWN);
        assert_eq!(entry.launch_date, None);
        assert_eq!(record.raw_epoch, None);
        assert_eq!(record.epoch, None);
        assert_eq!(record.mean_motion, Numeric::Parsed(0.0));
        assert_eq!(record.mean_motion_ddot, Numeric::Parsed(0.0));
        assert_eq!(record.tle_line1, None);
    }

    #[test]
    fn strict_mode_rejects_malformed_numbers() {
        let row: Row = [("NORAD_CAT_ID", "5"), ("ECCENTRICITY", ".0001x")]
            .into_iter()
            .collect();
        let err = Normalizer::new(NumberMode::Strict)
            .normalize(&row)
            .unwrap_err();

        let NormalizeError::InvalidNumber {
            catalog_number,
            field,
            value,
        } = err;
        assert_eq!(catalog_number, "5");
        assert_eq!(field, "ECCENTRICITY");
        assert_eq!(value, ".0001x");
    }

    #[test]
    fn deferred_mode_passes_text_through() {
        let row: Row = [("NORAD_CAT_ID", "5"), ("ECCENTRICITY", ".0001x")]
            .into_iter()
            .collect();
        let (_, record) = Normalizer::new(NumberMode::Deferred)
            .normalize(&row)
            .unwrap()
            .unwrap();

        assert_eq!(record.eccentricity, Numeric::Deferred(".0001x".into()));
        assert_eq!(record.bstar, Numeric::Deferred("0".into()));
    }
}
