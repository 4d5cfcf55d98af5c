use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::catalog::{Catalog, CatalogEntry, OrbitalStateRecord, Selection};
use crate::sql::error::EmitError;
use crate::sql::statement::{SqlValue, Statement};

const UPSERT_ENTRY: &str = "\
INSERT INTO satellites (norad_id, name, international_designator, country_code, launch_date, object_type, rcs_size, data_source)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
ON CONFLICT (norad_id) DO UPDATE SET
    name = EXCLUDED.name,
    international_designator = EXCLUDED.international_designator,
    country_code = EXCLUDED.country_code,
    launch_date = EXCLUDED.launch_date,
    object_type = EXCLUDED.object_type,
    rcs_size = EXCLUDED.rcs_size,
    updated_at = CURRENT_TIMESTAMP;";

const INSERT_RECORD: &str = "\
INSERT INTO tle_data (satellite_id, epoch, mean_motion, eccentricity, inclination, ra_of_asc_node, arg_of_pericenter, mean_anomaly, tle_line1, tle_line2, bstar, mean_motion_dot, mean_motion_ddot, data_source)
SELECT s.id, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13
FROM satellites s WHERE s.norad_id = $14";

const SKIP_EXISTING_EPOCH: &str = "\nON CONFLICT (satellite_id, epoch) DO NOTHING";

/// Upsert keyed by catalog number. The key itself is never updated.
pub fn entry_upsert(entry: &CatalogEntry, data_source: &str) -> Statement {
    Statement::from_sql_and_values(
        UPSERT_ENTRY,
        [
            SqlValue::from(entry.catalog_number.as_str()),
            SqlValue::from(entry.name.as_str()),
            SqlValue::from(entry.international_designator.as_deref()),
            SqlValue::from(entry.country_code.as_str()),
            SqlValue::from(entry.launch_date.as_deref()),
            SqlValue::from(entry.object_type.as_str()),
            SqlValue::from(entry.rcs_size.as_str()),
            SqlValue::from(data_source),
        ],
    )
}

/// Insert that resolves the owning entry's id through its catalog number.
pub fn record_insert(
    record: &OrbitalStateRecord,
    selection: Selection,
    data_source: &str,
) -> Statement {
    let mut sql = INSERT_RECORD.to_string();
    if selection == Selection::AllEpochs {
        sql.push_str(SKIP_EXISTING_EPOCH);
    }
    sql.push(';');

    Statement::from_sql_and_values(
        &sql,
        [
            SqlValue::from(record.epoch.as_deref()),
            SqlValue::from(&record.mean_motion),
            SqlValue::from(&record.eccentricity),
            SqlValue::from(&record.inclination),
            SqlValue::from(&record.ra_of_asc_node),
            SqlValue::from(&record.arg_of_pericenter),
            SqlValue::from(&record.mean_anomaly),
            SqlValue::from(record.tle_line1.as_deref()),
            SqlValue::from(record.tle_line2.as_deref()),
            SqlValue::from(&record.bstar),
            SqlValue::from(&record.mean_motion_dot),
            SqlValue::from(&record.mean_motion_ddot),
            SqlValue::from(data_source),
            SqlValue::from(record.catalog_number.as_str()),
        ],
    )
}

/// Values recorded in the script's header comment.
#[derive(Debug, Clone)]
pub struct ScriptHeader<'a> {
    pub generated_at: DateTime<Utc>,
    pub source_files: usize,
    pub data_source: &'a str,
}

/// Writes the whole import script inside a single transaction and returns the
/// number of statements written.
pub fn write_script<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    header: &ScriptHeader,
) -> Result<usize, EmitError> {
    let selection = catalog.selection();

    writeln!(out, "-- Import {} satellite and TLE data", header.data_source)?;
    writeln!(
        out,
        "-- Generated: {}",
        header.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "-- Source: {} CSV files", header.source_files)?;
    writeln!(out, "-- Satellites: {}", catalog.entries().len())?;
    writeln!(out, "-- TLE records: {}", catalog.record_count())?;
    writeln!(out, "-- Selection: {}", selection)?;
    writeln!(out)?;
    writeln!(out, "BEGIN;")?;

    let statements = catalog
        .entries()
        .iter()
        .map(|e| entry_upsert(e, header.data_source))
        .chain(
            catalog
                .records()
                .map(|r| record_insert(r, selection, header.data_source)),
        );

    let mut count = 0;
    for statement in statements {
        write!(out, "\n{}\n", statement)?;
        count += 1;
    }

    writeln!(out)?;
    writeln!(out, "COMMIT;")?;
    out.flush()?;

    Ok(count)
}
