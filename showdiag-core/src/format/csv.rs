use csv::Writer;

use crate::record::PortRecord;

const HEADER: [&str; 6] = ["Port", "Type", "Alias", "Status", "Speed", "Media"];

/// Render records as CSV with a header row; the writer quotes fields that
/// contain commas or quotes.
pub fn format_csv(records: &[PortRecord]) -> String {
    write_records(records).unwrap_or_else(|_| format!("{}\n", HEADER.join(",")))
}

fn write_records(records: &[PortRecord]) -> Result<String, csv::Error> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.port.as_str(),
            record.port_type.as_str(),
            record.alias.as_str(),
            record.status.as_str(),
            record.speed.as_str(),
            record.media.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::format_csv;
    use crate::record::PortRecord;

    fn record(alias: &str) -> PortRecord {
        PortRecord {
            port: "1/1/x1".to_string(),
            port_type: "network".to_string(),
            alias: alias.to_string(),
            status: "Enabled".to_string(),
            speed: "10Gb".to_string(),
            media: "Fiber".to_string(),
        }
    }

    #[test]
    fn header_row_matches_the_table_columns() {
        let out = format_csv(&[record("Uplink")]);
        assert_eq!(out.lines().next(), Some("Port,Type,Alias,Status,Speed,Media"));
    }

    #[test]
    fn fields_containing_commas_are_quoted() {
        let out = format_csv(&[record("core, primary uplink")]);
        assert_eq!(
            out.lines().nth(1),
            Some("1/1/x1,network,\"core, primary uplink\",Enabled,10Gb,Fiber")
        );
    }

    #[test]
    fn empty_alias_stays_an_empty_field() {
        let out = format_csv(&[record("")]);
        assert_eq!(out.lines().nth(1), Some("1/1/x1,network,,Enabled,10Gb,Fiber"));
    }
}
