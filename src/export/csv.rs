use crate::export::model::{PresenceExport, get_headers, record_to_row};
use csv::Writer;
use std::path::Path;

/// Write the presence rows as CSV to the given file.
pub(crate) fn export_csv(rows: &[PresenceExport], path: &Path) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(record_to_row(row))?;
    }

    wtr.flush()?;

    crate::export::notify_export_success("CSV", path);
    Ok(())
}
