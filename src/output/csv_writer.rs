//! CSV output writer for the record table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::collection::RecordCollection;
use crate::error::Result;

const HEADER: [&str; 11] = [
    "Sequence",
    "Timestamp",
    "Date",
    "Year",
    "Month",
    "Day",
    "DayName",
    "Hour",
    "Period",
    "Sender",
    "Body",
];

/// Writes the record table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sequence`, `Timestamp`, `Date`, `Year`, `Month`, `Day`,
///   `DayName`, `Hour`, `Period`, `Sender`, `Body`
/// - System notifications have sender `SYSTEM`
/// - Encoding: UTF-8
pub fn write_csv(collection: &RecordCollection, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(collection, file)
}

/// Converts the record table to a CSV string.
pub fn to_csv(collection: &RecordCollection) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(collection, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(collection: &RecordCollection, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for record in collection {
        let cal = record.calendar();
        writer.write_record([
            record.sequence().to_string(),
            record.timestamp().format("%Y-%m-%d %H:%M:%S").to_string(),
            cal.only_date().to_string(),
            cal.year().to_string(),
            cal.month_name().to_string(),
            cal.day().to_string(),
            cal.day_name().to_string(),
            cal.hour().to_string(),
            cal.period().to_string(),
            record.sender().to_string(),
            record.body().to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
