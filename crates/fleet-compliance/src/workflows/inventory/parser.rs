use super::RawRecord;
use std::io::Read;

/// Read every row of a headed CSV export into loosely keyed records. Rows
/// whose field count differs from the header are rejected.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let record = headers
            .iter()
            .zip(row.iter())
            .fold(RawRecord::default(), |mut record, (header, value)| {
                record.insert(header, value);
                record
            });
        records.push(record);
    }

    Ok(records)
}
