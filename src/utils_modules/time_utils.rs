use crate::common::*;

#[doc = "Standard Function of NaiveDate"]
fn convert_date_to_str(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

pub fn convert_date_to_str_ymd_dash(date: NaiveDate) -> String {
    convert_date_to_str(date, "%Y-%m-%d")
}

#[doc = "Parses the date label Elasticsearch attaches to a histogram bucket and keeps only its calendar date."]
/// The date is taken as written in the label; no time zone conversion is applied.
///
/// # Arguments
/// * `date_label` - `key_as_string` of a date histogram bucket
///
/// # Returns
/// * anyhow::Result<NaiveDate>
pub fn convert_str_to_calendar_date(date_label: &str) -> anyhow::Result<NaiveDate> {
    let date_label: &str = date_label.trim();

    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(date_label) {
        return Ok(dt.date_naive());
    }

    /* zone-less labels, ISO and space separated (custom index `format`) */
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_label, format) {
            return Ok(dt.date());
        }
    }

    NaiveDate::parse_from_str(date_label, "%Y-%m-%d").map_err(|e| {
        anyhow!(
            "[time_utils.rs -> convert_str_to_calendar_date] '{}' is not a date: {}",
            date_label,
            e
        )
    })
}
