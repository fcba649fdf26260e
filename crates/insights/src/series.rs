//! The projection of statistics records into chart series.

use serde_json::Map;
use serde_json::Value;

use crate::error::SeriesError;

/// One element of the JSON array returned by an insights endpoint.
///
/// A record carries at least the label field and the value field of the
/// panel it backs; any other fields are ignored. Records have no identity
/// beyond their position in the response array and are never mutated
/// after receipt.
pub type MetricRecord = Map<String, Value>;

/// The label and value sequences of one chart.
///
/// The two sequences are index-aligned with the records they were
/// projected from: `labels[i]` and `values[i]` come from the record
/// at index `i`, so both sequences always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The text put along the chart's label axis, one entry per record.
    pub labels: Vec<String>,

    /// The plotted values, index-aligned with the labels.
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Projects the given label and value fields out of the records,
    /// preserving the record order.
    ///
    /// The label field must hold text and the value field must hold
    /// a number; the first record that misses either field, or holds
    /// it with another type, fails the projection. An empty record
    /// array yields an empty series.
    pub fn project(
        records: &[MetricRecord],
        label_field: &str,
        value_field: &str,
    ) -> Result<ChartSeries, SeriesError> {
        let mut labels = Vec::with_capacity(records.len());
        let mut values = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            labels.push(label(record, label_field, index)?);
            values.push(value(record, value_field, index)?);
        }

        Ok(Self { labels, values })
    }
}

fn label(record: &MetricRecord, field: &str, index: usize) -> Result<String, SeriesError> {
    match record.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(SeriesError::LabelNotText {
            field: field.to_owned(),
            index,
        }),
        None => Err(SeriesError::FieldNotFound {
            field: field.to_owned(),
            index,
        }),
    }
}

fn value(record: &MetricRecord, field: &str, index: usize) -> Result<f64, SeriesError> {
    match record.get(field) {
        Some(Value::Number(number)) => number.as_f64().ok_or(SeriesError::ValueNotNumeric {
            field: field.to_owned(),
            index,
        }),
        Some(_) => Err(SeriesError::ValueNotNumeric {
            field: field.to_owned(),
            index,
        }),
        None => Err(SeriesError::FieldNotFound {
            field: field.to_owned(),
            index,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(body: &str) -> Vec<MetricRecord> {
        serde_json::from_str(body).expect("a JSON array of objects")
    }

    #[test]
    fn project_maps_records_into_parallel_sequences() {
        let records = records(r#"[{"skill":"Python","demand":42},{"skill":"SQL","demand":17}]"#);

        let series = ChartSeries::project(&records, "skill", "demand").unwrap();

        assert_eq!(
            series,
            ChartSeries {
                labels: vec![String::from("Python"), String::from("SQL")],
                values: vec![42.0, 17.0],
            }
        );
    }

    #[test]
    fn project_preserves_the_record_order() {
        let records = records(
            r#"[
                {"role":"Engineer","count":3},
                {"role":"Analyst","count":1},
                {"role":"Manager","count":2}
            ]"#,
        );

        let series = ChartSeries::project(&records, "role", "count").unwrap();

        assert_eq!(series.labels, ["Engineer", "Analyst", "Manager"]);
        assert_eq!(series.values, [3.0, 1.0, 2.0]);
        assert_eq!(series.labels.len(), records.len());
        assert_eq!(series.values.len(), records.len());
    }

    #[test]
    fn project_keeps_fractional_values() {
        let records = records(r#"[{"work_type":"Remote","average_salary":93500.5}]"#);

        let series = ChartSeries::project(&records, "work_type", "average_salary").unwrap();

        assert_eq!(series.values, [93500.5]);
    }

    #[test]
    fn projecting_no_records_yields_an_empty_series() {
        let series = ChartSeries::project(&[], "skill", "demand").unwrap();

        assert!(series.labels.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn a_missing_label_field_fails_the_projection() {
        let records = records(r#"[{"skill":"Python","demand":42},{"demand":17}]"#);

        let error = ChartSeries::project(&records, "skill", "demand").unwrap_err();

        assert_eq!(
            error,
            SeriesError::FieldNotFound {
                field: String::from("skill"),
                index: 1,
            }
        );
    }

    #[test]
    fn a_missing_value_field_fails_the_projection() {
        let records = records(r#"[{"company":"Acme"}]"#);

        let error = ChartSeries::project(&records, "company", "job_count").unwrap_err();

        assert_eq!(
            error,
            SeriesError::FieldNotFound {
                field: String::from("job_count"),
                index: 0,
            }
        );
    }

    #[test]
    fn a_label_that_is_not_text_fails_the_projection() {
        let records = records(r#"[{"skill":7,"demand":42}]"#);

        let error = ChartSeries::project(&records, "skill", "demand").unwrap_err();

        assert_eq!(
            error,
            SeriesError::LabelNotText {
                field: String::from("skill"),
                index: 0,
            }
        );
    }

    #[test]
    fn a_value_that_is_not_numeric_fails_the_projection() {
        let records = records(r#"[{"skill":"Python","demand":"many"}]"#);

        let error = ChartSeries::project(&records, "skill", "demand").unwrap_err();

        assert_eq!(
            error,
            SeriesError::ValueNotNumeric {
                field: String::from("demand"),
                index: 0,
            }
        );
    }
}
