use arrow::array::{BooleanArray, Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use crate::Result;
use crate::types::Distance;

/// One 2-opt pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassRecord {
    pub pass: usize,
    pub evaluations: usize,
    pub improved: bool,
    /// Tour length at the end of the pass.
    pub length: Distance,
    pub time: f64,
}

pub fn serialize_to_parquet(pass_data: &[PassRecord], path: impl AsRef<Path>) -> Result<()> {
    let passes: Int64Array = pass_data.iter().map(|d| d.pass as i64).collect();
    let evaluations: Int64Array = pass_data.iter().map(|d| d.evaluations as i64).collect();
    let improved: BooleanArray = pass_data.iter().map(|d| Some(d.improved)).collect();
    let lengths: Int64Array = pass_data.iter().map(|d| d.length as i64).collect();
    let times: Float64Array = pass_data.iter().map(|d| d.time).collect();

    // Arrow schema
    let schema = Schema::new(vec![
        Field::new("pass", DataType::Int64, false),
        Field::new("evaluations", DataType::Int64, false),
        Field::new("improved", DataType::Boolean, false),
        Field::new("length", DataType::Int64, false),
        Field::new("time", DataType::Float64, false),
    ]);

    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(passes),
            Arc::new(evaluations),
            Arc::new(improved),
            Arc::new(lengths),
            Arc::new(times),
        ],
    )?;

    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::file::reader::{FileReader, SerializedFileReader};

    #[test]
    fn writes_one_row_per_pass() {
        let records = vec![
            PassRecord {
                pass: 1,
                evaluations: 12,
                improved: true,
                length: 90,
                time: 0.001,
            },
            PassRecord {
                pass: 2,
                evaluations: 20,
                improved: false,
                length: 90,
                time: 0.002,
            },
        ];

        let path = std::env::temp_dir().join(format!(
            "christofides-metrics-{}.parquet",
            std::process::id()
        ));
        serialize_to_parquet(&records, &path).expect("serialize");

        let reader = SerializedFileReader::new(File::open(&path).expect("open")).expect("reader");
        let metadata = reader.metadata();
        assert_eq!(metadata.file_metadata().num_rows(), 2);
        assert_eq!(metadata.file_metadata().schema_descr().num_columns(), 5);

        let _ = std::fs::remove_file(&path);
    }
}
