//! Long-form export of the lookup tables: one row per table entry.
//!
//! Columns: `relation` (`opposite_face` | `child_cell_on_face`), `dim`, `face`,
//! `subface` (null for opposite faces), `value`.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::provenance::Provenance;

pub fn tables_frame() -> PolarsResult<DataFrame> {
    let mut relation: Vec<&str> = Vec::new();
    let mut dim: Vec<u32> = Vec::new();
    let mut face: Vec<u32> = Vec::new();
    let mut subface: Vec<Option<u32>> = Vec::new();
    let mut value: Vec<u32> = Vec::new();

    for (d, f, opp) in hypercell::api::opposite_face_entries() {
        relation.push("opposite_face");
        dim.push(d as u32);
        face.push(f as u32);
        subface.push(None);
        value.push(opp as u32);
    }
    for (d, f, s, child) in hypercell::api::child_cell_entries() {
        relation.push("child_cell_on_face");
        dim.push(d as u32);
        face.push(f as u32);
        subface.push(Some(s as u32));
        value.push(child as u32);
    }

    df!(
        "relation" => relation,
        "dim" => dim,
        "face" => face,
        "subface" => subface,
        "value" => value
    )
}

/// Write the frame to `out` (`.parquet`, otherwise CSV) and a provenance sidecar.
pub fn run(out: &str) -> Result<()> {
    let mut df = tables_frame()?;
    tracing::info!(rows = df.height(), out, "export");

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    let format = if out.ends_with(".parquet") {
        ParquetWriter::new(&mut file).finish(&mut df)?;
        "parquet"
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        "csv"
    };

    let prov = Provenance::for_export(out_path, format, df.height()).write_beside(out_path)?;
    tracing::debug!(provenance = %prov.display(), "wrote provenance");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn frame_has_one_row_per_entry() {
        let df = tables_frame().unwrap();
        // opposite: 2 + 4 + 6, child: 4*2 + 6*4
        assert_eq!(df.height(), 12 + 32);
        assert_eq!(df.width(), 5);
        assert_eq!(df.column("subface").unwrap().null_count(), 12);
    }

    #[test]
    fn export_csv_writes_table_and_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("tables").join("topology.csv");
        run(out.to_str().unwrap()).unwrap();
        assert!(out.exists());
        assert!(dir.path().join("tables/topology.provenance.json").exists());

        let back = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.height(), 44);
    }

    #[test]
    fn export_parquet_roundtrips_row_count() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("topology.parquet");
        run(out.to_str().unwrap()).unwrap();
        let back = LazyFrame::scan_parquet(&out, ScanArgsParquet::default())
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.height(), 44);
    }
}
