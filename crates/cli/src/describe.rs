//! Human- and JSON-readable snapshot of one descriptor.

use std::collections::BTreeMap;
use std::fmt;

use hypercell::api::counts_table;
use hypercell::Dimension;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DescriptorReport {
    pub dim: usize,
    pub counts: BTreeMap<&'static str, usize>,
    pub opposite_face: Vec<usize>,
    /// `[face][subface] -> child`; empty below 2d.
    pub child_cell_on_face: Vec<Vec<usize>>,
}

impl DescriptorReport {
    pub fn new(dim: Dimension) -> Self {
        let d = dim.descriptor();
        Self {
            dim: d.dim(),
            counts: counts_table(dim).into_iter().collect(),
            opposite_face: d.opposite_face.to_vec(),
            child_cell_on_face: d.child_cell_table(),
        }
    }
}

impl fmt::Display for DescriptorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "dimension {}", self.dim)?;
        for (name, value) in &self.counts {
            writeln!(f, "  {name:<18} {value}")?;
        }
        if !self.opposite_face.is_empty() {
            writeln!(f, "  opposite_face      {:?}", self.opposite_face)?;
        }
        for (face, row) in self.child_cell_on_face.iter().enumerate() {
            writeln!(f, "  child_cell_on_face[{face}] {row:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn hex_report_json() {
        let r = DescriptorReport::new(Dimension::D3);
        let v: Value = serde_json::to_value(&r).unwrap();
        assert_eq!(v["dim"], 3);
        assert_eq!(v["counts"]["quads_per_cell"], 6);
        assert_eq!(v["opposite_face"], serde_json::json!([1, 0, 4, 5, 2, 3]));
        assert_eq!(v["child_cell_on_face"][3], serde_json::json!([1, 5, 6, 2]));
    }

    #[test]
    fn point_report_has_no_tables() {
        let r = DescriptorReport::new(Dimension::D0);
        assert!(r.opposite_face.is_empty());
        assert!(r.child_cell_on_face.is_empty());
        assert_eq!(r.counts["vertices_per_cell"], 1);
        let text = r.to_string();
        assert!(text.starts_with("dimension 0"));
        assert!(!text.contains("opposite_face"));
    }

    #[test]
    fn quad_text_lists_rows_in_face_order() {
        let text = DescriptorReport::new(Dimension::D2).to_string();
        assert!(text.contains("  opposite_face      [2, 3, 0, 1]\n"));
        assert!(text.contains("  child_cell_on_face[2] [3, 2]\n"));
        assert!(text.contains("  lines_per_cell     4\n"));
        assert_eq!(text.lines().count(), 1 + 10 + 1 + 4);
    }
}
