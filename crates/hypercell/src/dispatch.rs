//! Runtime access to the descriptors over the closed set of dimensions.
//!
//! Use this where the dimension is only known at runtime (CLI, bindings,
//! table export). Mesh code that knows its dimension statically should use
//! `GeometryInfo<DIM>` directly.
//!
//! Every lookup here validates its indices and returns `TopologyError`; the
//! `checked` knob does not affect this module.

use std::fmt;
use std::str::FromStr;

use crate::counts::Counts;
use crate::error::{IndexKind, TopologyError};
use crate::topology::{CellTopology, FaceTopology, GeometryInfo, RefinedFaceTopology};

/// Supported cell dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    D0,
    D1,
    D2,
    D3,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::D0, Dimension::D1, Dimension::D2, Dimension::D3];

    #[inline]
    pub fn new(dim: usize) -> Result<Self, TopologyError> {
        match dim {
            0 => Ok(Dimension::D0),
            1 => Ok(Dimension::D1),
            2 => Ok(Dimension::D2),
            3 => Ok(Dimension::D3),
            _ => Err(TopologyError::UnsupportedDimension { dim }),
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        match self {
            Dimension::D0 => 0,
            Dimension::D1 => 1,
            Dimension::D2 => 2,
            Dimension::D3 => 3,
        }
    }

    #[inline]
    pub fn descriptor(self) -> &'static Descriptor {
        &DESCRIPTORS[self.get()]
    }

    #[inline]
    pub fn counts(self) -> Counts {
        self.descriptor().counts
    }
}

impl TryFrom<usize> for Dimension {
    type Error = TopologyError;
    fn try_from(dim: usize) -> Result<Self, Self::Error> {
        Dimension::new(dim)
    }
}

impl FromStr for Dimension {
    type Err = TopologyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_suffix('d').unwrap_or(trimmed);
        let dim = trimmed
            .parse::<usize>()
            .map_err(|_| TopologyError::InvalidDimension { text: s.to_string() })?;
        Dimension::new(dim)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.get())
    }
}

/// Immutable descriptor of one dimension: counts plus the fixed face tables.
#[derive(Clone, Copy, Debug)]
pub struct Descriptor {
    pub counts: Counts,
    /// Empty for the point.
    pub opposite_face: &'static [usize],
    /// Present for dimensions whose faces refine (2 and 3).
    child_cell_on_face: Option<fn(usize, usize) -> usize>,
}

impl Descriptor {
    #[inline]
    pub const fn dim(&self) -> usize {
        self.counts.dim
    }

    #[inline]
    pub const fn has_child_table(&self) -> bool {
        self.child_cell_on_face.is_some()
    }

    pub fn opposite_face(&self, face: usize) -> Result<usize, TopologyError> {
        if self.counts.faces_per_cell == 0 {
            return Err(TopologyError::NoFaces { dim: self.dim() });
        }
        self.opposite_face
            .get(face)
            .copied()
            .ok_or(TopologyError::IndexRange {
                what: IndexKind::Face,
                index: face,
                bound: self.counts.faces_per_cell,
            })
    }

    pub fn child_cell_on_face(&self, face: usize, subface: usize) -> Result<usize, TopologyError> {
        if self.counts.faces_per_cell == 0 {
            return Err(TopologyError::NoFaces { dim: self.dim() });
        }
        let lookup = self
            .child_cell_on_face
            .ok_or(TopologyError::NoChildTable { dim: self.dim() })?;
        let c = &self.counts;
        if face >= c.faces_per_cell {
            return Err(TopologyError::IndexRange {
                what: IndexKind::Face,
                index: face,
                bound: c.faces_per_cell,
            });
        }
        if subface >= c.subfaces_per_face {
            return Err(TopologyError::IndexRange {
                what: IndexKind::Subface,
                index: subface,
                bound: c.subfaces_per_face,
            });
        }
        Ok(lookup(face, subface))
    }

    /// Rows `[face] -> [child per subface]`; empty without a child table.
    pub fn child_cell_table(&self) -> Vec<Vec<usize>> {
        let Some(lookup) = self.child_cell_on_face else {
            return Vec::new();
        };
        (0..self.counts.faces_per_cell)
            .map(|f| (0..self.counts.subfaces_per_face).map(|s| lookup(f, s)).collect())
            .collect()
    }
}

/// One descriptor per supported dimension, indexed by dimension.
pub static DESCRIPTORS: [Descriptor; 4] = [
    Descriptor {
        counts: <GeometryInfo<0> as CellTopology>::COUNTS,
        opposite_face: &[],
        child_cell_on_face: None,
    },
    Descriptor {
        counts: <GeometryInfo<1> as CellTopology>::COUNTS,
        opposite_face: <GeometryInfo<1> as FaceTopology>::OPPOSITE_FACE,
        child_cell_on_face: None,
    },
    Descriptor {
        counts: <GeometryInfo<2> as CellTopology>::COUNTS,
        opposite_face: <GeometryInfo<2> as FaceTopology>::OPPOSITE_FACE,
        child_cell_on_face: Some(<GeometryInfo<2> as RefinedFaceTopology>::child_cell_on_face),
    },
    Descriptor {
        counts: <GeometryInfo<3> as CellTopology>::COUNTS,
        opposite_face: <GeometryInfo<3> as FaceTopology>::OPPOSITE_FACE,
        child_cell_on_face: Some(<GeometryInfo<3> as RefinedFaceTopology>::child_cell_on_face),
    },
];

/// Named count attributes of a descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    ChildrenPerCell,
    FacesPerCell,
    SubfacesPerFace,
    VerticesPerCell,
    VerticesPerFace,
    LinesPerCell,
    LinesPerFace,
    QuadsPerCell,
    QuadsPerFace,
    HexesPerCell,
}

impl Attribute {
    pub const ALL: [Attribute; 10] = [
        Attribute::ChildrenPerCell,
        Attribute::FacesPerCell,
        Attribute::SubfacesPerFace,
        Attribute::VerticesPerCell,
        Attribute::VerticesPerFace,
        Attribute::LinesPerCell,
        Attribute::LinesPerFace,
        Attribute::QuadsPerCell,
        Attribute::QuadsPerFace,
        Attribute::HexesPerCell,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Attribute::ChildrenPerCell => "children_per_cell",
            Attribute::FacesPerCell => "faces_per_cell",
            Attribute::SubfacesPerFace => "subfaces_per_face",
            Attribute::VerticesPerCell => "vertices_per_cell",
            Attribute::VerticesPerFace => "vertices_per_face",
            Attribute::LinesPerCell => "lines_per_cell",
            Attribute::LinesPerFace => "lines_per_face",
            Attribute::QuadsPerCell => "quads_per_cell",
            Attribute::QuadsPerFace => "quads_per_face",
            Attribute::HexesPerCell => "hexes_per_cell",
        }
    }

    pub const fn of(self, counts: &Counts) -> usize {
        match self {
            Attribute::ChildrenPerCell => counts.children_per_cell,
            Attribute::FacesPerCell => counts.faces_per_cell,
            Attribute::SubfacesPerFace => counts.subfaces_per_face,
            Attribute::VerticesPerCell => counts.vertices_per_cell,
            Attribute::VerticesPerFace => counts.vertices_per_face,
            Attribute::LinesPerCell => counts.lines_per_cell,
            Attribute::LinesPerFace => counts.lines_per_face,
            Attribute::QuadsPerCell => counts.quads_per_cell,
            Attribute::QuadsPerFace => counts.quads_per_face,
            Attribute::HexesPerCell => counts.hexes_per_cell,
        }
    }
}

impl FromStr for Attribute {
    type Err = TopologyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().replace('-', "_").to_ascii_lowercase();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name() == key)
            .ok_or_else(|| TopologyError::UnknownAttribute { name: s.to_string() })
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count `attribute` of a `dim`-dimensional cell. Face attributes are 0 for
/// the point.
#[inline]
pub fn count_of(attribute: Attribute, dim: Dimension) -> usize {
    attribute.of(&dim.descriptor().counts)
}

/// Face opposite `face`; fails for the point and for `face >= faces_per_cell`.
#[inline]
pub fn opposite_face(dim: Dimension, face: usize) -> Result<usize, TopologyError> {
    dim.descriptor().opposite_face(face)
}

/// Child touching subface `subface` of `face`; defined for dimensions 2 and 3.
#[inline]
pub fn child_cell_on_face(
    dim: Dimension,
    face: usize,
    subface: usize,
) -> Result<usize, TopologyError> {
    dim.descriptor().child_cell_on_face(face, subface)
}
