use serde::{Deserialize, Serialize};

/// One channel segment as written to `stream.map.dat`.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamSegment {
    pub col: i64,
    pub row: i64,
    pub id: i64,
    /// Segment length (m)
    pub length: f64,
    /// Cut/bank height (m)
    pub height: f64,
    /// Cut width (m)
    pub width: f64,
    /// Segment aspect (degrees)
    pub aspect: f64,
}

impl StreamSegment {
    /// Default attribute names of the channel coverage, in output order.
    pub const FIELDS: [&'static str; 7] = [
        "COL",
        "ROW",
        "arcid",
        "Shape_Length",
        "effdepth",
        "effwidth",
        "rd_aspect",
    ];
}

/// Integer columns are truncated toward zero, the same as `%d` on a float cell.
impl From<[f64; 7]> for StreamSegment {
    fn from(values: [f64; 7]) -> Self {
        let [col, row, id, length, height, width, aspect] = values;
        StreamSegment {
            col: col as i64,
            row: row as i64,
            id: id as i64,
            length,
            height,
            width,
            aspect,
        }
    }
}

/// Source field names for each segment attribute.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FieldNames {
    pub col: String,
    pub row: String,
    pub id: String,
    pub length: String,
    pub height: String,
    pub width: String,
    pub aspect: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        let [col, row, id, length, height, width, aspect] =
            StreamSegment::FIELDS.map(String::from);
        FieldNames {
            col,
            row,
            id,
            length,
            height,
            width,
            aspect,
        }
    }
}

impl FieldNames {
    pub fn as_array(&self) -> [&str; 7] {
        [
            self.col.as_str(),
            self.row.as_str(),
            self.id.as_str(),
            self.length.as_str(),
            self.height.as_str(),
            self.width.as_str(),
            self.aspect.as_str(),
        ]
    }
}
