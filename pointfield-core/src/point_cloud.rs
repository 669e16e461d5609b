//! Columnar point cloud data structures

use crate::column::Column;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Well-known element names
pub mod keys {
    /// The element holding the individual points of a cloud
    pub const POINT: &str = "point";
}

/// One homogeneous run of records sharing an element type
///
/// Columns are addressable by name; declaration order is preserved for
/// positional access. Every column has the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    columns: HashMap<String, Column>,
    order: Vec<String>,
}

impl Block {
    /// Create a new empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column, appending its name to the declaration order
    ///
    /// Re-inserting an existing name replaces the column in place.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();
        if !self.columns.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.columns.insert(name, column);
    }

    /// Look up a column by field name
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Check whether a field name is present
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Iterate columns in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.order
            .iter()
            .filter_map(|name| self.columns.get(name).map(|c| (name.as_str(), c)))
    }

    /// Number of columns in the block
    pub fn column_count(&self) -> usize {
        self.order.len()
    }

    /// Number of rows shared by every column
    pub fn row_count(&self) -> usize {
        self.order
            .first()
            .and_then(|name| self.columns.get(name))
            .map_or(0, Column::len)
    }
}

/// The decoded point cloud: blocks of typed columnar data keyed by element type
///
/// Produced fresh by each parse call and owned solely by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    blocks: HashMap<String, Block>,
    order: Vec<String>,
}

impl PointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block under an element type name
    pub fn insert_block(&mut self, element_type: impl Into<String>, block: Block) {
        let element_type = element_type.into();
        if !self.blocks.contains_key(&element_type) {
            self.order.push(element_type.clone());
        }
        self.blocks.insert(element_type, block);
    }

    /// Look up a block by element type
    pub fn block(&self, element_type: &str) -> Option<&Block> {
        self.blocks.get(element_type)
    }

    /// The block holding the individual points, if present
    pub fn points(&self) -> Option<&Block> {
        self.blocks.get(keys::POINT)
    }

    /// Check whether an element type is present
    pub fn contains_block(&self, element_type: &str) -> bool {
        self.blocks.contains_key(element_type)
    }

    /// Iterate blocks in insertion order
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &Block)> {
        self.order
            .iter()
            .filter_map(|name| self.blocks.get(name).map(|b| (name.as_str(), b)))
    }

    /// Number of blocks in the cloud
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the cloud holds no blocks
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ScalarType;

    #[test]
    fn test_block_preserves_declaration_order() {
        let mut block = Block::new();
        block.insert("z", Column::zeros(ScalarType::Double, 2));
        block.insert("x", Column::zeros(ScalarType::Float, 2));
        block.insert("y", Column::zeros(ScalarType::Int, 2));

        let names: Vec<&str> = block.names().collect();
        assert_eq!(names, vec!["z", "x", "y"]);
        assert_eq!(block.row_count(), 2);
        assert_eq!(block.column_count(), 3);
    }

    #[test]
    fn test_cloud_preserves_block_order() {
        let mut cloud = PointCloud::new();
        cloud.insert_block("point", Block::new());
        cloud.insert_block("waveform", Block::new());

        let names: Vec<&str> = cloud.blocks().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["point", "waveform"]);
        assert!(cloud.points().is_some());
    }
}
