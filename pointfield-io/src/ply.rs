//! ASCII PLY format support
//!
//! Reads the whitespace-delimited ASCII encoding only: a self-describing text
//! header is parsed into an ordered schema, then each declared element block is
//! decoded off the same stream cursor into typed columns. Binary and compressed
//! PLY variants are not supported.

use pointfield_core::{Block, Column, Error, PointCloud, Result, ScalarType};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A property declaration within an element block
#[derive(Debug, Clone, PartialEq)]
pub struct PlyProperty {
    pub name: String,
    pub scalar_type: ScalarType,
}

/// An element declaration: a named block of `count` data rows
#[derive(Debug, Clone, PartialEq)]
pub struct PlyElement {
    pub name: String,
    pub count: usize,
    pub properties: Vec<PlyProperty>,
}

/// Parsed PLY header: element blocks in declaration order
///
/// The order is significant, it fixes the order in which data rows follow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlyHeader {
    pub elements: Vec<PlyElement>,
}

/// Reader for ASCII PLY point cloud files
pub struct PlyReader;

impl PlyReader {
    /// Read an ASCII PLY file into a point cloud
    pub fn read_ply_file<P: AsRef<Path>>(path: P) -> Result<PointCloud> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_ply_data(&mut reader)
    }

    /// Read ASCII PLY data from a buffered reader
    ///
    /// Runs the header parser once, then decodes one block per declared
    /// element in schema order over the same cursor. Any failure aborts the
    /// whole read; no partial point cloud is returned.
    pub fn read_ply_data<R: BufRead>(reader: &mut R) -> Result<PointCloud> {
        Self::read_signature(reader)?;
        let header = Self::read_header(reader)?;

        let mut cloud = PointCloud::new();
        for element in &header.elements {
            let block = Self::read_block(reader, element)?;
            cloud.insert_block(element.name.clone(), block);
        }
        Ok(cloud)
    }

    /// Check the magic on the first line
    fn read_signature<R: BufRead>(reader: &mut R) -> Result<()> {
        let mut raw = Vec::new();
        reader.read_until(b'\n', &mut raw)?;
        // A first line that is not UTF-8 cannot carry the magic
        let first_line = std::str::from_utf8(&raw).unwrap_or("");
        if !first_line.contains("ply") {
            return Err(Error::InvalidFormat("Not a valid ply file".to_string()));
        }
        Ok(())
    }

    /// Parse header directives up to the `end_header` terminator
    fn read_header<R: BufRead>(reader: &mut R) -> Result<PlyHeader> {
        let mut elements: Vec<PlyElement> = Vec::new();
        let mut line = String::new();

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line)?;
            if bytes_read == 0 {
                return Err(Error::InvalidFormat(
                    "Unexpected end of file in ply header".to_string(),
                ));
            }

            let line = line.trim();
            if line == "end_header" {
                break;
            }

            if let Some(rest) = line.strip_prefix("element ") {
                elements.push(Self::parse_element(rest)?);
            } else if let Some(rest) = line.strip_prefix("property ") {
                let property = Self::parse_property(rest)?;
                match elements.last_mut() {
                    Some(element) => element.properties.push(property),
                    None => {
                        return Err(Error::InvalidFormat(
                            "Property declared before any element".to_string(),
                        ))
                    }
                }
            }
            // Other directives ("format", "comment", ...) are skipped
        }

        Ok(PlyHeader { elements })
    }

    fn parse_element(rest: &str) -> Result<PlyElement> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(Error::InvalidFormat(format!(
                "Malformed element declaration: {}",
                rest
            )));
        }
        let count = parts[1].parse::<usize>().map_err(|_| {
            Error::InvalidFormat(format!("Invalid element count: {}", parts[1]))
        })?;
        Ok(PlyElement {
            name: parts[0].to_string(),
            count,
            properties: Vec::new(),
        })
    }

    fn parse_property(rest: &str) -> Result<PlyProperty> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(Error::InvalidFormat(format!(
                "Malformed property declaration: {}",
                rest
            )));
        }
        let scalar_type = ScalarType::from_name(parts[0])?;
        Ok(PlyProperty {
            name: parts[1].to_string(),
            scalar_type,
        })
    }

    /// Decode exactly `element.count` data rows into typed columns
    fn read_block<R: BufRead>(reader: &mut R, element: &PlyElement) -> Result<Block> {
        let mut columns: Vec<Column> = element
            .properties
            .iter()
            .map(|property| Column::zeros(property.scalar_type, element.count))
            .collect();

        let mut line = String::new();
        for row in 0..element.count {
            line.clear();
            let bytes_read = reader.read_line(&mut line)?;
            if bytes_read == 0 {
                return Err(Error::RowShape {
                    element: element.name.clone(),
                    row,
                });
            }

            let body = line.trim_end_matches(|c| c == '\r' || c == '\n');
            let values: Vec<&str> = body.split(' ').collect();
            if values.len() != element.properties.len() {
                return Err(Error::RowShape {
                    element: element.name.clone(),
                    row,
                });
            }

            // Tokens map to columns positionally, in declaration order
            for (column, token) in columns.iter_mut().zip(values.iter().copied()) {
                Self::parse_value(column, row, token)?;
            }
        }

        let mut block = Block::new();
        for (property, column) in element.properties.iter().zip(columns) {
            block.insert(property.name.clone(), column);
        }
        Ok(block)
    }

    /// Decode one token against the column's declared type
    fn parse_value(column: &mut Column, row: usize, token: &str) -> Result<()> {
        match column {
            Column::Float(data) => {
                data[row] = token.parse::<f32>().map_err(|_| {
                    Error::InvalidFormat(format!("Invalid float value: {}", token))
                })?;
            }
            Column::Double(data) => {
                data[row] = token.parse::<f64>().map_err(|_| {
                    Error::InvalidFormat(format!("Invalid double value: {}", token))
                })?;
            }
            Column::Int(data) => {
                data[row] = token.parse::<i32>().map_err(|_| {
                    Error::InvalidFormat(format!("Invalid int value: {}", token))
                })?;
            }
        }
        Ok(())
    }
}

/// Writer for ASCII PLY point cloud files
pub struct PlyWriter;

impl PlyWriter {
    /// Write a point cloud as an ASCII PLY file
    pub fn write_ply_file<P: AsRef<Path>>(cloud: &PointCloud, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_ply_data(&mut writer, cloud)
    }

    /// Write ASCII PLY data to a writer
    pub fn write_ply_data<W: Write>(writer: &mut W, cloud: &PointCloud) -> Result<()> {
        writeln!(writer, "ply")?;
        writeln!(writer, "format ascii 1.0")?;
        for (element_name, block) in cloud.blocks() {
            writeln!(writer, "element {} {}", element_name, block.row_count())?;
            for (name, column) in block.iter() {
                writeln!(writer, "property {} {}", column.scalar_type().name(), name)?;
            }
        }
        writeln!(writer, "end_header")?;

        for (_, block) in cloud.blocks() {
            Self::write_block(writer, block)?;
        }
        Ok(())
    }

    fn write_block<W: Write>(writer: &mut W, block: &Block) -> Result<()> {
        let columns: Vec<&Column> = block.iter().map(|(_, column)| column).collect();
        for row in 0..block.row_count() {
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    write!(writer, " ")?;
                }
                match column {
                    Column::Float(data) => write!(writer, "{}", data[row])?,
                    Column::Double(data) => write!(writer, "{}", data[row])?,
                    Column::Int(data) => write!(writer, "{}", data[row])?,
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
