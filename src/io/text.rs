//! Plain-text graph and distance files
//!
//! Graph file: a header line `"<vertices> <edges>"` followed by one
//! `"from to weight"` line per edge. Distance file: a single line of
//! space-separated distances indexed by vertex, with `-1` marking vertices
//! unreachable from the source.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::io::{DistanceSink, GraphSource};
use crate::{Error, Result};

/// Writes an edge list to `path` in the text graph format, streaming through
/// a buffered writer.
pub fn write_edge_list(
    path: impl AsRef<Path>,
    vertices: usize,
    edges: &[(usize, usize, u64)],
) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{} {}", vertices, edges.len())?;
    for &(from, to, weight) in edges {
        writeln!(out, "{} {} {}", from, to, weight)?;
    }
    out.flush()?;
    Ok(())
}

/// Graph source reading the text graph format from a file
#[derive(Debug)]
pub struct TextGraphFile {
    path: PathBuf,
}

impl TextGraphFile {
    /// Creates a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextGraphFile { path: path.into() }
    }
}

impl GraphSource for TextGraphFile {
    fn load(&mut self) -> Result<(usize, Vec<(usize, usize, u64)>)> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| Error::MalformedInput("missing header line".into()))??;
        let mut fields = header.split_whitespace();
        let vertices = parse_index(fields.next(), "vertex count", 1)?;
        let edge_count = parse_index(fields.next(), "edge count", 1)?;

        let mut edges = Vec::with_capacity(edge_count);
        for i in 0..edge_count {
            let line_no = i + 2;
            let line = lines.next().ok_or_else(|| {
                Error::MalformedInput(format!(
                    "header declares {} edges but the file ends after {}",
                    edge_count, i
                ))
            })??;
            let mut fields = line.split_whitespace();
            let from = parse_index(fields.next(), "source vertex", line_no)?;
            let to = parse_index(fields.next(), "target vertex", line_no)?;
            let weight = parse_weight(fields.next(), line_no)?;
            edges.push((from, to, weight));
        }

        Ok((vertices, edges))
    }
}

/// Distance sink writing the text distance format to a file
#[derive(Debug)]
pub struct TextDistanceFile {
    path: PathBuf,
}

impl TextDistanceFile {
    /// Creates a sink writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextDistanceFile { path: path.into() }
    }
}

impl DistanceSink for TextDistanceFile {
    fn publish(&mut self, distances: &[Option<u64>]) -> Result<()> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        for (vertex, distance) in distances.iter().enumerate() {
            if vertex > 0 {
                write!(out, " ")?;
            }
            match distance {
                Some(distance) => write!(out, "{}", distance)?,
                None => write!(out, "-1")?,
            }
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

fn parse_index(field: Option<&str>, what: &str, line_no: usize) -> Result<usize> {
    let raw = field
        .ok_or_else(|| Error::MalformedInput(format!("line {}: missing {}", line_no, what)))?;
    raw.parse().map_err(|_| {
        Error::MalformedInput(format!("line {}: unparseable {} '{}'", line_no, what, raw))
    })
}

fn parse_weight(field: Option<&str>, line_no: usize) -> Result<u64> {
    let raw = field
        .ok_or_else(|| Error::MalformedInput(format!("line {}: missing weight", line_no)))?;
    let value: i64 = raw.parse().map_err(|_| {
        Error::MalformedInput(format!("line {}: unparseable weight '{}'", line_no, raw))
    })?;
    if value < 0 {
        return Err(Error::NegativeWeight(value));
    }
    Ok(value as u64)
}
