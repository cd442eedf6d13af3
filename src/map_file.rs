//! Text map format read by the planner binary.
//!
//! ```text
//! <height> <width>
//! <startX> <startY>
//! <goalX> <goalY>
//! <height*width costs, row-major, row 0 first>
//! ```
//!
//! Tokens are whitespace separated; line breaks carry no meaning.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use anyhow::{Context, Result, bail};
use aurus_navigation::GridPoint;

/// A parsed map file.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFile {
    pub height: usize,
    pub width: usize,
    pub start: GridPoint,
    pub goal: GridPoint,
    /// Row-major, `costs[y * width + x]` is the cell at column `x`, row `y`.
    pub costs: Vec<f64>,
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(token) = self.inner.next() else {
            bail!("unexpected end of map file, expected {what}");
        };
        self.position += 1;
        token
            .parse()
            .map_err(|e| anyhow::anyhow!("token {} ('{token}'): invalid {what}: {e}", self.position))
    }

    fn coordinate(&mut self, what: &str) -> Result<usize> {
        let value: i64 = self.next(what)?;
        if value < 0 {
            bail!("token {}: {what} must not be negative, got {value}", self.position);
        }
        usize::try_from(value).with_context(|| format!("token {}: {what} too large", self.position))
    }

    fn point(&mut self, name: &str) -> Result<GridPoint> {
        let x = self.coordinate(&format!("{name} x"))?;
        let y = self.coordinate(&format!("{name} y"))?;
        Ok(GridPoint::new(x, y))
    }
}

/// Parses the map format. Cost and bounds checks are left to the planner.
pub fn parse(text: &str) -> Result<MapFile> {
    let mut tokens = Tokens::new(text);
    let height = tokens.coordinate("height")?;
    let width = tokens.coordinate("width")?;
    let start = tokens.point("start")?;
    let goal = tokens.point("goal")?;

    let cells = height
        .checked_mul(width)
        .context("map dimensions overflow")?;
    // Grows with the tokens actually present; the header alone is not trusted.
    let mut costs = Vec::new();
    for i in 0..cells {
        let what = format!("cost at row {}, column {}", i / width, i % width);
        costs.push(tokens.next::<f64>(&what)?);
    }

    if let Some(extra) = tokens.inner.next() {
        bail!(
            "token {} ('{extra}'): unexpected data after {cells} cost values",
            tokens.position + 1
        );
    }

    Ok(MapFile {
        height,
        width,
        start,
        goal,
        costs,
    })
}

/// Reads and parses a map file from disk.
pub fn load(path: &Path) -> Result<MapFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map file {}", path.display()))?;
    parse(&text).with_context(|| format!("Failed to parse map file {}", path.display()))
}
