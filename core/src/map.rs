//! Occupancy maps as plain text.
//!
//! The first line holds the placement and size of the grid:
//!
//! ```raw
//! origin_x origin_y width height meters_per_cell
//! ```
//!
//! It is followed by `height` lines of `width` whitespace-separated
//! log-odds values in `[-128, 127]`, starting with row `j = 0`.

use nalgebra::geometry::Point2;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ Error, Result };
use crate::geo::Frame;
use crate::grid::OccupancyGrid;

/// A parsed occupancy map: the occupancy values together with the
/// placement of the grid in the world.
#[derive(Clone, PartialEq, Debug)]
pub struct MapData {
    pub(crate) frame: Frame,
    pub(crate) grid: OccupancyGrid,
}

impl MapData {
    pub fn new(
        origin: Point2<f64>,
        meters_per_cell: f64,
        width: usize,
        height: usize,
        odds: Vec<i8>,
    ) -> Result<MapData> {
        let frame = Frame::new(origin, meters_per_cell)?;
        let grid = OccupancyGrid::new(width, height, odds)?;
        Ok(MapData { frame, grid })
    }

    /// Read and parse a map file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<MapData> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = text.parse::<MapData>()?;
        debug!("Loaded {}x{} map from {:?}", map.width(), map.height(), path);
        Ok(map)
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

impl FromStr for MapData {
    type Err = Error;

    fn from_str(s: &str) -> Result<MapData> {
        let mut lines = s.lines().enumerate().map(|(n, l)| (n + 1, l));

        let (n, header) = lines.next().ok_or_else(|| Error::parse(1, "missing header"))?;
        let fields = header.split_whitespace()
            .map(|t| t.parse::<f64>().map_err(|_| Error::parse(n, format!("invalid number {:?}", t))))
            .collect::<Result<Vec<f64>>>()?;
        if fields.len() != 5 {
            return Err(Error::parse(n, format!("expected 5 header fields, found {}", fields.len())))
        }
        let origin = Point2::new(fields[0], fields[1]);
        let width = dimension(n, "width", fields[2])?;
        let height = dimension(n, "height", fields[3])?;

        let mut odds = Vec::with_capacity(width * height);
        for row in 0 .. height {
            let (n, line) = lines.next()
                .ok_or_else(|| Error::parse(row + 2, format!("missing row {}", row)))?;
            let start = odds.len();
            for t in line.split_whitespace() {
                let v = t.parse::<i8>()
                    .map_err(|_| Error::parse(n, format!("invalid log-odds value {:?}", t)))?;
                odds.push(v);
            }
            let found = odds.len() - start;
            if found != width {
                return Err(Error::parse(n, format!("expected {} values, found {}", width, found)))
            }
        }

        MapData::new(origin, fields[4], width, height, odds)
    }
}

fn dimension(line: usize, name: &str, v: f64) -> Result<usize> {
    if v.fract() == 0. && v >= 1. && v <= f64::from(u32::max_value()) {
        Ok(v as usize)
    } else {
        Err(Error::parse(line, format!("invalid {} {}", name, v)))
    }
}

impl fmt::Display for MapData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.frame.origin();
        writeln!(f, "{} {} {} {} {}",
                 o.x, o.y, self.width(), self.height(), self.frame.meters_per_cell())?;
        for row in self.grid.rows() {
            let vals = row.iter().map(|v| v.to_string()).collect::<Vec<_>>();
            writeln!(f, "{}", vals.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    const SMALL: &str = "\
-1.5 2 3 2 0.05
-120 -120 0
5 -128 127
";

    #[test]
    fn test_parse() {
        let m = SMALL.parse::<MapData>().unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.height(), 2);
        assert_eq!(m.frame().origin(), Point2::new(-1.5, 2.));
        assert_eq!(m.frame().meters_per_cell(), 0.05);
        assert_eq!(m.grid().get(Cell::new(2, 0)), Some(0));
        assert_eq!(m.grid().get(Cell::new(0, 1)), Some(5));
        assert_eq!(m.grid().get(Cell::new(2, 1)), Some(127));
    }

    #[test]
    fn test_render_round_trip() {
        let m = SMALL.parse::<MapData>().unwrap();
        let text = m.to_string();
        assert_eq!(text, "-1.5 2 3 2 0.05\n-120 -120 0\n5 -128 127\n");
        assert_eq!(text.parse::<MapData>().unwrap(), m);
    }

    #[test]
    fn test_integral_float_dimensions() {
        let m = "0 0 2.0 1.0 1\n1 2\n".parse::<MapData>().unwrap();
        assert_eq!((m.width(), m.height()), (2, 1));
    }

    #[test]
    fn test_malformed() {
        let bad = [
            "",
            "0 0 2 1\n1 2\n",
            "0 0 2.5 1 1\n1 2\n",
            "0 0 0 1 1\n",
            "0 0 2 2 1\n1 2\n",
            "0 0 2 1 1\n1\n",
            "0 0 2 1 1\n1 2 3\n",
            "0 0 2 1 1\n1 200\n",
            "0 0 2 1 1\n1 x\n",
            "0 0 2 1 0\n1 2\n",
        ];
        for text in bad.iter() {
            assert!(text.parse::<MapData>().is_err(), "accepted {:?}", text);
        }
        match "0 0 2 2 1\n1 2\n".parse::<MapData>() {
            Err(Error::Parse { line: 3, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match MapData::load("/nonexistent/gridplan/map.txt") {
            Err(Error::Io { .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
