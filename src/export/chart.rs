//! Chart-series data sink
//!
//! Rendering is out of scope for the core: this module reshapes a panel
//! table into ordered per-key series and hands them to a [`SeriesSink`],
//! so any plotting backend can be substituted. The bundled [`JsonSink`]
//! serializes series for an external frontend.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::metrics::index_series;
use crate::models::PanelTable;

/// One (x, y) point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// X value (year)
    pub x: i32,
    /// Y value
    pub y: f64,
}

/// An ordered series of points under one label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Series label (job category or age band)
    pub label: String,
    /// Points ascending by year
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Pivot a panel table into one series per key, ascending by year
    pub fn from_table<T: PanelTable>(table: &T) -> Result<Vec<Self>> {
        let years = table.years();

        table
            .keys()
            .iter()
            .map(|key| {
                let points = years
                    .iter()
                    .map(|&year| {
                        table.value(year, key).map(|value| ChartPoint {
                            x: year,
                            y: value as f64,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Self {
                    label: key.clone(),
                    points,
                })
            })
            .collect()
    }

    /// Index-normalized copy of this series (first point = 100)
    pub fn indexed(&self) -> Result<Self> {
        let values: Vec<f64> = self.points.iter().map(|p| p.y).collect();
        let indexed = index_series(&values)?;

        Ok(Self {
            label: self.label.clone(),
            points: self
                .points
                .iter()
                .zip(indexed)
                .map(|(p, y)| ChartPoint { x: p.x, y })
                .collect(),
        })
    }
}

/// Destination for chart series; implementations render or persist them
pub trait SeriesSink {
    /// Consume an ordered set of series
    fn write_series(&mut self, series: &[ChartSeries]) -> Result<()>;
}

/// Sink that serializes series as JSON for an external renderer
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    /// Create a sink writing to the given writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SeriesSink for JsonSink<W> {
    fn write_series(&mut self, series: &[ChartSeries]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, series)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
