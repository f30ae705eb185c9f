//! Drawing document model.
//!
//! The canvas records every user action as a tagged operation. Only `fill`
//! operations feed the toolpath pipeline; pen, line and eraser strokes are
//! carried so a saved drawing round-trips, but nothing downstream reads them.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A freehand or straight stroke, stored as `[x1, y1, x2, y2, ...]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrokeOperation {
    #[serde(default)]
    pub points: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, rename = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// One connected region filled with the bucket tool.
///
/// `image_data` holds the encoded mask (PNG, usually as a base64 data URL).
/// The mask is canvas-sized; `x`, `y`, `width` and `height` describe where
/// it is displayed and do not offset traced coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillOperation {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "imageData")]
    pub image_data: String,
    pub color: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: u32,
    pub height: u32,
}

impl FillOperation {
    pub fn new(image_data: String, color: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            image_data,
            color: color.into(),
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }
}

/// A single recorded canvas action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawingOperation {
    Pen(StrokeOperation),
    Line(StrokeOperation),
    Eraser(StrokeOperation),
    Fill(FillOperation),
}

impl DrawingOperation {
    pub fn as_fill(&self) -> Option<&FillOperation> {
        match self {
            DrawingOperation::Fill(fill) => Some(fill),
            _ => None,
        }
    }
}

/// Ordered list of operations; insertion order is drawing order.
///
/// Saved as `{"operations": [...]}`. A bare array of operations, as the
/// canvas keeps its line list, loads as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "DrawingRepr")]
pub struct Drawing {
    pub operations: Vec<DrawingOperation>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DrawingRepr {
    Operations(Vec<DrawingOperation>),
    Document {
        #[serde(default)]
        operations: Vec<DrawingOperation>,
    },
}

impl From<DrawingRepr> for Drawing {
    fn from(repr: DrawingRepr) -> Self {
        match repr {
            DrawingRepr::Operations(operations) | DrawingRepr::Document { operations } => {
                Self { operations }
            }
        }
    }
}

impl Drawing {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a drawing document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn push(&mut self, op: DrawingOperation) {
        self.operations.push(op);
    }

    /// Fill operations in drawing order.
    pub fn fills(&self) -> impl Iterator<Item = &FillOperation> {
        self.operations.iter().filter_map(DrawingOperation::as_fill)
    }
}
