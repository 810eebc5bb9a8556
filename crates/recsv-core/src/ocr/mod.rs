//! OCR collaborator interface.
//!
//! The OCR engine itself is a black box supplied by the caller; this
//! module defines the fragment model it produces, the engine trait,
//! and a memoizing wrapper for repeated submissions of the same image.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// One OCR-detected text span with a confidence score.
///
/// The geometry is carried through for callers that want it (display,
/// debugging, reading-order sorts) but is unused by the extraction
/// heuristics, which are geometry-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// Recognized text content.
    pub text: String,

    /// Recognition confidence score (0.0 - 1.0).
    pub confidence: f32,

    /// Bounding box corners (x1, y1, x2, y2, x3, y3, x4, y4).
    #[serde(default)]
    pub bbox: [f32; 8],
}

impl TextFragment {
    /// Fragment with no geometry, for text-only inputs.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            bbox: [0.0; 8],
        }
    }

    /// Axis-aligned bounding rectangle (min x, min y, max x, max y).
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        let xs = [self.bbox[0], self.bbox[2], self.bbox[4], self.bbox[6]];
        let ys = [self.bbox[1], self.bbox[3], self.bbox[5], self.bbox[7]];

        let min_x = xs.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_x = xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let min_y = ys.iter().cloned().fold(f32::INFINITY, f32::min);
        let max_y = ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max);

        (min_x, min_y, max_x, max_y)
    }
}

/// Sort fragments into reading order (top-to-bottom, left-to-right),
/// grouping boxes within 20 pixels vertically into one row.
pub fn sort_by_reading_order(fragments: &mut [TextFragment]) {
    fragments.sort_by(|a, b| {
        let (_, ay, _, _) = a.rect();
        let (_, by, _, _) = b.rect();

        let row_a = (ay / 20.0) as i32;
        let row_b = (by / 20.0) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            let (ax, _, _, _) = a.rect();
            let (bx, _, _, _) = b.rect();
            ax.partial_cmp(&bx).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
}

/// Trait for OCR engines.
///
/// An engine with real model-loading cost should be constructed once
/// per process and reused; construction is the only expensive step.
pub trait OcrEngine {
    /// Recognize text fragments in an encoded image.
    fn recognize(&self, image: &[u8]) -> Result<Vec<TextFragment>, OcrError>;
}

/// Wraps an engine with a result cache keyed by exact input byte
/// content, so resubmitting the same image skips recognition.
pub struct MemoizedEngine<E> {
    inner: E,
    cache: Mutex<HashMap<Vec<u8>, Vec<TextFragment>>>,
}

impl<E: OcrEngine> MemoizedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }
}

impl<E: OcrEngine> OcrEngine for MemoizedEngine<E> {
    fn recognize(&self, image: &[u8]) -> Result<Vec<TextFragment>, OcrError> {
        {
            let cache = self
                .cache
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(hit) = cache.get(image) {
                return Ok(hit.clone());
            }
        }

        let fragments = self.inner.recognize(image)?;

        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        cache.insert(image.to_vec(), fragments.clone());
        Ok(fragments)
    }
}
