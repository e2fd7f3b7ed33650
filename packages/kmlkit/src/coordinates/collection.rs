//! Ordered point container backing `<coordinates>` elements.

use std::ops::Index;

use crate::config::WriteOptions;
use crate::element::TextContent;
use crate::error::{ModelError, Result};
use crate::point::GeoPoint;

use super::codec;

/// An ordered, mutable sequence of points plus the text it was read from
/// or will be written as.
///
/// Order and duplicates are significant: this is a route or a ring
/// boundary, not a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateCollection {
    points: Vec<GeoPoint>,
    text: String,
}

impl CoordinateCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection holding the given points in order.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
            text: String::new(),
        }
    }

    /// Append a point.
    pub fn add(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.points.contains(point)
    }

    /// Copy all points into `buffer`, starting at `offset`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the points do not fit in the buffer
    /// from `offset` onwards.
    pub fn copy_to(&self, buffer: &mut [GeoPoint], offset: usize) -> Result<()> {
        let end = offset
            .checked_add(self.points.len())
            .filter(|end| *end <= buffer.len())
            .ok_or_else(|| {
                ModelError::InvalidArgument(format!(
                    "buffer of length {} cannot hold {} points at offset {offset}",
                    buffer.len(),
                    self.points.len()
                ))
            })?;
        buffer[offset..end].copy_from_slice(&self.points);
        Ok(())
    }

    /// Remove the first point equal to `point`.
    ///
    /// Returns `true` if a point was removed.
    pub fn remove(&mut self, point: &GeoPoint) -> bool {
        match self.points.iter().position(|p| p == point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GeoPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl TextContent for CoordinateCollection {
    fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer with the cumulative text so far and re-parse it.
    ///
    /// The parse result replaces the whole point list.
    fn set_text(&mut self, accumulated: &str) {
        self.text.clear();
        self.text.push_str(accumulated);
        self.points = codec::parse(&self.text);
    }

    fn before_serialize(&mut self, options: &WriteOptions) {
        self.text = codec::format(&self.points, &options.coordinate_delimiter);
    }
}

impl Index<usize> for CoordinateCollection {
    type Output = GeoPoint;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a CoordinateCollection {
    type Item = &'a GeoPoint;
    type IntoIter = std::slice::Iter<'a, GeoPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<GeoPoint> for CoordinateCollection {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl Extend<GeoPoint> for CoordinateCollection {
    fn extend<I: IntoIterator<Item = GeoPoint>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}
