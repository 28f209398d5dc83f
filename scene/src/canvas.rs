use std::ops::{Index, IndexMut};

use colour::Colour;

/// Row major buffer of unclamped pixel colours
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// Black canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::BLACK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Colour {
        self[(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        self[(x, y)] = colour;
    }

    /// Position of a pixel in the row major buffer
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Pixel coordinates of a buffer position
    pub fn coordinates_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Pixels in row major order
    pub fn iter(&self) -> std::slice::Iter<'_, Colour> {
        self.pixels.iter()
    }

    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }
}

impl Index<(usize, usize)> for Canvas {
    type Output = Colour;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.pixels[self.index_of(x, y)]
    }
}

impl IndexMut<(usize, usize)> for Canvas {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        let index = self.index_of(x, y);
        &mut self.pixels[index]
    }
}

impl<'a> IntoIterator for &'a Canvas {
    type Item = &'a Colour;
    type IntoIter = std::slice::Iter<'a, Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
