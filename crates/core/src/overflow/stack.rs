use super::measure::{OverflowLayout, ResizableLayout};

/// A vertical stack of item boxes with an overflow indicator below them,
/// measured in abstract height units (pixels, terminal rows).
///
/// Content height counts the visible items, one gap between each pair of
/// visible boxes, and the indicator while it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackLayout {
    item_heights: Vec<u32>,
    item_visible: Vec<bool>,
    gap: u32,
    indicator_height: u32,
    indicator_visible: bool,
    available_height: u32,
}

impl StackLayout {
    /// Creates a stack of items with the given heights, all visible.
    pub fn new(item_heights: Vec<u32>, available_height: u32) -> Self {
        let item_visible = vec![true; item_heights.len()];
        Self {
            item_heights,
            item_visible,
            gap: 0,
            indicator_height: 1,
            indicator_visible: false,
            available_height,
        }
    }

    /// Creates a stack of `count` items of the same height.
    pub fn uniform(count: usize, item_height: u32, available_height: u32) -> Self {
        Self::new(vec![item_height; count], available_height)
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_indicator_height(mut self, height: u32) -> Self {
        self.indicator_height = height;
        self
    }

    pub fn is_item_visible(&self, index: usize) -> bool {
        self.item_visible.get(index).copied().unwrap_or(false)
    }

    pub fn is_indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    pub fn visible_count(&self) -> usize {
        self.item_visible.iter().filter(|visible| **visible).count()
    }
}

impl OverflowLayout for StackLayout {
    fn item_count(&self) -> usize {
        self.item_heights.len()
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.item_visible.get_mut(index) {
            *slot = visible;
        }
    }

    fn set_indicator_visible(&mut self, visible: bool) {
        self.indicator_visible = visible;
    }

    fn content_height(&self) -> u32 {
        let mut boxes = self
            .item_heights
            .iter()
            .zip(&self.item_visible)
            .filter(|(_, visible)| **visible)
            .map(|(height, _)| *height)
            .collect::<Vec<_>>();
        if self.indicator_visible {
            boxes.push(self.indicator_height);
        }

        let gaps = boxes.len().saturating_sub(1) as u32;
        boxes.iter().sum::<u32>() + gaps * self.gap
    }

    fn available_height(&self) -> u32 {
        self.available_height
    }
}

impl ResizableLayout for StackLayout {
    fn resize(&mut self, available_height: u32) {
        self.available_height = available_height;
    }
}
