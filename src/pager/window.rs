// src/pager/window.rs
// =============================================================================
// Computes the page-number strip shown under the repository grid.
//
// Up to five consecutive page numbers, centred on the current page where
// possible, and slid back when the centre is too close to either end:
//
//   total = 20, current = 10   ->   1 ... 8 9 [10] 11 12 ... 20
//   total = 20, current = 2    ->   [2] is in 1 2 3 4 5 ... 20
//   total = 3,  current = 1    ->   [1] 2 3
//
// Shortcuts to the first and last page are added when the window doesn't
// reach them, with an ellipsis when there is a gap.
// =============================================================================

use std::ops::RangeInclusive;

use crate::view::PageItem;

pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    start: u32,
    end: u32,
}

impl PageWindow {
    pub fn around(current: u32, total: u32) -> Self {
        let max = i64::from(MAX_VISIBLE_PAGES);
        let current = i64::from(current);
        let total = i64::from(total);

        let mut start = (current - max / 2).max(1);
        let end = (start + max - 1).min(total);
        if end - start < max - 1 {
            start = (end - max + 1).max(1);
        }

        // Both bounds are within [0, total] here, and total came from a u32.
        Self {
            start: u32::try_from(start).unwrap_or(1),
            end: u32::try_from(end).unwrap_or(0),
        }
    }

    /// Page numbers inside the window; empty when there are no pages.
    pub fn pages(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        self.pages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// The full strip: first-page shortcut, window, last-page shortcut.
pub fn page_strip(current: u32, total: u32) -> Vec<PageItem> {
    let window = PageWindow::around(current, total);
    let mut items = Vec::with_capacity(window.len() + 4);

    if window.is_empty() {
        return items;
    }

    if window.start > 1 {
        items.push(PageItem::page(1, current));
        if window.start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend(window.pages().map(|page| PageItem::page(page, current)));

    if window.end < total {
        if window.end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::page(total, current));
    }

    items
}
