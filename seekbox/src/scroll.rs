//! Keeps the highlighted row of the suggestion list inside its viewport.
//!
//! The list is a fixed-height viewport over fixed-height rows. Keyboard
//! navigation asks [`ScrollSync`] to adjust the [`ScrollContainer`] offset so
//! the active row stays visible. Two policies exist:
//!
//! - [`ScrollPolicy::Nudge`]: moving down snaps the bottom edge of the target
//!   row flush with the viewport bottom; moving up scrolls back by exactly one
//!   row while the previous row top is less than a viewport height from the
//!   top of the content. Up and down are deliberately asymmetric.
//! - [`ScrollPolicy::EnsureVisible`]: both directions recompute the smallest
//!   absolute offset that shows the target row.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 200;
pub const DEFAULT_ROW_HEIGHT: u32 = 38;

/// Viewport and row sizes, in whatever unit the host renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    viewport_height: u32,
    row_height: u32,
}

impl ScrollConfig {
    pub fn new(viewport_height: u32, row_height: u32) -> Result<Self> {
        if viewport_height == 0 {
            return Err(Error::ZeroViewportHeight);
        }
        if row_height == 0 {
            return Err(Error::ZeroRowHeight);
        }
        Ok(Self {
            viewport_height,
            row_height,
        })
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    /// Total content height of `rows` rows.
    pub fn content_height(&self, rows: usize) -> u32 {
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

/// How keyboard navigation moves the list viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollPolicy {
    #[default]
    Nudge,
    EnsureVisible,
}

/// Direction of a keyboard move through the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A mounted scrollable list.
///
/// Offsets are clamped to `0..=content_height - viewport_height`, the way a
/// scrolling element clamps its scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollContainer {
    scroll_top: u32,
    viewport_height: u32,
    content_height: u32,
}

impl ScrollContainer {
    pub fn new(viewport_height: u32, content_height: u32) -> Self {
        Self {
            scroll_top: 0,
            viewport_height,
            content_height,
        }
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    pub fn max_scroll_top(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn set_scroll_top(&mut self, top: u32) {
        self.scroll_top = top.min(self.max_scroll_top());
    }

    /// Scroll by a signed delta, stopping at either end.
    pub fn scroll_by(&mut self, delta: i64) {
        let top = (i64::from(self.scroll_top) + delta).clamp(0, i64::from(u32::MAX));
        self.set_scroll_top(top as u32);
    }

    /// Update the content height after the row count changed.
    pub fn set_content_height(&mut self, content_height: u32) {
        self.content_height = content_height;
        self.set_scroll_top(self.scroll_top);
    }

    /// Rows at least partially inside the viewport.
    pub fn visible_rows(&self, row_height: u32) -> Range<usize> {
        if row_height == 0 {
            return 0..0;
        }
        let rows = self.content_height.div_ceil(row_height) as usize;
        let start = (self.scroll_top / row_height) as usize;
        let end = self
            .scroll_top
            .saturating_add(self.viewport_height)
            .div_ceil(row_height) as usize;
        start.min(rows)..end.min(rows)
    }
}

/// Applies a [`ScrollPolicy`] to a container as the active row moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSync {
    config: ScrollConfig,
    policy: ScrollPolicy,
}

impl ScrollSync {
    pub fn new(config: ScrollConfig, policy: ScrollPolicy) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> ScrollConfig {
        self.config
    }

    pub fn policy(&self) -> ScrollPolicy {
        self.policy
    }

    /// Mount a container sized for `rows` rows.
    pub fn mount(&self, rows: usize) -> ScrollContainer {
        ScrollContainer::new(self.config.viewport_height, self.config.content_height(rows))
    }

    /// Adjust `container` for a move from row `from` to row `to`.
    ///
    /// Does nothing when the container is not mounted.
    pub fn sync(
        &self,
        container: Option<&mut ScrollContainer>,
        direction: Direction,
        from: usize,
        to: usize,
    ) {
        let Some(container) = container else {
            log::trace!("ScrollSync::sync skipped, no container mounted");
            return;
        };

        let before = container.scroll_top();
        match self.policy {
            ScrollPolicy::Nudge => self.nudge(container, direction, from, to),
            ScrollPolicy::EnsureVisible => self.ensure_visible(container, to),
        }
        log::trace!(
            "ScrollSync::sync {:?} {}->{} scroll_top {}->{}",
            direction,
            from,
            to,
            before,
            container.scroll_top()
        );
    }

    fn nudge(&self, container: &mut ScrollContainer, direction: Direction, from: usize, to: usize) {
        let row = i64::from(self.config.row_height);
        let viewport = i64::from(self.config.viewport_height);
        match direction {
            Direction::Down => {
                let offset = row * (to as i64 + 1) - viewport;
                if offset > 0 {
                    container.set_scroll_top(offset.min(i64::from(u32::MAX)) as u32);
                }
            }
            Direction::Up => {
                let row_top = row * from as i64;
                if row_top < viewport {
                    container.scroll_by(-row);
                }
            }
        }
    }

    fn ensure_visible(&self, container: &mut ScrollContainer, to: usize) {
        let top = self.config.content_height(to);
        let bottom = top.saturating_add(self.config.row_height);
        if top < container.scroll_top() {
            container.set_scroll_top(top);
        } else if bottom > container.scroll_top().saturating_add(self.config.viewport_height) {
            container.set_scroll_top(bottom - self.config.viewport_height);
        }
    }
}
