//! Draws the host screen and the control with crossterm.

use std::io::{self, Write};

use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::{cursor, queue, terminal};
use seekbox::{AutocompleteView, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MARGIN_X: u16 = 2;
const TITLE_Y: u16 = 0;
const VALUE_Y: u16 = 2;
const INPUT_Y: u16 = 4;
const NO_SUGGESTIONS: &str = "No suggestions!";

/// Screen areas of the control, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlLayout {
    pub input: Rect,
    /// Empty while the panel is hidden.
    pub panel: Rect,
}

impl ControlLayout {
    pub fn new(width: u16, viewport_rows: u16, view: &AutocompleteView<'_>) -> Self {
        let input = Rect::new(MARGIN_X, INPUT_Y, width, 1);
        let panel_height = if !view.open {
            0
        } else if view.no_results {
            1
        } else {
            viewport_rows.min(u16::try_from(view.rows.len()).unwrap_or(u16::MAX))
        };
        let panel = Rect::new(MARGIN_X, INPUT_Y + 1, width, panel_height);
        Self { input, panel }
    }

    /// Area a click can land on without counting as outside. Only the input:
    /// a click on a row selects it and then closes the panel as an outside click.
    pub fn click_boundary(&self) -> Rect {
        self.input
    }

    /// Filtered row under a click inside the panel.
    pub fn row_at(&self, x: u16, y: u16, scroll_top: u32) -> Option<usize> {
        if !self.panel.contains(x, y) {
            return None;
        }
        Some(scroll_top as usize + usize::from(y - self.panel.y))
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Draw one frame.
pub fn draw<W: Write>(
    out: &mut W,
    layout: &ControlLayout,
    view: &AutocompleteView<'_>,
    value: &str,
) -> io::Result<()> {
    queue!(
        out,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(MARGIN_X, TITLE_Y),
        SetAttribute(Attribute::Bold),
        Print("seekbox"),
        SetAttribute(Attribute::Reset),
        Print("  type to search, Up/Down to move, Enter to select, Ctrl+Q to quit"),
        cursor::MoveTo(MARGIN_X, VALUE_Y),
        Print(format!("Selected: {}", value)),
    )?;

    draw_input(out, layout, view)?;
    if view.open {
        draw_panel(out, layout, view)?;
    }

    let text_width = u16::try_from(view.text.width()).unwrap_or(u16::MAX);
    let cursor_x = (layout.input.x + 2).saturating_add(text_width);
    queue!(
        out,
        cursor::MoveTo(cursor_x.min(layout.input.right().saturating_sub(3)), layout.input.y),
        cursor::Show
    )?;
    out.flush()
}

fn draw_input<W: Write>(
    out: &mut W,
    layout: &ControlLayout,
    view: &AutocompleteView<'_>,
) -> io::Result<()> {
    let inner = usize::from(layout.input.width).saturating_sub(4);
    let arrow = if view.open { "▴" } else { "▾" };

    queue!(out, cursor::MoveTo(layout.input.x, layout.input.y), Print("> "))?;
    if view.showing_placeholder {
        queue!(
            out,
            SetAttribute(Attribute::Dim),
            Print(pad_to_width(view.placeholder, inner)),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        queue!(out, Print(pad_to_width(view.text, inner)))?;
    }
    queue!(out, Print(" "), Print(arrow))
}

fn draw_panel<W: Write>(
    out: &mut W,
    layout: &ControlLayout,
    view: &AutocompleteView<'_>,
) -> io::Result<()> {
    let width = usize::from(layout.panel.width);

    if view.no_results {
        return queue!(
            out,
            cursor::MoveTo(layout.panel.x, layout.panel.y),
            SetAttribute(Attribute::Italic),
            Print(pad_to_width(NO_SUGGESTIONS, width)),
            SetAttribute(Attribute::Reset),
        );
    }

    let rows = view.rows.get(view.visible.clone()).unwrap_or_default();
    for (offset, row) in rows.iter().enumerate().take(usize::from(layout.panel.height)) {
        let y = layout.panel.y + offset as u16;
        queue!(out, cursor::MoveTo(layout.panel.x, y))?;
        if row.active {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        if row.selected {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        let marker = if row.selected { "* " } else { "  " };
        queue!(
            out,
            Print(pad_to_width(&format!("{}{}", marker, row.label), width)),
            SetAttribute(Attribute::Reset),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("日本", 5), "日本 ");
    }

    #[test]
    fn test_row_at_accounts_for_scroll() {
        let layout = ControlLayout {
            input: Rect::new(2, 4, 20, 1),
            panel: Rect::new(2, 5, 20, 6),
        };
        assert_eq!(layout.row_at(3, 5, 0), Some(0));
        assert_eq!(layout.row_at(3, 7, 4), Some(6));
        assert_eq!(layout.row_at(3, 4, 0), None);
        assert_eq!(layout.row_at(30, 6, 0), None);
    }

    #[test]
    fn test_click_boundary_is_input_only() {
        let layout = ControlLayout {
            input: Rect::new(2, 4, 20, 1),
            panel: Rect::new(2, 5, 20, 6),
        };
        let boundary = layout.click_boundary();
        assert_eq!(boundary, layout.input);
        assert!(boundary.contains(3, 4));
        assert!(layout.row_at(3, 6, 0).is_some());
        assert!(!boundary.contains(3, 6));
    }
}
