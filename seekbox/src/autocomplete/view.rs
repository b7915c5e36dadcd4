//! Rendering surface for the Autocomplete control.
//!
//! The control does not draw. It describes what to draw; hosts map the flags
//! to their own styling.

use std::ops::Range;

use super::item::OptionKey;
use super::Autocomplete;

/// One suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    /// Position in the filtered rows; pass this to `handle_option_click`.
    pub index: usize,
    pub label: &'a str,
    /// Rendering identity of the row.
    pub key: OptionKey,
    /// Keyboard highlight.
    pub active: bool,
    /// Matches the host value.
    pub selected: bool,
}

/// Everything a host needs to draw the control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteView<'a> {
    /// Input text: the selected label, else the search text.
    pub text: &'a str,
    pub placeholder: &'a str,
    /// The input is empty and the placeholder should be drawn instead.
    pub showing_placeholder: bool,
    pub open: bool,
    /// Every filtered row while open, empty otherwise.
    pub rows: Vec<RowView<'a>>,
    /// Rows inside the list viewport.
    pub visible: Range<usize>,
    /// Open with nothing matching the search text.
    pub no_results: bool,
    pub scroll_top: u32,
}

impl<T: Clone> Autocomplete<T> {
    /// Describe the control for the current host `value`.
    pub fn view(&self, value: Option<&T>) -> AutocompleteView<'_> {
        let text = self.display_text(value);
        let open = self.is_open();
        let selected_key = value.map(|v| self.key_of(v));

        let rows = if open {
            self.filtered()
                .enumerate()
                .map(|(index, option)| {
                    let key = self.key_of(option.value());
                    RowView {
                        index,
                        label: option.label(),
                        active: index == self.active_index(),
                        selected: selected_key.as_ref() == Some(&key),
                        key,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let visible = self
            .scroll_container()
            .map_or(0..0, |c| c.visible_rows(self.scroll_sync().config().row_height()));

        AutocompleteView {
            text,
            placeholder: self.placeholder_text(),
            showing_placeholder: text.is_empty(),
            open,
            no_results: open && rows.is_empty(),
            rows,
            visible,
            scroll_top: self.scroll_top(),
        }
    }
}
