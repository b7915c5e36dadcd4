//! Event handling for the Autocomplete control.

use crate::event::{EventResult, Key, Modifiers};
use crate::geometry::Rect;
use crate::outside::{ClickListeners, Subscription};
use crate::scroll::Direction;
use crate::state::State;

use super::Autocomplete;

impl<T: Clone> Autocomplete<T> {
    /// Focus or click on the input: show the suggestion panel.
    ///
    /// Search text and the highlighted row are left alone.
    pub fn show_suggestions(&mut self) -> EventResult {
        if !self.inner.open {
            self.inner.open = true;
            self.container = Some(self.scroll.mount(self.filtered.len()));
            log::debug!(
                "Autocomplete::show_suggestions filtered={} active={}",
                self.filtered.len(),
                self.inner.active_index
            );
        }
        EventResult::Consumed
    }

    /// The input text changed to `text`.
    ///
    /// Resets the highlight to the first row, refilters, notifies the search
    /// handler, then proposes clearing the selection so the input falls back
    /// to showing the typed text.
    pub fn handle_change(&mut self, text: impl Into<String>) -> EventResult {
        self.inner.search_text = text.into();
        self.inner.active_index = 0;
        self.refilter();
        log::debug!(
            "Autocomplete::handle_change text={:?} filtered={}",
            self.inner.search_text,
            self.filtered.len()
        );

        if let Some(handler) = self.on_search_change.as_mut() {
            handler(&self.inner.search_text);
        }
        self.emit_change(None);
        EventResult::Consumed
    }

    /// Enter, Up and Down while the panel is open.
    pub fn handle_key_down(&mut self, key: Key) -> EventResult {
        if !self.inner.open {
            return EventResult::Ignored;
        }
        match key {
            Key::Enter => self.select_active(),
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            _ => EventResult::Ignored,
        }
    }

    /// A suggestion row was clicked. `index` is its position in the filtered rows.
    ///
    /// The panel stays open; clicks inside the control are not outside clicks.
    pub fn handle_option_click(&mut self, index: usize) -> EventResult {
        let Some(value) = self.filtered_option(index).map(|o| o.value().clone()) else {
            log::debug!(
                "Autocomplete::handle_option_click ignored index={} filtered={}",
                index,
                self.filtered.len()
            );
            return EventResult::Ignored;
        };
        self.inner.active_index = index;
        log::debug!("Autocomplete::handle_option_click index={}", index);
        self.emit_change(Some(value));
        EventResult::Consumed
    }

    /// A click landed outside the control: hide the panel.
    pub fn handle_click_outside(&mut self) -> EventResult {
        if !self.inner.open {
            return EventResult::Ignored;
        }
        self.close();
        log::debug!("Autocomplete::handle_click_outside");
        EventResult::Consumed
    }

    /// Text-field emulation for hosts without a native input element.
    ///
    /// Printable characters and Backspace edit the text the input currently
    /// displays (the selected label or the search text) and open the panel;
    /// Enter, Up and Down go to [`handle_key_down`](Self::handle_key_down);
    /// Escape hides the panel. Shortcuts with Ctrl or Alt are ignored.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers, value: Option<&T>) -> EventResult {
        if modifiers.is_command() {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                let mut text = self.display_text(value).to_string();
                text.push(c);
                self.show_suggestions();
                self.handle_change(text)
            }
            Key::Backspace => {
                let mut text = self.display_text(value).to_string();
                if text.pop().is_none() {
                    return EventResult::Ignored;
                }
                self.show_suggestions();
                self.handle_change(text)
            }
            Key::Escape if self.inner.open => {
                self.close();
                EventResult::Consumed
            }
            Key::Enter | Key::Up | Key::Down => self.handle_key_down(key),
            _ => EventResult::Ignored,
        }
    }

    /// Confirm the highlighted row.
    ///
    /// The highlight indexes the filtered rows, so the confirmed value is the
    /// one the user sees highlighted even while a filter is active.
    fn select_active(&mut self) -> EventResult {
        let index = self.inner.active_index;
        let Some(value) = self.filtered_option(index).map(|o| o.value().clone()) else {
            log::debug!(
                "Autocomplete::select_active ignored index={} filtered={}",
                index,
                self.filtered.len()
            );
            return EventResult::Ignored;
        };
        self.close();
        log::debug!("Autocomplete::select_active index={}", index);
        self.emit_change(Some(value));
        EventResult::Consumed
    }

    /// Move the highlight down, stopping at the last row.
    fn move_down(&mut self) -> EventResult {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            return EventResult::Ignored;
        };
        let from = self.inner.active_index;
        let to = if from < last { from + 1 } else { last };
        self.scroll
            .sync(self.container.as_mut(), Direction::Down, from, to);
        self.inner.active_index = to;
        EventResult::Consumed
    }

    /// Move the highlight up, wrapping from the first row to the last.
    fn move_up(&mut self) -> EventResult {
        let Some(last) = self.filtered.len().checked_sub(1) else {
            return EventResult::Ignored;
        };
        let from = self.inner.active_index;
        let to = if from > 0 { from - 1 } else { last };
        self.scroll
            .sync(self.container.as_mut(), Direction::Up, from, to);
        self.inner.active_index = to;
        EventResult::Consumed
    }

    fn close(&mut self) {
        self.inner.open = false;
        self.container = None;
    }

    fn emit_change(&mut self, value: Option<T>) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(value);
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Autocomplete<T> {
    /// Subscribe `control` to outside clicks.
    ///
    /// Clicks outside `boundary` hide the panel. The host keeps `boundary`
    /// current as the control is laid out, and must not hold `control`
    /// borrowed while dispatching clicks. The listener is removed when the
    /// returned guard is dropped.
    pub fn bind_click_outside(
        control: &State<Self>,
        listeners: &ClickListeners,
        boundary: State<Rect>,
    ) -> Subscription {
        let control = control.clone();
        listeners.subscribe(
            move |x, y| boundary.with(|rect| rect.contains(x, y)),
            move |_click| {
                control.update(|c| c.handle_click_outside());
            },
        )
    }
}
