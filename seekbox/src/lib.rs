//! Searchable dropdown input control.
//!
//! `seekbox` is a headless combobox: it owns the transient UI state of a
//! type-to-filter dropdown (search text, highlighted row, panel visibility,
//! list scroll offset) while the host keeps the selected value. Hosts feed
//! input events into [`Autocomplete`] and draw the [`AutocompleteView`] it
//! produces.

pub mod autocomplete;
pub mod error;
pub mod event;
pub mod geometry;
pub mod outside;
pub mod scroll;
pub mod state;

pub use autocomplete::{
    Autocomplete, AutocompleteView, ChangeHandler, KeyFn, OptionKey, RowView, SearchHandler,
    SelectOption, substring_filter,
};
pub use error::{Error, Result};
pub use event::{EventResult, Key, Modifiers, MouseButton};
pub use geometry::Rect;
pub use outside::{ClickEvent, ClickListeners, Subscription};
pub use scroll::{Direction, ScrollConfig, ScrollContainer, ScrollPolicy, ScrollSync};
pub use state::State;

pub mod prelude {
    pub use crate::autocomplete::{Autocomplete, AutocompleteView, OptionKey, RowView, SelectOption};
    pub use crate::event::{EventResult, Key, Modifiers, MouseButton};
    pub use crate::geometry::Rect;
    pub use crate::outside::{ClickEvent, ClickListeners, Subscription};
    pub use crate::scroll::{ScrollConfig, ScrollPolicy};
    pub use crate::state::State;
}
