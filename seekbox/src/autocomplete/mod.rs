//! Autocomplete control - a text input with substring-filtered suggestions.
//!
//! The control is controlled: the host owns the selected value and passes it
//! into every call that needs it, and the control proposes changes through
//! its `on_change` handler. Search text, the highlighted row, panel
//! visibility and list scrolling are private to the control.

mod events;
mod filter;
mod item;
mod state;
mod view;

pub use filter::substring_filter;
pub use item::{KeyFn, OptionKey, SelectOption};
pub use state::{Autocomplete, ChangeHandler, SearchHandler};
pub use view::{AutocompleteView, RowView};
