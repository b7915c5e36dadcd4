//! Autocomplete control state.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::scroll::{ScrollConfig, ScrollContainer, ScrollPolicy, ScrollSync};

use super::filter::substring_filter;
use super::item::{KeyFn, OptionKey, SelectOption};

/// Receives proposed selections. `None` means the selection was cleared by typing.
pub type ChangeHandler<T> = Box<dyn FnMut(Option<T>) + Send + Sync>;

/// Receives the raw search text on every edit.
pub type SearchHandler = Box<dyn FnMut(&str) + Send + Sync>;

/// Transient UI state, never visible to the host.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct AutocompleteInner {
    /// Text typed by the user
    pub(super) search_text: String,
    /// Highlighted row (index into filtered)
    pub(super) active_index: usize,
    /// Whether the suggestion panel is shown
    pub(super) open: bool,
}

/// A searchable dropdown over a host-supplied option list.
///
/// # Example
///
/// ```
/// use seekbox::{Autocomplete, Key, SelectOption, State};
///
/// let value: State<Option<u32>> = State::new(None);
/// let sink = value.clone();
///
/// let mut control = Autocomplete::new(
///     [
///         SelectOption::new("Alice", 1),
///         SelectOption::new("Bob", 2),
///         SelectOption::new("Carol", 3),
///     ],
///     |v: &u32| *v,
/// )
/// .on_change(move |v| sink.set(v));
///
/// control.show_suggestions();
/// control.handle_change("a");
/// control.handle_key_down(Key::Down);
/// control.handle_key_down(Key::Enter);
///
/// assert_eq!(value.get(), Some(3));
/// assert_eq!(control.display_text(value.get().as_ref()), "Carol");
/// ```
pub struct Autocomplete<T> {
    options: Vec<SelectOption<T>>,
    bind_key: KeyFn<T>,
    placeholder: String,
    pub(super) inner: AutocompleteInner,
    /// Indices into `options` whose label matches the search text
    pub(super) filtered: Vec<usize>,
    pub(super) scroll: ScrollSync,
    /// Present only while the panel is open
    pub(super) container: Option<ScrollContainer>,
    pub(super) on_change: Option<ChangeHandler<T>>,
    pub(super) on_search_change: Option<SearchHandler>,
}

impl<T: 'static> Autocomplete<T> {
    /// Create a control over `options`, identifying values with `bind_key`.
    pub fn new<K>(
        options: impl IntoIterator<Item = SelectOption<T>>,
        bind_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self
    where
        K: Into<OptionKey> + 'static,
    {
        Self::with_key_fn(options, Arc::new(move |value: &T| bind_key(value).into()))
    }
}

impl<T> Autocomplete<T> {
    /// Create a control with an already boxed key function.
    pub fn with_key_fn(
        options: impl IntoIterator<Item = SelectOption<T>>,
        bind_key: KeyFn<T>,
    ) -> Self {
        let mut control = Self {
            options: options.into_iter().collect(),
            bind_key,
            placeholder: String::new(),
            inner: AutocompleteInner::default(),
            filtered: Vec::new(),
            scroll: ScrollSync::default(),
            container: None,
            on_change: None,
            on_search_change: None,
        };
        control.refilter();
        control.warn_on_duplicate_keys();
        control
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the handler that receives proposed selections.
    pub fn on_change(mut self, handler: impl FnMut(Option<T>) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Set the handler notified of every search text edit.
    pub fn on_search_change(mut self, handler: impl FnMut(&str) + Send + Sync + 'static) -> Self {
        self.on_search_change = Some(Box::new(handler));
        self
    }

    pub fn scroll_config(mut self, config: ScrollConfig) -> Self {
        self.scroll = ScrollSync::new(config, self.scroll.policy());
        self
    }

    pub fn scroll_policy(mut self, policy: ScrollPolicy) -> Self {
        self.scroll = ScrollSync::new(self.scroll.config(), policy);
        self
    }

    // -------------------------------------------------------------------------
    // Options
    // -------------------------------------------------------------------------

    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// Replace the option list. The filtered rows are recomputed.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = SelectOption<T>>) {
        self.options = options.into_iter().collect();
        self.refilter();
        self.warn_on_duplicate_keys();
        log::debug!(
            "Autocomplete::set_options count={} filtered={}",
            self.options.len(),
            self.filtered.len()
        );
    }

    /// Identity of `value` under the control's key function.
    pub fn key_of(&self, value: &T) -> OptionKey {
        (self.bind_key)(value)
    }

    /// Report the first pair of options that share a key.
    pub fn check_keys(&self) -> Result<()> {
        let mut seen: HashMap<OptionKey, usize> = HashMap::with_capacity(self.options.len());
        for (index, option) in self.options.iter().enumerate() {
            let key = self.key_of(option.value());
            if let Some(&first) = seen.get(&key) {
                return Err(Error::DuplicateKey {
                    key,
                    first,
                    second: index,
                });
            }
            seen.insert(key, index);
        }
        Ok(())
    }

    fn warn_on_duplicate_keys(&self) {
        if let Err(err) = self.check_keys() {
            log::warn!("Autocomplete: {}; the first option wins when matching", err);
        }
    }

    // -------------------------------------------------------------------------
    // Transient state
    // -------------------------------------------------------------------------

    pub fn search_text(&self) -> &str {
        &self.inner.search_text
    }

    pub fn active_index(&self) -> usize {
        self.inner.active_index
    }

    pub fn is_open(&self) -> bool {
        self.inner.open
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    /// Current scroll offset of the suggestion list, 0 when it is not mounted.
    pub fn scroll_top(&self) -> u32 {
        self.container.as_ref().map_or(0, ScrollContainer::scroll_top)
    }

    pub fn scroll_container(&self) -> Option<&ScrollContainer> {
        self.container.as_ref()
    }

    pub fn scroll_sync(&self) -> ScrollSync {
        self.scroll
    }

    // -------------------------------------------------------------------------
    // Filtered rows
    // -------------------------------------------------------------------------

    /// Options whose label contains the search text, in list order.
    pub fn filtered(&self) -> impl Iterator<Item = &SelectOption<T>> + '_ {
        self.filtered.iter().filter_map(|&i| self.options.get(i))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_option(&self, filtered_index: usize) -> Option<&SelectOption<T>> {
        self.filtered
            .get(filtered_index)
            .and_then(|&i| self.options.get(i))
    }

    /// Recompute the filtered rows from the options and search text.
    pub(super) fn refilter(&mut self) {
        self.filtered = substring_filter(
            &self.inner.search_text,
            self.options.iter().map(SelectOption::label),
        );
        // Reset cursor if out of bounds
        if self.inner.active_index >= self.filtered.len() {
            self.inner.active_index = 0;
        }
        let content_height = self.scroll.config().content_height(self.filtered.len());
        if let Some(container) = self.container.as_mut() {
            container.set_content_height(content_height);
        }
    }

    // -------------------------------------------------------------------------
    // Selection derived from the host value
    // -------------------------------------------------------------------------

    /// Position in the option list of the option matching `value`.
    pub fn selected_option_index(&self, value: Option<&T>) -> Option<usize> {
        let key = self.key_of(value?);
        self.options
            .iter()
            .position(|option| self.key_of(option.value()) == key)
    }

    /// The option matching `value`, if any.
    pub fn selected_option(&self, value: Option<&T>) -> Option<&SelectOption<T>> {
        self.selected_option_index(value)
            .and_then(|i| self.options.get(i))
    }

    /// Text the input shows: the selected label, else the search text.
    pub fn display_text(&self, value: Option<&T>) -> &str {
        self.selected_option(value)
            .map_or(self.inner.search_text.as_str(), SelectOption::label)
    }
}

impl<T: fmt::Debug> fmt::Debug for Autocomplete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autocomplete")
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("inner", &self.inner)
            .field("filtered", &self.filtered)
            .field("scroll", &self.scroll)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
