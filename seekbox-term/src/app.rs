//! The demo host: owns the selected value and drives the control.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use seekbox::{
    Autocomplete, ClickEvent, ClickListeners, Key, Modifiers, Rect, SelectOption, State,
    Subscription,
};
use serde_json::Value;

use crate::error::AppError;
use crate::options::value_key;
use crate::render::{self, ControlLayout};
use crate::settings::Settings;
use crate::terminal::TerminalGuard;

pub struct App {
    /// Canonical selection, written only by the control's change handler.
    value: State<Option<Value>>,
    control: State<Autocomplete<Value>>,
    listeners: ClickListeners,
    /// Screen area of the control, read by the outside-click subscription.
    bounds: State<Rect>,
    layout: ControlLayout,
    width: u16,
    viewport_rows: u16,
    _click_outside: Subscription,
}

impl App {
    pub fn new(options: Vec<SelectOption<Value>>, settings: &Settings) -> Result<Self, AppError> {
        let value = State::new(Some(Value::from(1)));

        let sink = value.clone();
        let control = Autocomplete::new(options, value_key)
            .placeholder(settings.placeholder.clone())
            .scroll_config(settings.scroll_config()?)
            .scroll_policy(settings.scroll_policy)
            .on_change(move |selected| {
                log::info!("value changed to {:?}", selected);
                sink.set(selected);
            })
            .on_search_change(|text| log::info!("search text changed to {:?}", text));
        let control = State::new(control);

        let listeners = ClickListeners::new();
        let bounds = State::new(Rect::default());
        let click_outside = Autocomplete::bind_click_outside(&control, &listeners, bounds.clone());

        Ok(Self {
            value,
            control,
            listeners,
            bounds,
            layout: ControlLayout::default(),
            width: settings.width.max(8),
            viewport_rows: settings.viewport_rows,
            _click_outside: click_outside,
        })
    }

    pub fn run(&mut self, terminal: &mut TerminalGuard) -> Result<(), AppError> {
        log::debug!("App::run size={:?}", terminal.size()?);
        self.draw(terminal)?;

        loop {
            let redraw = match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_quit(&key) {
                        log::debug!("App::run quit");
                        return Ok(());
                    }
                    self.handle_key(key);
                    false
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse(mouse);
                    false
                }
                Event::Resize(width, height) => {
                    log::debug!("App::run resize {}x{}", width, height);
                    true
                }
                _ => false,
            };

            let dirty = self.control.take_dirty() | self.value.take_dirty();
            if redraw || dirty {
                self.draw(terminal)?;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Clone first: the change handler writes `value` while the control is borrowed.
        let value = self.value.get();
        let result = self.control.update(|c| {
            c.on_key(Key::from(key.code), Modifiers::from(key.modifiers), value.as_ref())
        });
        if result.is_consumed() {
            log::trace!("App::handle_key {:?} consumed", key.code);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(button) = mouse.kind else {
            return;
        };
        let (x, y) = (mouse.column, mouse.row);

        if self.layout.input.contains(x, y) {
            self.control.update(|c| c.show_suggestions());
        } else {
            let scroll_top = self.control.with(|c| c.scroll_top());
            if let Some(row) = self.layout.row_at(x, y, scroll_top) {
                self.control.update(|c| c.handle_option_click(row));
            }
        }

        // Global listeners see every click after the element itself, like a
        // document-level handler. Row clicks fall outside the input, so they
        // close the panel here.
        let fired = self.listeners.dispatch(ClickEvent::new(x, y, button.into()));
        log::trace!("App::handle_mouse ({}, {}) outside listeners fired={}", x, y, fired);
    }

    fn draw(&mut self, terminal: &mut TerminalGuard) -> Result<(), AppError> {
        let value = self.value.get();
        let shown = value.as_ref().map_or_else(|| "-".to_string(), Value::to_string);

        let layout = self.control.with(|c| {
            let view = c.view(value.as_ref());
            let layout = ControlLayout::new(self.width, self.viewport_rows, &view);
            render::draw(terminal.stdout(), &layout, &view, &shown).map(|()| layout)
        })?;

        self.layout = layout;
        self.bounds.set(layout.click_boundary());
        Ok(())
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
}
