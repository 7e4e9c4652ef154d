mod app;
mod catalog;
mod config;
mod console;
mod error;
mod input;
mod notice;
mod picker;
mod screens;
mod store;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use ratzilla::event::{MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

use app::App;
use config::AppConfig;
use input::{key_event, pixel_to_cell, ClickMap, InputEvent};
use picker::FilePicker;
use screens::landing::intake::MockExtractor;
use screens::results::StaticMatcher;
use screens::Outcome;
use store::{KeyValueStore, MemoryStore};
use time::FrameClock;

/// Query the grid container's bounding rect and convert a pixel position to a
/// terminal cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, map: &ClickMap) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), map.cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), map.rows)?;
    Some((col, row))
}

/// Session storage in the browser, an in-memory map when it is unavailable
/// (private mode, sandboxed iframes) or off wasm.
fn open_store() -> Box<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    match store::SessionStore::open() {
        Ok(session) => return Box::new(session),
        Err(e) => console::warn(&format!("{e}; skills will not survive a reload")),
    }
    Box::new(MemoryStore::new())
}

fn dispatch(app: &RefCell<App>, picker: &Option<FilePicker>, event: InputEvent) {
    let outcome = app.borrow_mut().handle_input(&event);
    if outcome == Outcome::OpenFilePicker {
        match picker {
            Some(picker) => picker.open(),
            None => console::warn("file input is not available"),
        }
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    let clock = RefCell::new(FrameClock::new(config.ticks_per_sec));
    let app = Rc::new(RefCell::new(App::new(
        config,
        open_store(),
        Box::new(StaticMatcher),
        Box::new(MockExtractor),
    )));
    let click_map = Rc::new(RefCell::new(ClickMap::new()));
    let picker = Rc::new(FilePicker::install());
    if picker.is_none() {
        console::warn("could not attach the file input; resume upload is disabled");
    }

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_map = click_map.clone();
        let picker = picker.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let map = click_map.borrow();
                if map.rows == 0 || map.cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &map)
                    .and_then(|(col, row)| map.hit(col, row))
            };

            if let Some(action_id) = action {
                dispatch(&app, &picker, InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        let picker = picker.clone();
        move |key| {
            if let Some(event) = key_event(key.code) {
                dispatch(&app, &picker, event);
            }
        }
    });

    terminal.draw_web(move |f| {
        if let Some(file) = (*picker).as_ref().and_then(FilePicker::take) {
            dispatch(&app, &picker, InputEvent::File(file));
        }

        let ticks = clock.borrow_mut().update(js_sys::Date::now());
        let mut app = app.borrow_mut();
        app.tick(ticks);

        let size = f.area();
        let mut map = click_map.borrow_mut();
        map.reset(size.width, size.height);
        app.render(f, &mut map);
    });

    Ok(())
}
