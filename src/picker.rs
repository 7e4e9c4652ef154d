//! Hidden `<input type="file">` behind the "Browse Files" control.
//!
//! The terminal grid cannot host a native file dialog, so a hidden input is
//! appended to the page and clicked programmatically. Its change handler
//! parks the chosen file until the next frame picks it up.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::input::SelectedFile;
use crate::screens::landing::intake::ACCEPTED_MIME_TYPES;

pub struct FilePicker {
    input: HtmlInputElement,
    pending: Rc<RefCell<Option<SelectedFile>>>,
    // Kept alive for as long as the listener is registered.
    _on_change: Closure<dyn FnMut(Event)>,
}

impl FilePicker {
    /// `None` when the page has no document body to attach to.
    pub fn install() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let input: HtmlInputElement = document.create_element("input").ok()?.dyn_into().ok()?;
        input.set_type("file");
        input.set_accept(&format!(".pdf,.docx,{}", ACCEPTED_MIME_TYPES.join(",")));
        input.set_hidden(true);
        document.body()?.append_child(&input).ok()?;

        let pending = Rc::new(RefCell::new(None));
        let on_change = Closure::<dyn FnMut(Event)>::new({
            let pending = pending.clone();
            let input = input.clone();
            move |_: Event| {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    *pending.borrow_mut() =
                        Some(SelectedFile::new(file.name(), file.type_(), file.size() as u64));
                }
                // Choosing the same file twice must fire `change` again.
                input.set_value("");
            }
        });
        input
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            input,
            pending,
            _on_change: on_change,
        })
    }

    pub fn open(&self) {
        self.input.click();
    }

    /// The file chosen since the last call, if any.
    pub fn take(&self) -> Option<SelectedFile> {
        self.pending.borrow_mut().take()
    }
}
