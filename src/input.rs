//! Input normalisation and click hit-testing.
//!
//! Keyboard and pointer input both end up as an [`InputEvent`]. Pointer input
//! goes through a [`ClickMap`] that the renderer refills every frame with the
//! rectangles of everything clickable on screen.

use ratzilla::event::KeyCode;
use ratzilla::ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press. Enter arrives as `'\n'`, Esc as `'q'`, arrows as `'<'`/`'>'`
    /// (left/right) and `'↑'`/`'↓'` (up/down), which no letter shortcut shares.
    Key(char),
    /// A tap on a registered region, carrying its action id.
    Click(u16),
    /// A file chosen in the browser's file dialog.
    File(SelectedFile),
}

/// Metadata of a chosen file. The content is never read.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Size in KB with one decimal, e.g. `"42.5 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size as f64 / 1024.0)
    }
}

/// Map a DOM key code to an input event. Keys the app never uses map to `None`.
pub fn key_event(code: KeyCode) -> Option<InputEvent> {
    let ch = match code {
        KeyCode::Char(c) => c,
        KeyCode::Enter => '\n',
        KeyCode::Esc => 'q',
        KeyCode::Left => '<',
        KeyCode::Right => '>',
        KeyCode::Up => '↑',
        KeyCode::Down => '↓',
        _ => return None,
    };
    Some(InputEvent::Key(ch))
}

#[derive(Debug, Clone, Copy)]
struct Region {
    rect: Rect,
    action_id: u16,
}

/// Clickable regions of the current frame, in terminal cells.
pub struct ClickMap {
    regions: Vec<Region>,
    pub cols: u16,
    pub rows: u16,
}

impl ClickMap {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Start a new frame of the given size.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        self.regions.clear();
        self.cols = cols;
        self.rows = rows;
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn add(&mut self, rect: Rect, action_id: u16) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push(Region { rect, action_id });
        }
    }

    /// Register one full-width row of `area`. Rows outside `area` are ignored.
    pub fn add_row(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y.saturating_add(area.height) {
            self.add(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Register a horizontal tab strip.
    ///
    /// `tabs` holds `(label_width, action_id)` in display order, labels being
    /// separated by `gap` columns. Each tab owns its label plus half of each
    /// neighbouring gap; the first and last tabs stretch to the strip edges.
    pub fn add_tabs(&mut self, tabs: &[(u16, u16)], gap: u16, strip: Rect) {
        if tabs.is_empty() || strip.width == 0 {
            return;
        }

        let mut starts = Vec::with_capacity(tabs.len());
        let mut x = 0u16;
        for (i, &(width, _)) in tabs.iter().enumerate() {
            if i > 0 {
                x += gap;
            }
            starts.push(x);
            x += width;
        }

        let last = tabs.len() - 1;
        for (i, &(width, action_id)) in tabs.iter().enumerate() {
            let left = if i == 0 { 0 } else { starts[i] - gap / 2 - gap % 2 };
            let right = if i == last {
                strip.width
            } else {
                starts[i] + width + gap / 2
            };
            let w = right.min(strip.width).saturating_sub(left);
            self.add(Rect::new(strip.x + left, strip.y, w, strip.height), action_id);
        }
    }

    /// Action under a cell. Later registrations sit on top of earlier ones.
    pub fn hit(&self, col: u16, row: u16) -> Option<u16> {
        self.regions.iter().rev().find_map(|r| {
            let inside = col >= r.rect.x
                && col < r.rect.x + r.rect.width
                && row >= r.rect.y
                && row < r.rect.y + r.rect.height;
            inside.then_some(r.action_id)
        })
    }
}

/// Convert a pixel offset within the grid to a cell index along one axis.
pub fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    (cell < cells).then_some(cell)
}

/// Narrow screens (phones) get stacked layouts and shorter labels.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}
