mod boot_screen;
mod main_content;

pub use boot_screen::BootScreen;
pub use boot_screen::collapsed_rows;
pub use boot_screen::content_width;
pub use boot_screen::ease_out_cubic;
pub use main_content::MainContent;

use ratatui::layout::Rect;

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
