//! Host-page abstraction the display engine renders through
use super::Handle;
use crate::feed::models::{NotificationItem, Theme};

/// Where the widget anchors in the host page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Narrow viewports: single item, centered
    Centered,
    /// Wide viewports: stacked, most recent on top
    TopRight,
}

/// Presentation inputs for a single insertion
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub placement: Placement,
    pub show_close_button: bool,
    /// Whether the element gets a click target and pointer cursor
    pub clickable: bool,
    /// Advisory stacking hint. The engine never enforces it.
    pub max_visible: u32,
}

/// One displayed element's lifecycle, as the engine drives it:
/// `insert` places the element in its hidden (zero opacity/offset) state
/// and `reveal` applies the shown state immediately after, so the entry
/// transition runs. `begin_exit` starts the reverse transition; `detach`
/// removes the element once the exit timer elapses. A narrow-mode
/// eviction calls `detach` directly, skipping the exit transition.
pub trait Surface {
    fn insert(&mut self, handle: Handle, item: &NotificationItem, options: &RenderOptions);
    fn reveal(&mut self, handle: Handle);
    fn begin_exit(&mut self, handle: Handle);
    fn detach(&mut self, handle: Handle);
    /// Open a click-through target in a new browsing context
    fn open_url(&mut self, url: &str);
}
