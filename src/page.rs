//! Host page abstraction layer.

pub const FOCUS_WORD: &str = "focus-word";
pub const FOCUS_TAGLINE: &str = "focus-tagline";
pub const BLINK_BTN: &str = "blink-btn";
pub const DATE_LABEL: &str = "date-label";
pub const BLINK_COUNT: &str = "blink-count";

/// Whether the host's structural content is ready to be bound to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReadyState {
    Loading,
    Ready,
}

/// Document seam supplied by the host. Elements are addressed by id.
pub trait HostPage {
    fn ready_state(&self) -> ReadyState;
    fn has_element(&self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str);
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);
    /// Forces a layout read on the element, so a class removed and re-added
    /// in the same turn restarts its animation.
    fn force_layout(&mut self, id: &str);
    fn inject_style(&mut self, css: &str);
    /// Routes the element's activation to the widget's advance action.
    fn bind_click(&mut self, id: &str);
}
