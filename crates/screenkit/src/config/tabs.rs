use std::fmt;
use std::rc::Rc;

use screenkit_core::View;

use crate::CallbackResult;

pub type TabPressCallback = Rc<dyn Fn() -> CallbackResult>;
pub type TabChangeCallback = Rc<dyn Fn(&TabId) -> CallbackResult>;

/// Tab identifier. Text and numeric ids are interchangeable when matching the
/// active tab, see [`TabId::matches`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabId {
    Text(String),
    Number(i64),
}

impl TabId {
    /// Compares the textual forms, so `Number(1)` matches `Text("1")`.
    ///
    /// Two tabs whose ids print the same are indistinguishable here; callers
    /// must keep ids distinct as strings.
    pub fn matches(&self, other: &TabId) -> bool {
        match (self, other) {
            (TabId::Text(a), TabId::Text(b)) => a == b,
            (TabId::Number(a), TabId::Number(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabId::Text(s) => f.write_str(s),
            TabId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for TabId {
    fn from(s: &str) -> Self {
        TabId::Text(s.to_string())
    }
}

impl From<String> for TabId {
    fn from(s: String) -> Self {
        TabId::Text(s)
    }
}

impl From<i64> for TabId {
    fn from(n: i64) -> Self {
        TabId::Number(n)
    }
}

#[derive(Clone, Debug)]
pub enum TabLabel {
    Text(String),
    Custom(View),
}

impl From<&str> for TabLabel {
    fn from(s: &str) -> Self {
        TabLabel::Text(s.to_string())
    }
}

impl From<String> for TabLabel {
    fn from(s: String) -> Self {
        TabLabel::Text(s)
    }
}

impl From<View> for TabLabel {
    fn from(v: View) -> Self {
        TabLabel::Custom(v)
    }
}

#[derive(Clone)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: TabLabel,
    pub icon: Option<View>,
    /// Runs before the top nav's `on_tab_change`.
    pub on_press: Option<TabPressCallback>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<TabId>, label: impl Into<TabLabel>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            on_press: None,
        }
    }
    pub fn icon(mut self, icon: View) -> Self {
        self.icon = Some(icon);
        self
    }
    pub fn on_press(mut self, f: impl Fn() -> CallbackResult + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for TabDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("on_press", &self.on_press.as_ref().map(|_| "..."))
            .finish()
    }
}
