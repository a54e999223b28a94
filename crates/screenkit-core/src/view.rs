use crate::{Color, Modifier, Size};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type ScrollCallback = Rc<dyn Fn(f32)>;
pub type SizeCallback = Rc<dyn Fn(Size)>;

/// Foreground style of the system status bar icons and text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarContentStyle {
    #[default]
    Default,
    /// Light glyphs, for dark backgrounds.
    LightContent,
    /// Dark glyphs, for light backgrounds.
    DarkContent,
}

/// Request for the host's native status bar API.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemBarRequest {
    pub hidden: bool,
    pub translucent: bool,
    pub background: Color,
    pub content_style: BarContentStyle,
    pub animated: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

#[derive(Clone)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Stack,
    Scroll {
        horizontal: bool,
        shows_indicator: bool,
        /// Minimum interval between scroll events, in milliseconds.
        throttle_ms: u32,
        on_scroll: Option<ScrollCallback>,
        on_content_size: Option<SizeCallback>,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        weight: FontWeight,
    },
    Pressable {
        on_press: Option<Callback>,
        on_long_press: Option<Callback>,
        on_press_in: Option<Callback>,
        on_press_out: Option<Callback>,
        disabled: bool,
    },
    /// Not drawn; applied by the host to the native status bar.
    SystemBar(SystemBarRequest),
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Stack => write!(f, "Stack"),
            ViewKind::Scroll {
                horizontal,
                shows_indicator,
                throttle_ms,
                ..
            } => f
                .debug_struct("Scroll")
                .field("horizontal", horizontal)
                .field("shows_indicator", shows_indicator)
                .field("throttle_ms", throttle_ms)
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                weight,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("weight", weight)
                .finish(),
            ViewKind::Pressable {
                on_press,
                on_long_press,
                disabled,
                ..
            } => f
                .debug_struct("Pressable")
                .field("on_press", &on_press.as_ref().map(|_| "<callback>"))
                .field("on_long_press", &on_long_press.as_ref().map(|_| "<callback>"))
                .field("disabled", disabled)
                .finish(),
            ViewKind::SystemBar(req) => f.debug_tuple("SystemBar").field(req).finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Depth-first, parent before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        if self.modifier.test_tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    pub fn find_all(&self, pred: impl Fn(&View) -> bool) -> Vec<&View> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if pred(v) {
                out.push(v);
            }
        });
        out
    }

    pub fn system_bar_requests(&self) -> Vec<SystemBarRequest> {
        let mut out = Vec::new();
        self.walk(&mut |v| {
            if let ViewKind::SystemBar(req) = &v.kind {
                out.push(*req);
            }
        });
        out
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
