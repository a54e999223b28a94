//! View constructors the scaffold is assembled from.

use std::rc::Rc;

use screenkit_core::*;

use crate::TextStyle;

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

/// Children are layered on top of each other.
pub fn Stack(modifier: Modifier) -> View {
    View::new(0, ViewKind::Stack).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::BLACK,
            font_size: 16.0,
            weight: FontWeight::Normal,
        },
    )
}

#[derive(Clone, Default)]
pub struct PressHandlers {
    pub on_press: Option<Callback>,
    pub on_long_press: Option<Callback>,
    pub on_press_in: Option<Callback>,
    pub on_press_out: Option<Callback>,
    pub disabled: bool,
}

impl PressHandlers {
    pub fn on_press(f: impl Fn() + 'static) -> Self {
        Self {
            on_press: Some(Rc::new(f)),
            ..Self::default()
        }
    }
}

pub fn Pressable(modifier: Modifier, handlers: PressHandlers) -> View {
    View::new(
        0,
        ViewKind::Pressable {
            on_press: handlers.on_press,
            on_long_press: handlers.on_long_press,
            on_press_in: handlers.on_press_in,
            on_press_out: handlers.on_press_out,
            disabled: handlers.disabled,
        },
    )
    .modifier(modifier)
}

#[derive(Clone, Default)]
pub struct ScrollProps {
    pub horizontal: bool,
    pub shows_indicator: bool,
    pub throttle_ms: u32,
    pub on_scroll: Option<ScrollCallback>,
    pub on_content_size: Option<SizeCallback>,
}

pub fn ScrollView(modifier: Modifier, props: ScrollProps) -> View {
    View::new(
        0,
        ViewKind::Scroll {
            horizontal: props.horizontal,
            shows_indicator: props.shows_indicator,
            throttle_ms: props.throttle_ms,
            on_scroll: props.on_scroll,
            on_content_size: props.on_content_size,
        },
    )
    .modifier(modifier)
}

pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn size(self, px: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    /// Applies the fields `style` sets; unset fields keep their value.
    fn styled(self, style: &TextStyle) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, px: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = px;
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }
    fn styled(mut self, style: &TextStyle) -> View {
        if let Some(c) = style.color {
            self = self.color(c);
        }
        if let Some(s) = style.font_size {
            self = self.size(s);
        }
        if let Some(w) = style.weight {
            self = self.weight(w);
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
