use std::rc::Rc;

use taffy::{AlignItems, AlignSelf, FlexDirection, JustifyContent};

use crate::{Color, EdgeInsets, Rect, Transform, TransformList, TransformOp, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn all(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }
    pub fn top(r: f32) -> Self {
        Self {
            top_left: r,
            top_right: r,
            ..Self::default()
        }
    }
}

/// Drop shadow. Platforms without shadow support fall back to `elevation`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset: Vec2,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionType {
    Relative,
    Absolute,
}

pub type LayoutCallback = Rc<dyn Fn(Rect)>;

#[derive(Clone, Default)]
pub struct Modifier {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<EdgeInsets>,
    pub margin: Option<EdgeInsets>,
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub corner_radii: Option<CornerRadii>,
    pub shadow: Option<Shadow>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_dir: Option<FlexDirection>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub position_type: Option<PositionType>,
    pub offset_left: Option<f32>,
    pub offset_right: Option<f32>,
    pub offset_top: Option<f32>,
    pub offset_bottom: Option<f32>,
    pub z_index: f32,
    pub alpha: Option<f32>,
    pub transform: TransformList,
    /// Measurement subscription; the host calls it with the laid-out frame.
    pub on_layout: Option<LayoutCallback>,
    pub semantics: Option<crate::Semantics>,
    pub test_tag: Option<String>,
}

impl std::fmt::Debug for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modifier")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("min_height", &self.min_height)
            .field("max_height", &self.max_height)
            .field("fill_max_w", &self.fill_max_w)
            .field("fill_max_h", &self.fill_max_h)
            .field("padding", &self.padding)
            .field("margin", &self.margin)
            .field("background", &self.background)
            .field("border", &self.border)
            .field("corner_radii", &self.corner_radii)
            .field("shadow", &self.shadow)
            .field("flex_grow", &self.flex_grow)
            .field("flex_shrink", &self.flex_shrink)
            .field("flex_dir", &self.flex_dir)
            .field("align_self", &self.align_self)
            .field("justify_content", &self.justify_content)
            .field("align_items_container", &self.align_items_container)
            .field("position_type", &self.position_type)
            .field("offset_left", &self.offset_left)
            .field("offset_right", &self.offset_right)
            .field("offset_top", &self.offset_top)
            .field("offset_bottom", &self.offset_bottom)
            .field("z_index", &self.z_index)
            .field("alpha", &self.alpha)
            .field("transform", &self.transform)
            .field("on_layout", &self.on_layout.as_ref().map(|_| "..."))
            .field("semantics", &self.semantics)
            .field("test_tag", &self.test_tag)
            .finish()
    }
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn max_height(mut self, h: f32) -> Self {
        self.max_height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn fill_max_height(mut self) -> Self {
        self.fill_max_h = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(EdgeInsets::all(v));
        self
    }
    pub fn padding_values(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }
    pub fn margin(mut self, v: f32) -> Self {
        self.margin = Some(EdgeInsets::all(v));
        self
    }
    pub fn margin_values(mut self, margin: EdgeInsets) -> Self {
        self.margin = Some(margin);
        self
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }
    pub fn rounded(mut self, radius: f32) -> Self {
        self.corner_radii = Some(CornerRadii::all(radius));
        self
    }
    pub fn rounded_corners(mut self, radii: CornerRadii) -> Self {
        self.corner_radii = Some(radii);
        self
    }
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_shrink(mut self, v: f32) -> Self {
        self.flex_shrink = Some(v);
        self
    }
    pub fn flex_dir(mut self, d: FlexDirection) -> Self {
        self.flex_dir = Some(d);
        self
    }
    pub fn align_self(mut self, a: AlignSelf) -> Self {
        self.align_self = Some(a);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    pub fn absolute(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self
    }
    pub fn offset(
        mut self,
        left: Option<f32>,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
    ) -> Self {
        self.offset_left = left;
        self.offset_top = top;
        self.offset_right = right;
        self.offset_bottom = bottom;
        self
    }
    pub fn z_index(mut self, z: f32) -> Self {
        self.z_index = z;
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }
    pub fn transform(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }
    pub fn transforms(mut self, ops: impl IntoIterator<Item = TransformOp>) -> Self {
        self.transform.extend(ops);
        self
    }
    pub fn translate_y(self, v: f32) -> Self {
        self.transform(TransformOp::TranslateY(v))
    }
    /// The transform list folded into one transform, in list order.
    pub fn folded_transform(&self) -> Transform {
        Transform::from_ops(&self.transform)
    }
    pub fn on_layout(mut self, f: impl Fn(Rect) + 'static) -> Self {
        self.on_layout = Some(Rc::new(f));
        self
    }
    pub fn semantics(mut self, s: crate::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}
