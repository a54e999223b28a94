use bitflags::bitflags;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Per-edge lengths in dp. Used for padding, margins and safe-area insets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };

    pub fn all(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
    pub fn top(v: f32) -> Self {
        Self {
            top: v,
            ..Self::ZERO
        }
    }
    pub fn bottom(v: f32) -> Self {
        Self {
            bottom: v,
            ..Self::ZERO
        }
    }

    /// Keeps only the edges in `edges`, zeroing the rest.
    pub fn only(self, edges: Edges) -> Self {
        let pick = |edge: Edges, v: f32| if edges.contains(edge) { v } else { 0.0 };
        Self {
            left: pick(Edges::LEFT, self.left),
            right: pick(Edges::RIGHT, self.right),
            top: pick(Edges::TOP, self.top),
            bottom: pick(Edges::BOTTOM, self.bottom),
        }
    }
}

impl std::ops::Add for EdgeInsets {
    type Output = EdgeInsets;

    fn add(self, o: EdgeInsets) -> EdgeInsets {
        EdgeInsets {
            left: self.left + o.left,
            right: self.right + o.right,
            top: self.top + o.top,
            bottom: self.bottom + o.bottom,
        }
    }
}

bitflags! {
    /// Screen edges, e.g. which safe-area insets a region honours.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Default for Edges {
    fn default() -> Self {
        Edges::all()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotate: f32, // radians
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotate: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Self::identity()
        }
    }

    pub fn combine(&self, other: &Transform) -> Transform {
        Transform {
            translate_x: self.translate_x + other.translate_x,
            translate_y: self.translate_y + other.translate_y,
            scale_x: self.scale_x * other.scale_x,
            scale_y: self.scale_y * other.scale_y,
            rotate: self.rotate + other.rotate,
        }
    }

    /// Folds a list of transform operations, applied in order.
    pub fn from_ops(ops: &[TransformOp]) -> Transform {
        ops.iter()
            .fold(Transform::identity(), |t, op| t.combine(&op.to_transform()))
    }
}

/// One entry of a transform list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// Degrees, clockwise.
    Rotate(f32),
    Scale(f32),
    ScaleX(f32),
    ScaleY(f32),
    TranslateX(f32),
    TranslateY(f32),
}

impl TransformOp {
    pub fn to_transform(self) -> Transform {
        let id = Transform::identity();
        match self {
            TransformOp::Rotate(deg) => Transform {
                rotate: deg.to_radians(),
                ..id
            },
            TransformOp::Scale(s) => Transform {
                scale_x: s,
                scale_y: s,
                ..id
            },
            TransformOp::ScaleX(s) => Transform { scale_x: s, ..id },
            TransformOp::ScaleY(s) => Transform { scale_y: s, ..id },
            TransformOp::TranslateX(v) => Transform::translate(v, 0.0),
            TransformOp::TranslateY(v) => Transform::translate(0.0, v),
        }
    }
}

pub type TransformList = SmallVec<[TransformOp; 4]>;

impl From<f32> for EdgeInsets {
    fn from(v: f32) -> Self {
        EdgeInsets::all(v)
    }
}
