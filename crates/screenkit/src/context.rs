use std::rc::Rc;

use screenkit_core::{Color, EdgeInsets, FlexDirection, View};

use crate::{RegionKind, ScrollIndicatorGeometry};

/// Replaces a region's default visual entirely.
pub type RegionRenderer = Rc<dyn Fn(&RegionContext) -> View>;
/// Replaces the body's default visual entirely.
pub type BodyRenderer = Rc<dyn Fn(&BodyContext) -> View>;
pub type IndicatorRenderer = Rc<dyn Fn(&ScrollIndicatorGeometry) -> View>;

/// What a custom region renderer gets to work with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionContext {
    pub region: RegionKind,
    /// Effective height: explicit, else measured, else the region default.
    pub height: f32,
    pub background: Color,
    /// Safe-area insets that apply to this region (zero when disabled).
    pub safe_area: EdgeInsets,
    pub direction: FlexDirection,
    /// Current bottom sheet slide offset; zero for other regions.
    pub slide_offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyContext {
    pub scroll_offset: f32,
    pub content_height: f32,
    pub viewport_height: f32,
    pub background: Color,
    pub safe_area: EdgeInsets,
    pub indicator: ScrollIndicatorGeometry,
}
