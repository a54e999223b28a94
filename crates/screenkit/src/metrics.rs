//! Heights, safe-area insets and scroll indicator geometry.

use screenkit_core::{EdgeInsets, FlexDirection, TextDirection};

use crate::RegionStyle;

pub const APP_BAR_HEIGHT: f32 = 56.0;
pub const TOP_NAV_HEIGHT: f32 = 48.0;
pub const BOTTOM_NAV_HEIGHT: f32 = 56.0;
pub const FAB_SIZE: f32 = 56.0;
pub const FAB_MARGIN: f32 = 16.0;
pub const INDICATOR_HEIGHT: f32 = 2.0;
pub const SHEET_CORNER_RADIUS: f32 = 16.0;
pub const SHEET_SLIDE_DISTANCE: f32 = 1000.0;
pub const SHEET_ANIMATION_MS: u64 = 300;
pub const SCROLL_THROTTLE_MS: u32 = 16;

pub fn effective_height(explicit: Option<f32>, measured: f32) -> f32 {
    explicit.unwrap_or(measured)
}

/// Insets the region must add, or zero when `use_safe_area` is off.
pub fn safe_area(style: &RegionStyle) -> EdgeInsets {
    if !style.use_safe_area.unwrap_or(false) {
        return EdgeInsets::ZERO;
    }
    style
        .safe_area_insets
        .unwrap_or_default()
        .only(style.safe_area_edges.unwrap_or_default())
}

/// Configured padding plus safe-area insets.
pub fn padded(style: &RegionStyle, safe: EdgeInsets) -> EdgeInsets {
    style.padding.unwrap_or_default() + safe
}

/// An explicit `rtl` flag beats the system writing direction.
pub fn flow_direction(rtl: Option<bool>, system: TextDirection) -> FlexDirection {
    let rtl = rtl.unwrap_or(system == TextDirection::Rtl);
    if rtl {
        FlexDirection::RowReverse
    } else {
        FlexDirection::Row
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollIndicatorGeometry {
    pub viewport_height: f32,
    pub content_height: f32,
    pub scroll_offset: f32,
    /// Zero when there is nothing to measure.
    pub indicator_height: f32,
    /// Distance of the indicator from the top of the viewport.
    pub indicator_position: f32,
    pub max_scroll: f32,
    /// 0..=100
    pub scroll_percentage: f32,
}

impl ScrollIndicatorGeometry {
    pub fn is_visible(&self) -> bool {
        self.indicator_height > 0.0
    }
}

/// Never NaN or negative, whatever the inputs.
pub fn scroll_indicator(viewport: f32, content: f32, offset: f32) -> ScrollIndicatorGeometry {
    let viewport = sanitize(viewport);
    let content = sanitize(content);
    let offset = if offset.is_finite() { offset } else { 0.0 };

    let max_scroll = (content - viewport).max(0.0);
    let indicator_height = if content > 0.0 && viewport > 0.0 {
        (viewport / content * viewport).min(viewport)
    } else {
        0.0
    };
    let scroll_percentage = if max_scroll > 0.0 {
        (offset / max_scroll * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let indicator_position = scroll_percentage / 100.0 * (viewport - indicator_height).max(0.0);

    ScrollIndicatorGeometry {
        viewport_height: viewport,
        content_height: content,
        scroll_offset: offset,
        indicator_height,
        indicator_position,
        max_scroll,
        scroll_percentage,
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
