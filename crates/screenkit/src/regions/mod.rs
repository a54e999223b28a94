//! Per-region renderers.
//!
//! Every region follows the same order: hidden or unconfigured renders
//! nothing, a custom renderer replaces everything, otherwise the default
//! visual is assembled from the resolved config.

mod app_bar;
mod body;
mod bottom_nav;
mod bottom_sheet;
mod fab;
mod status_bar;
mod top_nav;

pub(crate) use app_bar::AppBarRegion;
pub(crate) use body::BodyRegion;
pub(crate) use bottom_nav::BottomNavRegion;
pub(crate) use bottom_sheet::BottomSheetRegion;
pub(crate) use fab::FabRegion;
pub(crate) use status_bar::StatusBarRegion;
pub(crate) use top_nav::TopNavRegion;
pub use top_nav::tab_press_handler;

use screenkit_core::{Color, EdgeInsets, Environment, FlexDirection, LayoutCallback, Modifier, Rect};

use crate::metrics::{flow_direction, safe_area};
use crate::theme::{ThemePatch, adapt_theme, final_background};
use crate::{
    LayoutMsg, LayoutState, Overridable, RegionConfig, RegionContext, RegionKind, RegionStyle,
    ScaffoldState, resolve,
};

/// Inputs shared by every region during one render pass.
pub(crate) struct RenderCx<'a> {
    pub env: Environment,
    pub layout: LayoutState,
    pub state: &'a ScaffoldState,
}

/// A region after override merge and theme adaptation.
pub(crate) struct Prepared<C> {
    pub config: C,
    pub patch: ThemePatch,
    pub background: Color,
    pub safe_area: EdgeInsets,
    pub direction: FlexDirection,
}

impl<C: RegionConfig> Prepared<C> {
    pub fn style(&self) -> &RegionStyle {
        self.config.style()
    }

    pub fn context(&self, height: f32, slide_offset: f32) -> RegionContext {
        RegionContext {
            region: C::KIND,
            height,
            background: self.background,
            safe_area: self.safe_area,
            direction: self.direction,
            slide_offset,
        }
    }

    /// Vertical safe-area space added around the region's own height.
    pub fn vertical_insets(&self) -> f32 {
        self.safe_area.top + self.safe_area.bottom
    }
}

/// `None` when the region renders nothing.
pub(crate) fn prepare<C: RegionConfig>(
    cx: &RenderCx<'_>,
    region: Option<&Overridable<C>>,
) -> Option<Prepared<C>> {
    if region.is_none() && !C::KIND.always_present() {
        return None;
    }
    let config = resolve(region, cx.env.platform);
    let style = config.style();
    if style.hidden.unwrap_or(false) {
        log::trace!("{:?} hidden", C::KIND);
        return None;
    }

    let patch = adapt_theme(style, C::KIND, cx.env.color_scheme);
    let background = final_background(&patch, style, C::KIND);
    let safe_area = safe_area(style);
    let direction = flow_direction(style.rtl, cx.env.text_direction);

    Some(Prepared {
        config,
        patch,
        background,
        safe_area,
        direction,
    })
}

/// Default container: size, decoration, position, margin, padding and opacity.
pub(crate) fn container_modifier(style: &RegionStyle, background: Color, padding: EdgeInsets) -> Modifier {
    let mut m = Modifier::new().background(background).padding_values(padding);
    if let Some(w) = style.width {
        m = m.width(w);
    }
    if let Some(h) = style.min_height {
        m = m.min_height(h);
    }
    if let Some(margin) = style.margin {
        m = m.margin_values(margin);
    }
    if let Some(w) = style.border_width {
        m = m.border(w, style.border_color.unwrap_or(Color::BLACK));
    }
    if let Some(r) = style.border_radius {
        m = m.rounded(r);
    }
    if let Some(s) = style.shadow {
        m = m.shadow(s);
    }
    if style.absolute.unwrap_or(false) {
        m = m.absolute().offset(style.left, style.top, style.right, style.bottom);
    }
    if let Some(z) = style.z_index {
        m = m.z_index(z);
    }
    if let Some(o) = style.opacity {
        m = m.alpha(o);
    }
    m
}

/// Measurement subscription for a region whose height the state tracks.
/// `insets` is removed again so the recorded height excludes the safe area.
pub(crate) fn measure(
    state: &ScaffoldState,
    region: RegionKind,
    insets: f32,
    hook: Option<LayoutCallback>,
) -> impl Fn(Rect) + 'static {
    let state = state.clone();
    move |rect| {
        state.dispatch(LayoutMsg::RegionMeasured {
            region,
            height: rect.h - insets,
        });
        if let Some(hook) = &hook {
            hook(rect);
        }
    }
}
