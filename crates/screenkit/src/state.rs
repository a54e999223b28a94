//! # Transient layout state
//!
//! A scaffold owns a small amount of state that the host feeds back between
//! render passes: measured region heights, the body's scroll metrics and the
//! bottom sheet's slide animation.
//!
//! The host never mutates it directly. Layout and scroll callbacks in the
//! rendered tree send [`LayoutMsg`]s through [`ScaffoldState::dispatch`], and
//! [`LayoutState::reduce`] is the only place that computes the next state.
//!
//! ```rust
//! use screenkit::*;
//!
//! let state = ScaffoldState::new(LayoutState::default());
//! state.dispatch(LayoutMsg::ContentMeasured(2000.0));
//! state.dispatch(LayoutMsg::ViewportMeasured(500.0));
//! state.dispatch(LayoutMsg::Scrolled(750.0));
//! assert_eq!(state.snapshot().indicator().scroll_percentage, 50.0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use screenkit_core::{
    AnimatedValue, AnimationSpec, Easing, Environment, Signal, remember_with_key, signal,
};
use web_time::Duration;

use crate::metrics::{self, ScrollIndicatorGeometry};
use crate::{RegionKind, ScaffoldConfig, resolve};

/// State-update messages emitted by measurement and scroll callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMsg {
    RegionMeasured { region: RegionKind, height: f32 },
    ViewportMeasured(f32),
    ContentMeasured(f32),
    Scrolled(f32),
    SheetVisibility(bool),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    pub status_bar_height: f32,
    pub app_bar_height: f32,
    pub bottom_nav_height: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    pub scroll_offset: f32,
    /// Last visibility seen for the bottom sheet, for edge detection.
    pub sheet_visible: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            status_bar_height: 0.0,
            app_bar_height: metrics::APP_BAR_HEIGHT,
            bottom_nav_height: metrics::BOTTOM_NAV_HEIGHT,
            viewport_height: 0.0,
            content_height: 0.0,
            scroll_offset: 0.0,
            sheet_visible: false,
        }
    }
}

fn measured(h: f32) -> f32 {
    if h.is_finite() { h.max(0.0) } else { 0.0 }
}

impl LayoutState {
    /// Status bar height from the environment, bar heights from the config
    /// (or their defaults), scroll metrics at zero.
    pub fn initial(config: &ScaffoldConfig, env: &Environment) -> Self {
        let app_bar = resolve(config.app_bar.as_ref(), env.platform);
        let bottom_nav = resolve(config.bottom_nav.as_ref(), env.platform);
        Self {
            status_bar_height: env.status_bar_height,
            app_bar_height: app_bar.style.height.unwrap_or(metrics::APP_BAR_HEIGHT),
            bottom_nav_height: bottom_nav
                .style
                .height
                .unwrap_or(metrics::BOTTOM_NAV_HEIGHT),
            ..Self::default()
        }
    }

    pub fn reduce(&self, msg: LayoutMsg) -> LayoutState {
        let mut next = *self;
        match msg {
            LayoutMsg::RegionMeasured { region, height } => match region {
                RegionKind::StatusBar => next.status_bar_height = measured(height),
                RegionKind::AppBar => next.app_bar_height = measured(height),
                RegionKind::BottomNav => next.bottom_nav_height = measured(height),
                other => log::trace!("ignoring measurement for {other:?}"),
            },
            LayoutMsg::ViewportMeasured(h) => next.viewport_height = measured(h),
            LayoutMsg::ContentMeasured(h) => next.content_height = measured(h),
            LayoutMsg::Scrolled(y) => {
                next.scroll_offset = if y.is_finite() { y } else { 0.0 };
            }
            LayoutMsg::SheetVisibility(v) => next.sheet_visible = v,
        }
        next
    }

    /// Measured height for regions that track one.
    pub fn measured_height(&self, region: RegionKind) -> Option<f32> {
        match region {
            RegionKind::StatusBar => Some(self.status_bar_height),
            RegionKind::AppBar => Some(self.app_bar_height),
            RegionKind::BottomNav => Some(self.bottom_nav_height),
            RegionKind::Body => Some(self.viewport_height),
            _ => None,
        }
    }

    pub fn indicator(&self) -> ScrollIndicatorGeometry {
        metrics::scroll_indicator(self.viewport_height, self.content_height, self.scroll_offset)
    }
}

/// Cloneable handle to one scaffold's state. Clones share the same state.
#[derive(Clone)]
pub struct ScaffoldState {
    layout: Rc<RefCell<LayoutState>>,
    scroll: Signal<f32>,
    slide: Rc<RefCell<AnimatedValue<f32>>>,
}

impl ScaffoldState {
    pub fn new(initial: LayoutState) -> Self {
        Self {
            layout: Rc::new(RefCell::new(initial)),
            scroll: signal(initial.scroll_offset),
            slide: Rc::new(RefCell::new(AnimatedValue::new(
                metrics::SHEET_SLIDE_DISTANCE,
                sheet_spec(metrics::SHEET_ANIMATION_MS),
            ))),
        }
    }

    pub fn for_config(config: &ScaffoldConfig, env: &Environment) -> Self {
        Self::new(LayoutState::initial(config, env))
    }

    pub fn dispatch(&self, msg: LayoutMsg) {
        let next = self.layout.borrow().reduce(msg);
        let changed = next != *self.layout.borrow();
        if !changed {
            return;
        }
        log::trace!("scaffold state: {msg:?}");
        *self.layout.borrow_mut() = next;
        if let LayoutMsg::Scrolled(_) = msg {
            self.scroll.set(next.scroll_offset);
        }
    }

    pub fn snapshot(&self) -> LayoutState {
        *self.layout.borrow()
    }

    /// Scroll offset as an observable value, for parallax and collapsing headers.
    pub fn scroll_offset(&self) -> Signal<f32> {
        self.scroll.clone()
    }

    /// Tracks the sheet's visibility and returns its current slide offset.
    ///
    /// A false -> true edge animates from `distance` to zero, true -> false back to
    /// `distance`. A flip mid-flight retargets from the current offset.
    pub fn sync_sheet(&self, visible: bool, duration_ms: u64, distance: f32) -> f32 {
        let was_visible = self.layout.borrow().sheet_visible;
        let mut slide = self.slide.borrow_mut();
        slide.set_spec(sheet_spec(duration_ms));

        if visible != was_visible {
            log::debug!("bottom sheet visibility {was_visible} -> {visible}");
            slide.set_target(if visible { 0.0 } else { distance });
            drop(slide);
            self.dispatch(LayoutMsg::SheetVisibility(visible));
            return self.sheet_offset();
        }

        if !visible && !slide.is_animating() && *slide.get() != distance {
            slide.snap_to(distance);
        }
        slide.update();
        *slide.get()
    }

    pub fn sheet_offset(&self) -> f32 {
        let mut slide = self.slide.borrow_mut();
        slide.update();
        *slide.get()
    }

    /// True while the host should keep scheduling frames.
    pub fn is_animating(&self) -> bool {
        self.slide.borrow().is_animating()
    }
}

fn sheet_spec(duration_ms: u64) -> AnimationSpec {
    AnimationSpec::tween(Duration::from_millis(duration_ms), Easing::EaseInOut)
}

/// Keyed state that survives re-renders; initialized from `config` on first use.
pub fn remember_scaffold_state(key: &str, config: &ScaffoldConfig) -> ScaffoldState {
    let slot = remember_with_key(format!("scaffold:{key}"), || {
        ScaffoldState::for_config(config, &Environment::current())
    });
    (*slot).clone()
}
