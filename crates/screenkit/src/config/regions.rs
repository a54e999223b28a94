use std::rc::Rc;

use screenkit_core::{BarContentStyle, Callback, Color, EdgeInsets, ScrollCallback, TransformOp, View};

use super::{IndicatorPosition, Overridable, RegionStyle, TabChangeCallback, TabDescriptor, TextStyle};
use crate::{BodyRenderer, CallbackResult, IndicatorRenderer, RegionRenderer, TabId};

config_struct! {
    pub struct StatusBarConfig {
        data {
            title: String,
            title_style: TextStyle,
            /// Replaces the title.
            content: View,
            /// Center the content instead of spreading it across the bar.
            center_content: bool,
            translucent: bool,
            /// Animate native status bar changes.
            animated: bool,
            content_style: BarContentStyle,
        }
        hooks {
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct AppBarConfig {
        data {
            title: String,
            subtitle: String,
            title_style: TextStyle,
            subtitle_style: TextStyle,
            back_icon: View,
            /// Defaults to whether a back icon or back handler is set.
            show_back: bool,
            center: View,
            trailing: View,
            /// Full-bleed visual behind the bar (image, gradient).
            background: View,
        }
        hooks {
            on_back: Callback,
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct TopNavConfig {
        data {
            tabs: Vec<TabDescriptor>,
            /// Tracked by the caller; see [`TabId::matches`].
            active_tab: TabId,
            /// Horizontal scroll strip instead of equal-width cells.
            scrollable: bool,
            tab_width: f32,
            text_style: TextStyle,
            active_text_style: TextStyle,
            active_color: Color,
            inactive_color: Color,
            active_background: Color,
            show_indicator: bool,
            indicator_color: Color,
            indicator_height: f32,
            indicator_position: IndicatorPosition,
        }
        hooks {
            on_tab_change: TabChangeCallback,
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct BodyConfig {
        data {
            content: View,
            /// Wrap the content in a tracked scroll container. On by default.
            scroll_enabled: bool,
            /// Minimum interval between scroll events.
            scroll_throttle_ms: u32,
            /// Native scroll indicator.
            shows_scroll_indicator: bool,
            content_padding: EdgeInsets,
        }
        hooks {
            on_scroll: ScrollCallback,
            /// Overlay drawn from the computed indicator geometry.
            scroll_indicator: IndicatorRenderer,
            render: BodyRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct BottomNavConfig {
        data {
            content: View,
        }
        hooks {
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct FabConfig {
        data {
            content: View,
            size: f32,
            /// Degrees.
            rotation: f32,
            scale: f32,
            /// Applied after `rotation` and `scale`.
            transform: Vec<TransformOp>,
            disabled: bool,
            accessibility_label: String,
            accessibility_hint: String,
        }
        hooks {
            on_press: Callback,
            on_long_press: Callback,
            on_press_in: Callback,
            on_press_out: Callback,
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

config_struct! {
    pub struct BottomSheetConfig {
        data {
            visible: bool,
            /// Pressing the overlay calls `on_dismiss`. On by default.
            dismiss_on_overlay_press: bool,
            overlay_color: Color,
            header: View,
            content: View,
            footer: View,
            animation_ms: u64,
            /// Off-screen offset the sheet slides from.
            slide_distance: f32,
            max_height: f32,
        }
        hooks {
            on_dismiss: Callback,
            render: RegionRenderer,
        }
        nested {
            style: RegionStyle,
        }
    }
}

impl AppBarConfig {
    pub fn on_back(mut self, f: impl Fn() + 'static) -> Self {
        self.on_back = Some(Rc::new(f));
        self
    }
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl StatusBarConfig {
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl TopNavConfig {
    pub fn on_tab_change(mut self, f: impl Fn(&TabId) -> CallbackResult + 'static) -> Self {
        self.on_tab_change = Some(Rc::new(f));
        self
    }
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl BodyConfig {
    pub fn on_scroll(mut self, f: impl Fn(f32) + 'static) -> Self {
        self.on_scroll = Some(Rc::new(f));
        self
    }
    pub fn scroll_indicator(
        mut self,
        f: impl Fn(&crate::ScrollIndicatorGeometry) -> View + 'static,
    ) -> Self {
        self.scroll_indicator = Some(Rc::new(f));
        self
    }
    pub fn render(mut self, f: impl Fn(&crate::BodyContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl BottomNavConfig {
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl FabConfig {
    pub fn on_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_press = Some(Rc::new(f));
        self
    }
    pub fn on_long_press(mut self, f: impl Fn() + 'static) -> Self {
        self.on_long_press = Some(Rc::new(f));
        self
    }
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

impl BottomSheetConfig {
    pub fn on_dismiss(mut self, f: impl Fn() + 'static) -> Self {
        self.on_dismiss = Some(Rc::new(f));
        self
    }
    pub fn render(mut self, f: impl Fn(&crate::RegionContext) -> View + 'static) -> Self {
        self.render = Some(Rc::new(f));
        self
    }
}

/// Top-level scaffold configuration: one optional record per region.
#[derive(Clone, Default, Debug)]
pub struct ScaffoldConfig {
    pub status_bar: Option<Overridable<StatusBarConfig>>,
    pub app_bar: Option<Overridable<AppBarConfig>>,
    pub top_nav: Option<Overridable<TopNavConfig>>,
    pub body: Option<Overridable<BodyConfig>>,
    pub bottom_nav: Option<Overridable<BottomNavConfig>>,
    pub fab: Option<Overridable<FabConfig>>,
    pub bottom_sheet: Option<Overridable<BottomSheetConfig>>,
}

impl ScaffoldConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn status_bar(mut self, c: impl Into<Overridable<StatusBarConfig>>) -> Self {
        self.status_bar = Some(c.into());
        self
    }
    pub fn app_bar(mut self, c: impl Into<Overridable<AppBarConfig>>) -> Self {
        self.app_bar = Some(c.into());
        self
    }
    pub fn top_nav(mut self, c: impl Into<Overridable<TopNavConfig>>) -> Self {
        self.top_nav = Some(c.into());
        self
    }
    pub fn body(mut self, c: impl Into<Overridable<BodyConfig>>) -> Self {
        self.body = Some(c.into());
        self
    }
    pub fn bottom_nav(mut self, c: impl Into<Overridable<BottomNavConfig>>) -> Self {
        self.bottom_nav = Some(c.into());
        self
    }
    pub fn fab(mut self, c: impl Into<Overridable<FabConfig>>) -> Self {
        self.fab = Some(c.into());
        self
    }
    pub fn bottom_sheet(mut self, c: impl Into<Overridable<BottomSheetConfig>>) -> Self {
        self.bottom_sheet = Some(c.into());
        self
    }
}
