use std::rc::Rc;

use screenkit_core::{
    AlignItems, Color, EdgeInsets, Edges, FontWeight, JustifyContent, LayoutCallback, Rect, Shadow,
};

config_struct! {
    /// Layout, decoration and behaviour fields shared by all regions.
    pub struct RegionStyle {
        data {
            /// Render nothing for this region.
            hidden: bool,
            /// Explicit height; otherwise the measured height is used.
            height: f32,
            width: f32,
            min_height: f32,
            background_color: Color,
            padding: EdgeInsets,
            margin: EdgeInsets,
            border_width: f32,
            border_color: Color,
            border_radius: f32,
            /// Replaced as a whole by overrides.
            shadow: Shadow,
            /// Take the region out of flow and place it with `top`/`left`/`right`/`bottom`.
            absolute: bool,
            top: f32,
            left: f32,
            right: f32,
            bottom: f32,
            z_index: f32,
            opacity: f32,
            justify_content: Justify,
            align_items: Align,
            /// Forces row direction regardless of the system writing direction.
            rtl: bool,
            /// Add `safe_area_insets` to the region's padding (or offsets).
            use_safe_area: bool,
            safe_area_insets: EdgeInsets,
            /// Edges the safe area applies to; all of them by default.
            safe_area_edges: Edges,
            /// Force light/dark backgrounds from the system color scheme.
            adaptive_theme: bool,
            /// Follow the system color scheme for content style only.
            auto_detect_theme: bool,
        }
        hooks {
            /// Called with the region's frame after each layout.
            on_layout: LayoutCallback,
        }
        nested {}
    }
}

impl RegionStyle {
    pub fn on_layout(mut self, f: impl Fn(Rect) + 'static) -> Self {
        self.on_layout = Some(Rc::new(f));
        self
    }
}

/// Main-axis distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl Justify {
    pub fn from_name(name: &str) -> Option<Justify> {
        Some(match name {
            "flex-start" | "start" => Justify::Start,
            "center" => Justify::Center,
            "flex-end" | "end" => Justify::End,
            "space-between" => Justify::SpaceBetween,
            "space-around" => Justify::SpaceAround,
            "space-evenly" => Justify::SpaceEvenly,
            _ => return None,
        })
    }

    pub fn to_taffy(self) -> JustifyContent {
        match self {
            Justify::Start => JustifyContent::FlexStart,
            Justify::Center => JustifyContent::Center,
            Justify::End => JustifyContent::FlexEnd,
            Justify::SpaceBetween => JustifyContent::SpaceBetween,
            Justify::SpaceAround => JustifyContent::SpaceAround,
            Justify::SpaceEvenly => JustifyContent::SpaceEvenly,
        }
    }
}

/// Unknown names fall back to `Start`.
impl From<&str> for Justify {
    fn from(name: &str) -> Self {
        Justify::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown justify value '{name}', using flex-start");
            Justify::default()
        })
    }
}

/// Cross-axis alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
    Stretch,
    Baseline,
}

impl Align {
    pub fn from_name(name: &str) -> Option<Align> {
        Some(match name {
            "flex-start" | "start" => Align::Start,
            "center" => Align::Center,
            "flex-end" | "end" => Align::End,
            "stretch" => Align::Stretch,
            "baseline" => Align::Baseline,
            _ => return None,
        })
    }

    pub fn to_taffy(self) -> AlignItems {
        match self {
            Align::Start => AlignItems::FlexStart,
            Align::Center => AlignItems::Center,
            Align::End => AlignItems::FlexEnd,
            Align::Stretch => AlignItems::Stretch,
            Align::Baseline => AlignItems::Baseline,
        }
    }
}

/// Unknown names fall back to `Center`.
impl From<&str> for Align {
    fn from(name: &str) -> Self {
        Align::from_name(name).unwrap_or_else(|| {
            log::warn!("unknown align value '{name}', using center");
            Align::default()
        })
    }
}

/// Text styling; an override replaces the whole style.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub weight: Option<FontWeight>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn color(mut self, c: Color) -> Self {
        self.color = Some(c);
        self
    }
    pub fn font_size(mut self, s: f32) -> Self {
        self.font_size = Some(s);
        self
    }
    pub fn weight(mut self, w: FontWeight) -> Self {
        self.weight = Some(w);
        self
    }
}

/// Edge of the active tab the indicator bar is drawn on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndicatorPosition {
    Top,
    #[default]
    Bottom,
}
