use std::rc::Rc;

use screenkit_core::{
    AlignItems, Callback, Color, EdgeInsets, FlexDirection, FontWeight, JustifyContent, Modifier,
    Role, Semantics, View,
};

use super::{RenderCx, container_modifier, prepare};
use crate::metrics::{INDICATOR_HEIGHT, SCROLL_THROTTLE_MS, TOP_NAV_HEIGHT, effective_height, padded};
use crate::theme::content_color;
use crate::widgets::*;
use crate::{
    Align, IndicatorPosition, Justify, Overridable, RegionKind, TabChangeCallback, TabDescriptor,
    TabLabel, TopNavConfig, invoke_logged,
};

const DEFAULT_ACTIVE_COLOR: Color = Color(0x21, 0x96, 0xF3, 0xFF);

/// Press handler for one tab: the tab's own callback first, then the
/// strip-wide change notification. A failure in either is logged and does
/// not stop the other.
pub fn tab_press_handler(tab: &TabDescriptor, on_change: Option<TabChangeCallback>) -> Callback {
    let id = tab.id.clone();
    let own = tab.on_press.clone();
    Rc::new(move || {
        if let Some(f) = &own {
            invoke_logged("tab.on_press", || f());
        }
        if let Some(f) = &on_change {
            invoke_logged("top_nav.on_tab_change", || f(&id));
        }
    })
}

pub(crate) fn TopNavRegion(cx: &RenderCx<'_>, region: Option<&Overridable<TopNavConfig>>) -> Option<View> {
    let p = prepare(cx, region)?;
    let cfg = &p.config;
    let style = p.style();
    let height = effective_height(style.height, TOP_NAV_HEIGHT);

    if let Some(render) = &cfg.render {
        return Some(render(&p.context(height, 0.0)));
    }

    let scrollable = cfg.scrollable.unwrap_or(false);
    let fg = content_color(p.background, cx.env.color_scheme);
    let cells: Vec<View> = cfg
        .tabs
        .iter()
        .flatten()
        .map(|tab| TabCell(cfg, tab, fg, scrollable))
        .collect();

    let strip_modifier = Modifier::new()
        .fill_max_height()
        .flex_dir(p.direction)
        .justify_content(style.justify_content.unwrap_or(Justify::Start).to_taffy())
        .align_items(style.align_items.unwrap_or(Align::Stretch).to_taffy())
        .test_tag("top_nav.strip");

    let strip = if scrollable {
        ScrollView(
            Modifier::new().fill_max_width().test_tag("top_nav.scroll"),
            ScrollProps {
                horizontal: true,
                shows_indicator: false,
                throttle_ms: SCROLL_THROTTLE_MS,
                ..Default::default()
            },
        )
        .child(Row(strip_modifier).child(cells))
    } else {
        Row(strip_modifier.fill_max_width()).child(cells)
    };

    let insets = p.vertical_insets();
    let mut container = container_modifier(style, p.background, padded(style, p.safe_area))
        .height(height + insets)
        .semantics(Semantics::new(Role::TabList))
        .test_tag(RegionKind::TopNav.tag());
    if let Some(hook) = style.on_layout.clone() {
        container = container.on_layout(move |rect| hook(rect));
    }
    Some(Box(container).child(strip))
}

fn TabCell(cfg: &TopNavConfig, tab: &TabDescriptor, fg: Color, scrollable: bool) -> View {
    let active = cfg.active_tab.as_ref().is_some_and(|a| tab.id.matches(a));
    let color = if active {
        cfg.active_color.unwrap_or(DEFAULT_ACTIVE_COLOR)
    } else {
        cfg.inactive_color.unwrap_or(fg.with_alpha(160))
    };

    let (label, label_text) = match &tab.label {
        TabLabel::Text(s) => {
            let mut text = Text(s.clone())
                .color(color)
                .size(14.0)
                .weight(if active { FontWeight::Medium } else { FontWeight::Normal })
                .styled(&cfg.text_style.unwrap_or_default());
            if active {
                text = text.styled(&cfg.active_text_style.unwrap_or_default());
            }
            (text, s.clone())
        }
        TabLabel::Custom(v) => (v.clone(), tab.id.to_string()),
    };
    let content = Column(Modifier::new()
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center))
    .child((tab.icon.clone(), label));

    let indicator = (active && cfg.show_indicator.unwrap_or(true)).then(|| {
        let m = Modifier::new()
            .absolute()
            .height(cfg.indicator_height.unwrap_or(INDICATOR_HEIGHT))
            .background(cfg.indicator_color.unwrap_or(color))
            .test_tag("top_nav.indicator");
        let m = match cfg.indicator_position.unwrap_or_default() {
            IndicatorPosition::Top => m.offset(Some(0.0), Some(0.0), Some(0.0), None),
            IndicatorPosition::Bottom => m.offset(Some(0.0), None, Some(0.0), Some(0.0)),
        };
        Box(m)
    });

    let mut m = Modifier::new()
        .padding_values(EdgeInsets::symmetric(16.0, 0.0))
        .flex_dir(FlexDirection::Column)
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .semantics(Semantics::new(Role::Tab).label(label_text).selected(active))
        .test_tag(format!("top_nav.tab.{}", tab.id));
    if let Some(w) = cfg.tab_width {
        m = m.width(w);
    } else if !scrollable {
        m = m.flex_grow(1.0);
    }
    if active {
        if let Some(bg) = cfg.active_background {
            m = m.background(bg);
        }
    }

    Pressable(
        m,
        PressHandlers {
            on_press: Some(tab_press_handler(tab, cfg.on_tab_change.clone())),
            ..Default::default()
        },
    )
    .child((content, indicator))
}
