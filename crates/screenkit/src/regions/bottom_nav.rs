use screenkit_core::View;

use super::{RenderCx, container_modifier, measure, prepare};
use crate::metrics::{effective_height, padded};
use crate::widgets::*;
use crate::{Align, BottomNavConfig, Justify, Overridable, RegionKind};

pub(crate) fn BottomNavRegion(
    cx: &RenderCx<'_>,
    region: Option<&Overridable<BottomNavConfig>>,
) -> Option<View> {
    let p = prepare(cx, region)?;
    let cfg = &p.config;
    let style = p.style();
    let height = effective_height(style.height, cx.layout.bottom_nav_height);

    if let Some(render) = &cfg.render {
        return Some(render(&p.context(height, 0.0)));
    }

    let insets = p.vertical_insets();
    Some(
        Row(container_modifier(style, p.background, padded(style, p.safe_area))
            .flex_dir(p.direction)
            .height(height + insets)
            .justify_content(style.justify_content.unwrap_or(Justify::SpaceAround).to_taffy())
            .align_items(style.align_items.unwrap_or(Align::Center).to_taffy())
            .on_layout(measure(cx.state, RegionKind::BottomNav, insets, style.on_layout.clone()))
            .test_tag(RegionKind::BottomNav.tag()))
        .child(cfg.content.clone()),
    )
}
