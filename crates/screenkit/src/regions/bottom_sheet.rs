use screenkit_core::{Color, CornerRadii, Edges, Modifier, View};

use super::{RenderCx, container_modifier, prepare};
use crate::metrics::{SHEET_ANIMATION_MS, SHEET_CORNER_RADIUS, SHEET_SLIDE_DISTANCE, padded};
use crate::widgets::*;
use crate::{BottomSheetConfig, Overridable, RegionKind};

const DEFAULT_OVERLAY: Color = Color(0, 0, 0, 128);

/// Modal sheet over a dimming overlay. The slide animation is driven from
/// here on every render, so hiding the sheet still runs the slide-out even
/// though nothing is drawn once it is invisible.
pub(crate) fn BottomSheetRegion(
    cx: &RenderCx<'_>,
    region: Option<&Overridable<BottomSheetConfig>>,
) -> Option<View> {
    let prepared = prepare(cx, region);
    let visible = prepared
        .as_ref()
        .is_some_and(|p| p.config.visible.unwrap_or(false));
    let (duration, distance) = prepared
        .as_ref()
        .map(|p| {
            (
                p.config.animation_ms.unwrap_or(SHEET_ANIMATION_MS),
                p.config.slide_distance.unwrap_or(SHEET_SLIDE_DISTANCE),
            )
        })
        .unwrap_or((SHEET_ANIMATION_MS, SHEET_SLIDE_DISTANCE));
    let offset = cx.state.sync_sheet(visible, duration, distance);

    let p = prepared.filter(|_| visible)?;
    let cfg = &p.config;
    let style = p.style();

    if let Some(render) = &cfg.render {
        let height = style.height.or(cfg.max_height).unwrap_or(0.0);
        return Some(render(&p.context(height, offset)));
    }

    let dismiss = cfg
        .on_dismiss
        .clone()
        .filter(|_| cfg.dismiss_on_overlay_press.unwrap_or(true));
    let overlay = Pressable(
        Modifier::new()
            .absolute()
            .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
            .background(cfg.overlay_color.unwrap_or(DEFAULT_OVERLAY))
            .test_tag("bottom_sheet.overlay"),
        PressHandlers {
            on_press: dismiss,
            ..Default::default()
        },
    );

    let safe = p.safe_area.only(Edges::BOTTOM | Edges::LEFT | Edges::RIGHT);
    let mut panel = container_modifier(style, p.background, padded(style, safe))
        .absolute()
        .offset(Some(0.0), None, Some(0.0), Some(0.0))
        .translate_y(offset)
        .test_tag("bottom_sheet.panel");
    if style.border_radius.is_none() {
        panel = panel.rounded_corners(CornerRadii::top(SHEET_CORNER_RADIUS));
    }
    if let Some(h) = style.height {
        panel = panel.height(h);
    }
    if let Some(h) = cfg.max_height {
        panel = panel.max_height(h);
    }
    if let Some(hook) = style.on_layout.clone() {
        panel = panel.on_layout(move |rect| hook(rect));
    }

    Some(
        Stack(Modifier::new()
            .absolute()
            .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
            .z_index(style.z_index.unwrap_or(100.0))
            .test_tag(RegionKind::BottomSheet.tag()))
        .child((
            overlay,
            Column(panel).child((cfg.header.clone(), cfg.content.clone(), cfg.footer.clone())),
        )),
    )
}
