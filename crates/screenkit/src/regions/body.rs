use std::rc::Rc;

use screenkit_core::{Modifier, ScrollCallback, Size, SizeCallback, View};

use super::{RenderCx, container_modifier, prepare};
use crate::metrics::{SCROLL_THROTTLE_MS, padded};
use crate::widgets::*;
use crate::{BodyConfig, BodyContext, LayoutMsg, Overridable, RegionKind};

/// Custom renderer, tracked scroll container, or a static box.
pub(crate) fn BodyRegion(cx: &RenderCx<'_>, region: Option<&Overridable<BodyConfig>>) -> Option<View> {
    let p = prepare(cx, region)?;
    let cfg = &p.config;
    let style = p.style();
    let layout = cx.layout;
    let geometry = layout.indicator();

    if let Some(render) = &cfg.render {
        return Some(render(&BodyContext {
            scroll_offset: layout.scroll_offset,
            content_height: layout.content_height,
            viewport_height: layout.viewport_height,
            background: p.background,
            safe_area: p.safe_area,
            indicator: geometry,
        }));
    }

    let mut container = container_modifier(style, p.background, padded(style, p.safe_area))
        .flex_grow(1.0)
        .test_tag(RegionKind::Body.tag());
    if let Some(h) = style.height {
        container = container.height(h);
    }

    if !cfg.scroll_enabled.unwrap_or(true) {
        if let Some(hook) = style.on_layout.clone() {
            container = container.on_layout(move |rect| hook(rect));
        }
        return Some(Box(container).child(cfg.content.clone()));
    }

    let on_scroll: ScrollCallback = {
        let state = cx.state.clone();
        let hook = cfg.on_scroll.clone();
        Rc::new(move |y| {
            state.dispatch(LayoutMsg::Scrolled(y));
            if let Some(hook) = &hook {
                hook(y);
            }
        })
    };
    let on_content_size: SizeCallback = {
        let state = cx.state.clone();
        Rc::new(move |size: Size| state.dispatch(LayoutMsg::ContentMeasured(size.height)))
    };
    let on_viewport = {
        let state = cx.state.clone();
        let hook = style.on_layout.clone();
        move |rect: screenkit_core::Rect| {
            state.dispatch(LayoutMsg::ViewportMeasured(rect.h));
            if let Some(hook) = &hook {
                hook(rect);
            }
        }
    };

    let scroll = ScrollView(
        Modifier::new()
            .fill_max_size()
            .on_layout(on_viewport)
            .test_tag("body.scroll"),
        ScrollProps {
            horizontal: false,
            shows_indicator: cfg
                .shows_scroll_indicator
                .unwrap_or(cfg.scroll_indicator.is_none()),
            throttle_ms: cfg.scroll_throttle_ms.unwrap_or(SCROLL_THROTTLE_MS),
            on_scroll: Some(on_scroll),
            on_content_size: Some(on_content_size),
        },
    )
    .child(
        Column(Modifier::new()
            .padding_values(cfg.content_padding.unwrap_or_default())
            .test_tag("body.content"))
        .child(cfg.content.clone()),
    );

    let indicator = cfg
        .scroll_indicator
        .as_ref()
        .filter(|_| geometry.is_visible())
        .map(|render| {
            Box(Modifier::new()
                .absolute()
                .offset(None, Some(0.0), Some(0.0), Some(0.0))
                .test_tag("body.indicator"))
            .child(render(&geometry))
        });

    Some(Stack(container).child((scroll, indicator)))
}
