use screenkit_core::{BarContentStyle, Color, Modifier, SystemBarRequest, View};

use super::{RenderCx, container_modifier, measure, prepare};
use crate::metrics::{effective_height, padded};
use crate::theme::content_color;
use crate::widgets::*;
use crate::{Align, Justify, Overridable, RegionKind, StatusBarConfig, resolve};

pub(crate) struct StatusBarOutput {
    /// Native status bar state to apply; `None` when a custom renderer owns it.
    pub request: Option<SystemBarRequest>,
    pub view: Option<View>,
}

pub(crate) fn StatusBarRegion(
    cx: &RenderCx<'_>,
    region: Option<&Overridable<StatusBarConfig>>,
) -> StatusBarOutput {
    let Some(p) = prepare(cx, region) else {
        let animated = resolve(region, cx.env.platform).animated.unwrap_or(false);
        return StatusBarOutput {
            request: Some(SystemBarRequest {
                hidden: true,
                translucent: false,
                background: Color::TRANSPARENT,
                content_style: BarContentStyle::Default,
                animated,
            }),
            view: None,
        };
    };
    let cfg = &p.config;
    let style = p.style();
    let height = effective_height(style.height, cx.layout.status_bar_height);

    if let Some(render) = &cfg.render {
        return StatusBarOutput {
            request: None,
            view: Some(render(&p.context(height, 0.0))),
        };
    }

    let content_style = p
        .patch
        .content_style
        .or(cfg.content_style)
        .unwrap_or_default();
    let request = SystemBarRequest {
        hidden: false,
        translucent: cfg.translucent.unwrap_or(false),
        background: p.background,
        content_style,
        animated: cfg.animated.unwrap_or(false),
    };

    let fg = match content_style {
        BarContentStyle::LightContent => Color::WHITE,
        BarContentStyle::DarkContent => Color::BLACK,
        BarContentStyle::Default => content_color(p.background, cx.env.color_scheme),
    };
    let content = cfg.content.clone().or_else(|| {
        cfg.title.as_ref().map(|title| {
            Text(title.clone())
                .color(fg)
                .size(14.0)
                .styled(&cfg.title_style.unwrap_or_default())
                .modifier(Modifier::new().test_tag("status_bar.title"))
        })
    });

    let justify = style.justify_content.unwrap_or(if cfg.center_content.unwrap_or(true) {
        Justify::Center
    } else {
        Justify::SpaceBetween
    });
    let insets = p.vertical_insets();
    let view = Row(container_modifier(style, p.background, padded(style, p.safe_area))
        .flex_dir(p.direction)
        .height(height + insets)
        .justify_content(justify.to_taffy())
        .align_items(style.align_items.unwrap_or(Align::Center).to_taffy())
        .on_layout(measure(cx.state, RegionKind::StatusBar, insets, style.on_layout.clone()))
        .test_tag(RegionKind::StatusBar.tag()))
    .child(content);

    StatusBarOutput {
        request: Some(request),
        view: Some(view),
    }
}
