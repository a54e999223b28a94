use screenkit_core::{AlignItems, FontWeight, JustifyContent, Modifier, Role, Semantics, View};

use super::{RenderCx, container_modifier, measure, prepare};
use crate::metrics::{effective_height, padded};
use crate::theme::content_color;
use crate::widgets::*;
use crate::{Align, AppBarConfig, Justify, Overridable, RegionKind};

pub(crate) fn AppBarRegion(cx: &RenderCx<'_>, region: Option<&Overridable<AppBarConfig>>) -> Option<View> {
    let p = prepare(cx, region)?;
    let cfg = &p.config;
    let style = p.style();
    let height = effective_height(style.height, cx.layout.app_bar_height);

    if let Some(render) = &cfg.render {
        return Some(render(&p.context(height, 0.0)));
    }

    let fg = content_color(p.background, cx.env.color_scheme);

    let show_back = cfg
        .show_back
        .unwrap_or(cfg.back_icon.is_some() || cfg.on_back.is_some());
    let back = show_back.then(|| {
        let icon = cfg
            .back_icon
            .clone()
            .unwrap_or_else(|| Text("\u{2190}").color(fg).size(22.0));
        Pressable(
            Modifier::new()
                .padding(8.0)
                .semantics(Semantics::new(Role::Button).label("Back"))
                .test_tag("app_bar.back"),
            PressHandlers {
                on_press: cfg.on_back.clone(),
                ..Default::default()
            },
        )
        .child(icon)
    });

    let titles = (cfg.title.is_some() || cfg.subtitle.is_some()).then(|| {
        let title = cfg.title.as_ref().map(|t| {
            Text(t.clone())
                .color(fg)
                .size(18.0)
                .weight(FontWeight::Medium)
                .styled(&cfg.title_style.unwrap_or_default())
                .modifier(
                    Modifier::new()
                        .semantics(Semantics::new(Role::Header).label(t.clone()))
                        .test_tag("app_bar.title"),
                )
        });
        let subtitle = cfg.subtitle.as_ref().map(|s| {
            Text(s.clone())
                .color(fg.with_alpha(180))
                .size(13.0)
                .styled(&cfg.subtitle_style.unwrap_or_default())
                .modifier(Modifier::new().test_tag("app_bar.subtitle"))
        });
        Column(Modifier::new().padding(4.0)).child((title, subtitle))
    });

    let leading = Row(Modifier::new()
        .flex_dir(p.direction)
        .align_items(AlignItems::Center)
        .test_tag("app_bar.leading"))
    .child((back, titles));
    let center = Box(Modifier::new()
        .flex_grow(1.0)
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .test_tag("app_bar.center"))
    .child(cfg.center.clone());
    let trailing = Row(Modifier::new()
        .flex_dir(p.direction)
        .align_items(AlignItems::Center)
        .test_tag("app_bar.trailing"))
    .child(cfg.trailing.clone());

    let bar = Row(Modifier::new()
        .fill_max_size()
        .flex_dir(p.direction)
        .justify_content(style.justify_content.unwrap_or(Justify::SpaceBetween).to_taffy())
        .align_items(style.align_items.unwrap_or(Align::Center).to_taffy())
        .test_tag("app_bar.row"))
    .child((leading, center, trailing));

    let background = cfg.background.clone().map(|bg| {
        Box(Modifier::new()
            .absolute()
            .offset(Some(0.0), Some(0.0), Some(0.0), Some(0.0))
            .test_tag("app_bar.background"))
        .child(bg)
    });

    let insets = p.vertical_insets();
    Some(
        Stack(container_modifier(style, p.background, padded(style, p.safe_area))
            .height(height + insets)
            .on_layout(measure(cx.state, RegionKind::AppBar, insets, style.on_layout.clone()))
            .test_tag(RegionKind::AppBar.tag()))
        .child((background, bar)),
    )
}
