use screenkit_core::{
    AlignItems, Color, EdgeInsets, JustifyContent, Role, Semantics, Shadow, TransformOp, Vec2, View,
};

use super::{RenderCx, container_modifier, prepare};
use crate::metrics::{FAB_MARGIN, FAB_SIZE};
use crate::widgets::*;
use crate::{FabConfig, Overridable, RegionKind, RegionStyle};

const FAB_SHADOW: Shadow = Shadow {
    color: Color::BLACK,
    offset: Vec2 { x: 0.0, y: 3.0 },
    opacity: 0.3,
    radius: 4.0,
    elevation: 6.0,
};

/// Position offsets for the button. Explicit offsets are shifted by the
/// safe area; without one on an axis the button sits `FAB_MARGIN` from the
/// right/bottom edge.
pub(crate) fn fab_offsets(
    style: &RegionStyle,
    safe: EdgeInsets,
) -> (Option<f32>, Option<f32>, Option<f32>, Option<f32>) {
    let left = style.left.map(|v| v + safe.left);
    let top = style.top.map(|v| v + safe.top);
    let right = match (style.right, left) {
        (Some(r), _) => Some(r + safe.right),
        (None, None) => Some(FAB_MARGIN + safe.right),
        (None, Some(_)) => None,
    };
    let bottom = match (style.bottom, top) {
        (Some(b), _) => Some(b + safe.bottom),
        (None, None) => Some(FAB_MARGIN + safe.bottom),
        (None, Some(_)) => None,
    };
    (left, top, right, bottom)
}

pub(crate) fn FabRegion(cx: &RenderCx<'_>, region: Option<&Overridable<FabConfig>>) -> Option<View> {
    let p = prepare(cx, region)?;
    let cfg = &p.config;
    let style = p.style();
    let size = cfg.size.or(style.height).unwrap_or(FAB_SIZE);

    if let Some(render) = &cfg.render {
        return Some(render(&p.context(size, 0.0)));
    }

    let mut ops: Vec<TransformOp> = Vec::new();
    if let Some(deg) = cfg.rotation {
        ops.push(TransformOp::Rotate(deg));
    }
    if let Some(s) = cfg.scale {
        ops.push(TransformOp::Scale(s));
    }
    ops.extend(cfg.transform.iter().flatten().copied());

    let disabled = cfg.disabled.unwrap_or(false);
    let mut semantics = Semantics::new(Role::Button).enabled(!disabled);
    if let Some(label) = &cfg.accessibility_label {
        semantics = semantics.label(label.clone());
    }
    if let Some(hint) = &cfg.accessibility_hint {
        semantics = semantics.hint(hint.clone());
    }

    let (left, top, right, bottom) = fab_offsets(style, p.safe_area);
    let mut m = container_modifier(style, p.background, style.padding.unwrap_or_default())
        .absolute()
        .offset(left, top, right, bottom)
        .size(style.width.unwrap_or(size), size)
        .rounded(style.border_radius.unwrap_or(size / 2.0))
        .shadow(style.shadow.unwrap_or(FAB_SHADOW))
        .z_index(style.z_index.unwrap_or(10.0))
        .justify_content(JustifyContent::Center)
        .align_items(AlignItems::Center)
        .transforms(ops)
        .semantics(semantics)
        .test_tag(RegionKind::Fab.tag());
    if let Some(hook) = style.on_layout.clone() {
        m = m.on_layout(move |rect| hook(rect));
    }

    Some(
        Pressable(
            m,
            PressHandlers {
                on_press: cfg.on_press.clone(),
                on_long_press: cfg.on_long_press.clone(),
                on_press_in: cfg.on_press_in.clone(),
                on_press_out: cfg.on_press_out.clone(),
                disabled,
            },
        )
        .child(cfg.content.clone()),
    )
}
