use std::cell::{Cell, RefCell};
use std::rc::Rc;

use screenkit_core::animation::{TestClock, set_clock};
use screenkit_core::*;
use web_time::{Duration, Instant};

use crate::*;

fn render(config: &ScaffoldConfig) -> (View, ScaffoldState) {
    let state = ScaffoldState::for_config(config, &Environment::current());
    (Scaffold(config, &state), state)
}

fn tagged<'a>(root: &'a View, tag: &str) -> &'a View {
    root.find_by_tag(tag)
        .unwrap_or_else(|| panic!("no view tagged {tag}"))
}

fn press(view: &View) {
    match &view.kind {
        ViewKind::Pressable {
            on_press: Some(f), ..
        } => f(),
        other => panic!("expected a pressable with on_press, got {other:?}"),
    }
}

fn layout(view: &View, h: f32) {
    let f = view.modifier.on_layout.as_ref().expect("on_layout");
    f(Rect { x: 0.0, y: 0.0, w: 360.0, h });
}

#[test]
fn empty_config_renders_always_present_regions() {
    let (root, _) = render(&ScaffoldConfig::new());

    assert!(root.find_by_tag("scaffold.status_bar").is_some());
    assert!(root.find_by_tag("scaffold.app_bar").is_some());
    assert!(root.find_by_tag("scaffold.body").is_some());
    for tag in [
        "scaffold.top_nav",
        "scaffold.bottom_nav",
        "scaffold.fab",
        "scaffold.bottom_sheet",
    ] {
        assert!(root.find_by_tag(tag).is_none(), "{tag} should be absent");
    }

    let requests = root.system_bar_requests();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].hidden);
}

#[test]
fn optional_regions_render_once_configured() {
    let config = ScaffoldConfig::new()
        .bottom_nav(BottomNavConfig::new().content(Text("Home")))
        .fab(FabConfig::new().content(Text("+")));
    let (root, _) = render(&config);

    assert!(root.find_by_tag("scaffold.bottom_nav").is_some());
    assert!(root.find_by_tag("scaffold.fab").is_some());
}

#[test]
fn hidden_regions_render_nothing() {
    let config = ScaffoldConfig::new()
        .app_bar(AppBarConfig::new().title("Inbox").hidden(true))
        .bottom_nav(BottomNavConfig::new().hidden(true))
        .fab(FabConfig::new().hidden(true));
    let (root, _) = render(&config);

    assert!(root.find_by_tag("scaffold.app_bar").is_none());
    assert!(root.find_by_tag("app_bar.title").is_none());
    assert!(root.find_by_tag("scaffold.bottom_nav").is_none());
    assert!(root.find_by_tag("scaffold.fab").is_none());
    assert!(root.find_by_tag("scaffold.body").is_some());
}

#[test]
fn hidden_status_bar_only_asks_the_host_to_hide() {
    let config = ScaffoldConfig::new()
        .status_bar(StatusBarConfig::new().hidden(true).animated(true))
        .app_bar(AppBarConfig::new().title("Inbox"));
    let (root, _) = render(&config);

    assert!(root.find_by_tag("scaffold.status_bar").is_none());
    assert!(root.find_by_tag("scaffold.app_bar").is_some());
    assert!(root.find_by_tag("scaffold.body").is_some());

    let requests = root.system_bar_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].hidden);
    assert!(requests[0].animated);
}

#[test]
fn custom_renderer_replaces_default_visual() {
    let seen = Rc::new(Cell::new(None));
    let s = seen.clone();
    let config = ScaffoldConfig::new().app_bar(
        AppBarConfig::new()
            .title("ignored")
            .render(move |cx| {
                s.set(Some((cx.region, cx.height)));
                Text("custom").modifier(Modifier::new().test_tag("custom_app_bar"))
            }),
    );
    let (root, _) = render(&config);

    assert!(root.find_by_tag("custom_app_bar").is_some());
    assert!(root.find_by_tag("scaffold.app_bar").is_none());
    assert!(root.find_by_tag("app_bar.title").is_none());
    assert_eq!(seen.get(), Some((RegionKind::AppBar, 56.0)));
}

#[test]
fn custom_status_bar_owns_the_native_bar() {
    let config = ScaffoldConfig::new()
        .status_bar(StatusBarConfig::new().render(|_| Text("clock")));
    let (root, _) = render(&config);

    assert!(root.system_bar_requests().is_empty());
    assert!(root.find_all(|v| v.text() == Some("clock")).len() == 1);
}

#[test]
fn platform_override_applies_on_its_platform_only() {
    let config = ScaffoldConfig::new().app_bar(
        AppBarConfig::new()
            .title("Inbox")
            .height(56.0)
            .ios(AppBarConfig::new().height(44.0)),
    );

    let ios = with_platform(Platform::Ios, || render(&config).0);
    assert_eq!(tagged(&ios, "scaffold.app_bar").modifier.height, Some(44.0));

    let android = with_platform(Platform::Android, || render(&config).0);
    assert_eq!(tagged(&android, "scaffold.app_bar").modifier.height, Some(56.0));
}

#[test]
fn rtl_flag_beats_system_direction() {
    let flagged = ScaffoldConfig::new().app_bar(AppBarConfig::new().title("A").rtl(true));
    let (root, _) = render(&flagged);
    assert_eq!(
        tagged(&root, "app_bar.row").modifier.flex_dir,
        Some(FlexDirection::RowReverse)
    );

    let plain = ScaffoldConfig::new().app_bar(AppBarConfig::new().title("A"));
    let root = with_text_direction(TextDirection::Rtl, || render(&plain).0);
    assert_eq!(
        tagged(&root, "app_bar.row").modifier.flex_dir,
        Some(FlexDirection::RowReverse)
    );

    let forced_ltr = ScaffoldConfig::new().app_bar(AppBarConfig::new().title("A").rtl(false));
    let root = with_text_direction(TextDirection::Rtl, || render(&forced_ltr).0);
    assert_eq!(
        tagged(&root, "app_bar.row").modifier.flex_dir,
        Some(FlexDirection::Row)
    );
}

#[test]
fn safe_area_pads_region_and_is_excluded_from_measurement() {
    let config = ScaffoldConfig::new().app_bar(AppBarConfig::new().title("A").with_style(|s| {
        s.use_safe_area(true)
            .safe_area_insets(EdgeInsets::top(20.0))
            .padding(EdgeInsets::all(4.0))
    }));
    let (root, state) = render(&config);
    let bar = tagged(&root, "scaffold.app_bar");

    assert_eq!(bar.modifier.height, Some(76.0));
    assert_eq!(bar.modifier.padding.map(|p| p.top), Some(24.0));
    assert_eq!(bar.modifier.padding.map(|p| p.left), Some(4.0));

    layout(bar, 84.0);
    assert_eq!(state.snapshot().app_bar_height, 64.0);
}

#[test]
fn safe_area_ignored_when_disabled() {
    let config = ScaffoldConfig::new().app_bar(
        AppBarConfig::new()
            .title("A")
            .with_style(|s| s.safe_area_insets(EdgeInsets::top(20.0))),
    );
    let (root, _) = render(&config);
    let bar = tagged(&root, "scaffold.app_bar");

    assert_eq!(bar.modifier.height, Some(56.0));
    assert_eq!(bar.modifier.padding.map(|p| p.top), Some(0.0));
}

#[test]
fn region_measurement_reaches_caller_hook() {
    let measured = Rc::new(Cell::new(0.0));
    let m = measured.clone();
    let config = ScaffoldConfig::new().bottom_nav(
        BottomNavConfig::new()
            .content(Text("Home"))
            .with_style(|s| s.on_layout(move |r: Rect| m.set(r.h))),
    );
    let (root, state) = render(&config);

    layout(tagged(&root, "scaffold.bottom_nav"), 72.0);
    assert_eq!(measured.get(), 72.0);
    assert_eq!(state.snapshot().bottom_nav_height, 72.0);

    let again = Scaffold(&config, &state);
    assert_eq!(tagged(&again, "scaffold.bottom_nav").modifier.height, Some(72.0));
}

#[test]
fn adaptive_theme_paints_dark_backgrounds() {
    let config = ScaffoldConfig::new()
        .app_bar(
            AppBarConfig::new()
                .title("A")
                .with_style(|s| s.adaptive_theme(true)),
        )
        .status_bar(StatusBarConfig::new().with_style(|s| s.adaptive_theme(true)));
    let root = with_color_scheme(Some(ColorScheme::Dark), || render(&config).0);

    assert_eq!(
        tagged(&root, "scaffold.app_bar").modifier.background,
        Some(theme::DARK_BACKGROUND)
    );
    let req = root.system_bar_requests()[0];
    assert_eq!(req.content_style, BarContentStyle::LightContent);
    assert_eq!(req.background, theme::DARK_BACKGROUND);
}

#[test]
fn auto_detect_only_switches_status_bar_content() {
    let config = ScaffoldConfig::new().status_bar(
        StatusBarConfig::new()
            .background_color(Color::from_hex("#FF0000"))
            .with_style(|s| s.auto_detect_theme(true)),
    );
    let root = with_color_scheme(Some(ColorScheme::Light), || render(&config).0);

    let req = root.system_bar_requests()[0];
    assert_eq!(req.content_style, BarContentStyle::DarkContent);
    assert_eq!(req.background, Color::from_hex("#FF0000"));
}

#[test]
fn tab_change_fires_even_when_tab_callback_fails() {
    let changed = Rc::new(RefCell::new(Vec::new()));
    let c = changed.clone();
    let pressed = Rc::new(Cell::new(0));
    let p = pressed.clone();

    let config = ScaffoldConfig::new().top_nav(
        TopNavConfig::new()
            .tabs(vec![
                TabDescriptor::new("inbox", "Inbox").on_press(move || {
                    p.set(p.get() + 1);
                    Err("tab handler exploded".into())
                }),
                TabDescriptor::new("sent", "Sent").on_press(|| panic!("boom")),
            ])
            .on_tab_change(move |id| {
                c.borrow_mut().push(id.to_string());
                Ok(())
            }),
    );
    let (root, _) = render(&config);

    press(tagged(&root, "top_nav.tab.inbox"));
    press(tagged(&root, "top_nav.tab.sent"));

    assert_eq!(pressed.get(), 1);
    assert_eq!(*changed.borrow(), vec!["inbox".to_string(), "sent".to_string()]);
}

#[test]
fn failing_tab_change_does_not_escape() {
    let tab = TabDescriptor::new("a", "A");
    let on_change: TabChangeCallback = Rc::new(|_: &TabId| -> CallbackResult { Err("nope".into()) });
    let handler = tab_press_handler(&tab, Some(on_change));
    handler();
}

#[test]
fn numeric_and_text_tab_ids_select_the_same_tab() {
    let config = ScaffoldConfig::new().top_nav(
        TopNavConfig::new()
            .tabs(vec![
                TabDescriptor::new(1i64, "One"),
                TabDescriptor::new(2i64, "Two"),
            ])
            .active_tab("2"),
    );
    let (root, _) = render(&config);

    let selected = |tag: &str| {
        tagged(&root, tag)
            .modifier
            .semantics
            .as_ref()
            .map(|s| s.selected)
    };
    assert_eq!(selected("top_nav.tab.1"), Some(false));
    assert_eq!(selected("top_nav.tab.2"), Some(true));
    assert_eq!(root.find_all(|v| v.modifier.test_tag.as_deref() == Some("top_nav.indicator")).len(), 1);
    assert!(tagged(&root, "top_nav.tab.2").find_by_tag("top_nav.indicator").is_some());
}

#[test]
fn scrollable_tabs_use_a_horizontal_strip() {
    let config = ScaffoldConfig::new().top_nav(
        TopNavConfig::new()
            .tabs(vec![TabDescriptor::new("a", "A")])
            .scrollable(true)
            .show_indicator(false),
    );
    let (root, _) = render(&config);

    match &tagged(&root, "top_nav.scroll").kind {
        ViewKind::Scroll { horizontal, .. } => assert!(*horizontal),
        other => panic!("expected scroll, got {other:?}"),
    }
    assert!(root.find_by_tag("top_nav.indicator").is_none());
}

#[test]
fn body_scroll_feeds_state_and_indicator() {
    let scrolled = Rc::new(Cell::new(0.0));
    let s = scrolled.clone();
    let config = ScaffoldConfig::new().body(
        BodyConfig::new()
            .content(Text("long"))
            .on_scroll(move |y| s.set(y))
            .scroll_indicator(|g| {
                Box(Modifier::new()
                    .height(g.indicator_height)
                    .offset(None, Some(g.indicator_position), None, None))
            }),
    );
    let (root, state) = render(&config);
    assert!(root.find_by_tag("body.indicator").is_none());

    let scroll = tagged(&root, "body.scroll");
    let ViewKind::Scroll {
        on_scroll: Some(on_scroll),
        on_content_size: Some(on_content_size),
        shows_indicator,
        ..
    } = &scroll.kind
    else {
        panic!("body should scroll");
    };
    assert!(!shows_indicator);

    layout(scroll, 500.0);
    on_content_size(Size {
        width: 360.0,
        height: 2000.0,
    });
    on_scroll(750.0);

    assert_eq!(scrolled.get(), 750.0);
    assert_eq!(state.scroll_offset().get(), 750.0);
    let geometry = state.snapshot().indicator();
    assert_eq!(geometry.scroll_percentage, 50.0);
    assert_eq!(geometry.indicator_height, 125.0);

    let again = Scaffold(&config, &state);
    let overlay = tagged(&again, "body.indicator");
    assert_eq!(overlay.children[0].modifier.height, Some(125.0));
}

#[test]
fn custom_body_receives_scroll_metrics() {
    let config = ScaffoldConfig::new().body(BodyConfig::new().render(|cx| {
        Text(format!("{}/{}", cx.scroll_offset, cx.content_height))
    }));
    let state = ScaffoldState::new(LayoutState::default());
    state.dispatch(LayoutMsg::ContentMeasured(900.0));
    state.dispatch(LayoutMsg::Scrolled(30.0));

    let root = Scaffold(&config, &state);
    assert_eq!(root.find_all(|v| v.text() == Some("30/900")).len(), 1);
    assert!(root.find_by_tag("body.scroll").is_none());
}

#[test]
fn static_body_when_scrolling_disabled() {
    let config =
        ScaffoldConfig::new().body(BodyConfig::new().content(Text("x")).scroll_enabled(false));
    let (root, _) = render(&config);

    assert!(root.find_by_tag("body.scroll").is_none());
    assert_eq!(tagged(&root, "scaffold.body").children.len(), 1);
}

#[test]
fn fab_defaults_and_transform_order() {
    let config = ScaffoldConfig::new().fab(
        FabConfig::new()
            .content(Text("+"))
            .rotation(45.0)
            .scale(1.5)
            .transform(vec![TransformOp::TranslateX(4.0)])
            .accessibility_label("Compose"),
    );
    let (root, _) = render(&config);
    let fab = tagged(&root, "scaffold.fab");
    let m = &fab.modifier;

    assert_eq!(
        m.transform.as_slice(),
        &[
            TransformOp::Rotate(45.0),
            TransformOp::Scale(1.5),
            TransformOp::TranslateX(4.0)
        ]
    );
    assert_eq!((m.offset_right, m.offset_bottom), (Some(16.0), Some(16.0)));
    assert_eq!(m.offset_left, None);
    assert_eq!(m.corner_radii, Some(CornerRadii::all(28.0)));
    assert_eq!(m.z_index, 10.0);
    assert_eq!(m.background, Some(Color::from_hex("#2196F3")));
    assert_eq!(
        m.semantics.as_ref().and_then(|s| s.label.clone()),
        Some("Compose".to_string())
    );
}

#[test]
fn fab_offsets_follow_the_safe_area() {
    let config = ScaffoldConfig::new().fab(FabConfig::new().with_style(|s| {
        s.use_safe_area(true)
            .safe_area_insets(EdgeInsets {
                left: 0.0,
                right: 8.0,
                top: 0.0,
                bottom: 34.0,
            })
            .left(24.0)
    }));
    let (root, _) = render(&config);
    let m = &tagged(&root, "scaffold.fab").modifier;

    assert_eq!(m.offset_left, Some(24.0));
    assert_eq!(m.offset_right, None);
    assert_eq!(m.offset_bottom, Some(50.0));
}

#[test]
fn fab_is_never_themed() {
    let config = ScaffoldConfig::new().fab(FabConfig::new().with_style(|s| s.adaptive_theme(true)));
    let root = with_color_scheme(Some(ColorScheme::Dark), || render(&config).0);

    assert_eq!(
        tagged(&root, "scaffold.fab").modifier.background,
        Some(Color::from_hex("#2196F3"))
    );
}

#[test]
fn bottom_sheet_slides_in_and_out() {
    let t0 = Instant::now();
    set_clock(TestClock { t: t0 });

    let sheet = |visible: bool| {
        ScaffoldConfig::new().bottom_sheet(
            BottomSheetConfig::new()
                .visible(visible)
                .content(Text("sheet")),
        )
    };
    let panel_offset = |root: &View| tagged(root, "bottom_sheet.panel").modifier.transform[0];

    let state = ScaffoldState::for_config(&sheet(false), &Environment::current());
    let root = Scaffold(&sheet(false), &state);
    assert!(root.find_by_tag("scaffold.bottom_sheet").is_none());

    let root = Scaffold(&sheet(true), &state);
    assert_eq!(panel_offset(&root), TransformOp::TranslateY(1000.0));
    assert!(state.is_animating());

    set_clock(TestClock {
        t: t0 + Duration::from_millis(300),
    });
    let root = Scaffold(&sheet(true), &state);
    assert_eq!(panel_offset(&root), TransformOp::TranslateY(0.0));
    assert!(!state.is_animating());

    let root = Scaffold(&sheet(false), &state);
    assert!(root.find_by_tag("scaffold.bottom_sheet").is_none());
    assert!(state.is_animating());

    set_clock(TestClock {
        t: t0 + Duration::from_millis(600),
    });
    assert_eq!(state.sheet_offset(), 1000.0);
}

#[test]
fn bottom_sheet_respects_configured_duration_and_distance() {
    let t0 = Instant::now();
    set_clock(TestClock { t: t0 });
    let config = ScaffoldConfig::new().bottom_sheet(
        BottomSheetConfig::new()
            .visible(true)
            .animation_ms(100u64)
            .slide_distance(400.0),
    );
    let state = ScaffoldState::new(LayoutState::default());
    Scaffold(&config, &state);

    set_clock(TestClock {
        t: t0 + Duration::from_millis(100),
    });
    assert_eq!(state.sheet_offset(), 0.0);

    let hidden = ScaffoldConfig::new().bottom_sheet(
        BottomSheetConfig::new()
            .visible(false)
            .animation_ms(100u64)
            .slide_distance(400.0),
    );
    Scaffold(&hidden, &state);
    set_clock(TestClock {
        t: t0 + Duration::from_millis(200),
    });
    assert_eq!(state.sheet_offset(), 400.0);
}

#[test]
fn overlay_press_dismisses_when_enabled() {
    let dismissed = Rc::new(Cell::new(false));
    let d = dismissed.clone();
    let config = ScaffoldConfig::new().bottom_sheet(
        BottomSheetConfig::new()
            .visible(true)
            .on_dismiss(move || d.set(true)),
    );
    let (root, _) = render(&config);
    press(tagged(&root, "bottom_sheet.overlay"));
    assert!(dismissed.get());

    let sticky = ScaffoldConfig::new().bottom_sheet(
        BottomSheetConfig::new()
            .visible(true)
            .dismiss_on_overlay_press(false)
            .on_dismiss(|| panic!("should not dismiss")),
    );
    let (root, _) = render(&sticky);
    match &tagged(&root, "bottom_sheet.overlay").kind {
        ViewKind::Pressable { on_press, .. } => assert!(on_press.is_none()),
        other => panic!("expected pressable, got {other:?}"),
    }
}

#[test]
fn keyed_scaffold_keeps_state_between_renders() {
    let config = ScaffoldConfig::new();
    KeyedScaffold("inbox", &config);
    remember_scaffold_state("inbox", &config).dispatch(LayoutMsg::Scrolled(42.0));

    assert_eq!(
        remember_scaffold_state("inbox", &config).snapshot().scroll_offset,
        42.0
    );
    assert!(forget("scaffold:inbox"));
}
