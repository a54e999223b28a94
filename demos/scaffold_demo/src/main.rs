use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use screenkit::*;
use screenkit_core::*;

const SCREEN_WIDTH: f32 = 390.0;

struct App {
    active_tab: Rc<RefCell<TabId>>,
    sheet_open: Rc<Cell<bool>>,
}

impl App {
    fn config(&self) -> ScaffoldConfig {
        let active = self.active_tab.borrow().clone();
        let tab_state = self.active_tab.clone();
        let open_sheet = self.sheet_open.clone();
        let close_sheet = self.sheet_open.clone();

        ScaffoldConfig::new()
            .status_bar(StatusBarConfig::new().with_style(|s| s.adaptive_theme(true)))
            .app_bar(
                AppBarConfig::new()
                    .title("Mail")
                    .subtitle(format!("showing {active}"))
                    .on_back(|| log::info!("back pressed"))
                    .with_style(|s| s.adaptive_theme(true))
                    .ios(AppBarConfig::new().height(44.0)),
            )
            .top_nav(
                TopNavConfig::new()
                    .tabs(vec![
                        TabDescriptor::new("inbox", "Inbox"),
                        TabDescriptor::new("sent", "Sent"),
                        TabDescriptor::new("archive", "Archive").on_press(|| {
                            Err("archive is read-only in the demo".into())
                        }),
                    ])
                    .active_tab(active)
                    .on_tab_change(move |id| {
                        *tab_state.borrow_mut() = id.clone();
                        Ok(())
                    }),
            )
            .body(
                BodyConfig::new()
                    .content(Column(Modifier::new()).child(
                        (0..40)
                            .map(|i| Text(format!("Message {i}")))
                            .collect::<Vec<_>>(),
                    ))
                    .on_scroll(|y| log::debug!("scrolled to {y}"))
                    .scroll_indicator(|g| {
                        Box(Modifier::new()
                            .width(3.0)
                            .height(g.indicator_height)
                            .offset(None, Some(g.indicator_position), Some(2.0), None)
                            .background(Color::from_rgb_opacity(0, 0, 0, 0.4)))
                    }),
            )
            .fab(
                FabConfig::new()
                    .content(Text("+").size(24.0))
                    .accessibility_label("Compose")
                    .on_press(move || open_sheet.set(true)),
            )
            .bottom_sheet(
                BottomSheetConfig::new()
                    .visible(self.sheet_open.get())
                    .header(Text("New message").weight(FontWeight::Bold))
                    .content(Text("To: ..."))
                    .on_dismiss(move || close_sheet.set(false))
                    .with_style(|s| {
                        s.use_safe_area(true)
                            .safe_area_insets(EdgeInsets::bottom(34.0))
                    }),
            )
    }
}

/// Stand-in for a real host: every measured node lays out at its requested
/// height and the body content reports `content_height`.
fn fake_layout(root: &View, viewport: f32, content_height: f32) {
    root.walk(&mut |v| {
        if let Some(on_layout) = &v.modifier.on_layout {
            let h = v.modifier.height.unwrap_or(viewport);
            on_layout(Rect {
                x: 0.0,
                y: 0.0,
                w: SCREEN_WIDTH,
                h,
            });
        }
        if let ViewKind::Scroll {
            horizontal: false,
            on_content_size: Some(f),
            ..
        } = &v.kind
        {
            f(Size {
                width: SCREEN_WIDTH,
                height: content_height,
            });
        }
    });
}

fn find<'a>(root: &'a View, tag: &str) -> Result<&'a View> {
    root.find_by_tag(tag)
        .with_context(|| format!("no node tagged {tag}"))
}

fn press(root: &View, tag: &str) -> Result<()> {
    match &find(root, tag)?.kind {
        ViewKind::Pressable {
            on_press: Some(f),
            disabled: false,
            ..
        } => {
            f();
            Ok(())
        }
        _ => bail!("{tag} cannot be pressed"),
    }
}

fn scroll(root: &View, y: f32) -> Result<()> {
    match &find(root, "body.scroll")?.kind {
        ViewKind::Scroll {
            on_scroll: Some(f), ..
        } => {
            f(y);
            Ok(())
        }
        _ => bail!("body is not scrollable"),
    }
}

fn describe(root: &View) {
    root.walk(&mut |v| {
        let Some(tag) = &v.modifier.test_tag else {
            return;
        };
        if tag.starts_with("scaffold.") {
            log::info!(
                "{tag}: height={:?} background={:?} transform={:?}",
                v.modifier.height,
                v.modifier.background,
                v.modifier.folded_transform()
            );
        }
    });
    for request in root.system_bar_requests() {
        log::info!("native status bar: {request:?}");
    }
}

fn run(app: &App) -> Result<()> {
    let state = ScaffoldState::for_config(&app.config(), &Environment::current());

    let root = Scaffold(&app.config(), &state);
    describe(&root);

    fake_layout(&root, 600.0, 2400.0);
    scroll(&root, 900.0)?;
    let indicator = state.snapshot().indicator();
    log::info!(
        "scrolled {:.0}% (indicator {:.0}px at {:.0}px)",
        indicator.scroll_percentage,
        indicator.indicator_height,
        indicator.indicator_position
    );

    press(&root, "top_nav.tab.archive")?;
    press(&root, "top_nav.tab.sent")?;
    log::info!("active tab: {}", app.active_tab.borrow());

    press(&root, "scaffold.fab")?;
    let mut frames = 0;
    let root = loop {
        let root = Scaffold(&app.config(), &state);
        frames += 1;
        if !state.is_animating() {
            break root;
        }
        if frames > 120 {
            bail!("bottom sheet animation did not settle");
        }
        std::thread::sleep(Duration::from_millis(16));
    };
    log::info!(
        "sheet open after {frames} frames, offset {}",
        state.sheet_offset()
    );

    press(&root, "bottom_sheet.overlay")?;
    let root = Scaffold(&app.config(), &state);
    if root.find_by_tag("scaffold.bottom_sheet").is_some() {
        bail!("sheet still rendered after dismiss");
    }
    log::info!("sheet dismissed");
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = App {
        active_tab: Rc::new(RefCell::new(TabId::from("inbox"))),
        sheet_open: Rc::new(Cell::new(false)),
    };

    for platform in [Platform::Ios, Platform::Android] {
        log::info!("--- {platform:?} ---");
        with_platform(platform, || {
            with_color_scheme(Some(ColorScheme::Dark), || run(&app))
        })?;
    }
    Ok(())
}
