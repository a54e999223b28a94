use screenkit_core::{Environment, Modifier, View, ViewKind};

use crate::regions::{
    AppBarRegion, BodyRegion, BottomNavRegion, BottomSheetRegion, FabRegion, RenderCx,
    StatusBarRegion, TopNavRegion,
};
use crate::widgets::*;
use crate::{ScaffoldConfig, ScaffoldState, remember_scaffold_state};

/// Composes a full screen from `config`.
///
/// The system color scheme and writing direction are read once per call
/// from the ambient [`Environment`]. Measurement, scroll and press events
/// emitted by the returned tree feed back into `state`; call again after
/// they fire (or while [`ScaffoldState::is_animating`]) to pick them up.
///
/// Layout, back to front: the native status bar request, a column of
/// status bar / app bar / top nav / body / bottom nav, then the FAB and
/// the bottom sheet layered on top.
pub fn Scaffold(config: &ScaffoldConfig, state: &ScaffoldState) -> View {
    let env = Environment::current();
    let cx = RenderCx {
        env,
        layout: state.snapshot(),
        state,
    };

    let status = StatusBarRegion(&cx, config.status_bar.as_ref());
    let app_bar = AppBarRegion(&cx, config.app_bar.as_ref());
    let top_nav = TopNavRegion(&cx, config.top_nav.as_ref());
    let body = BodyRegion(&cx, config.body.as_ref());
    let bottom_nav = BottomNavRegion(&cx, config.bottom_nav.as_ref());
    let fab = FabRegion(&cx, config.fab.as_ref());
    let sheet = BottomSheetRegion(&cx, config.bottom_sheet.as_ref());

    log::debug!(
        "scaffold render: platform={:?} scheme={:?} app_bar={} top_nav={} bottom_nav={} fab={} sheet={}",
        env.platform,
        env.color_scheme,
        app_bar.is_some(),
        top_nav.is_some(),
        bottom_nav.is_some(),
        fab.is_some(),
        sheet.is_some(),
    );

    Stack(Modifier::new().fill_max_size().test_tag("scaffold")).child((
        status.request.map(|r| View::new(0, ViewKind::SystemBar(r))),
        Column(Modifier::new().fill_max_size().test_tag("scaffold.column"))
            .child((status.view, app_bar, top_nav, body, bottom_nav)),
        fab,
        sheet,
    ))
}

/// [`Scaffold`] with its state kept in the composition slot for `key`.
pub fn KeyedScaffold(key: &str, config: &ScaffoldConfig) -> View {
    let state = remember_scaffold_state(key, config);
    Scaffold(config, &state)
}
