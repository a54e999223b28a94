#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::Cell::new(0));

        let seen_clone = seen.clone();
        let id = sig.subscribe(move |v| seen_clone.set(*v));

        sig.set(7);
        assert_eq!(seen.get(), 7);

        sig.unsubscribe(id);
        sig.set(9);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_signal_subscriber_reenters_signal() {
        let sig = signal(0);
        let seen = std::rc::Rc::new(std::cell::Cell::new(-1));
        let late = std::rc::Rc::new(std::cell::Cell::new(-1));

        let (s, sig2) = (seen.clone(), sig.clone());
        sig.subscribe(move |_| s.set(sig2.get()));
        let (l, sig3) = (late.clone(), sig.clone());
        sig.subscribe(move |v| {
            if *v == 1 {
                let l = l.clone();
                sig3.subscribe(move |v| l.set(*v));
            }
        });

        sig.set(1);
        assert_eq!(seen.get(), 1);
        assert_eq!(late.get(), -1);

        sig.update(|v| *v += 1);
        assert_eq!(seen.get(), 2);
        assert_eq!(late.get(), 2);
    }

    #[test]
    fn test_signal_subscriber_can_write_back() {
        let sig = signal(0);
        let sig2 = sig.clone();
        sig.subscribe(move |v| {
            if *v < 3 {
                sig2.set(*v + 1);
            }
        });
        sig.set(0);
        assert_eq!(sig.get(), 3);
    }

    #[test]
    fn test_key_based_remember() {
        let val1 = remember_with_key("core-test", || 42);
        let val2 = remember_with_key("core-test", || 100);

        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // key already present

        assert!(forget("core-test"));
        let val3 = remember_with_key("core-test", || 100);
        assert_eq!(*val3, 100);
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
        assert_eq!(Color::from_hex("nope"), Color::BLACK);
        assert_eq!(Color::from_rgb_opacity(0, 0, 0, 0.5), Color(0, 0, 0, 128));
    }

    #[test]
    fn test_edge_insets_only() {
        let insets = EdgeInsets {
            left: 1.0,
            right: 2.0,
            top: 3.0,
            bottom: 4.0,
        };
        let kept = insets.only(Edges::TOP | Edges::BOTTOM);
        assert_eq!(kept, EdgeInsets { left: 0.0, right: 0.0, top: 3.0, bottom: 4.0 });
        assert_eq!(insets.only(Edges::default()), insets);
    }

    #[test]
    fn test_transform_ops_fold() {
        let t = Transform::from_ops(&[
            TransformOp::Rotate(90.0),
            TransformOp::Scale(2.0),
            TransformOp::TranslateY(5.0),
        ]);
        assert!((t.rotate - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(t.scale_x, 2.0);
        assert_eq!(t.scale_y, 2.0);
        assert_eq!(t.translate_y, 5.0);

        let m = Modifier::new()
            .transform(TransformOp::Rotate(90.0))
            .transform(TransformOp::Scale(2.0))
            .translate_y(5.0);
        assert_eq!(m.folded_transform(), t);
        assert_eq!(Modifier::new().folded_transform(), Transform::identity());
    }

    #[test]
    fn test_locals_nesting() {
        assert_eq!(color_scheme(), None);
        with_color_scheme(Some(ColorScheme::Dark), || {
            assert_eq!(color_scheme(), Some(ColorScheme::Dark));
            with_color_scheme(Some(ColorScheme::Light), || {
                assert_eq!(color_scheme(), Some(ColorScheme::Light));
            });
            assert_eq!(color_scheme(), Some(ColorScheme::Dark));
        });
        assert_eq!(color_scheme(), None);
    }

    #[test]
    fn test_status_bar_height_follows_platform() {
        with_platform(Platform::Ios, || assert_eq!(status_bar_height(), 44.0));
        with_platform(Platform::Android, || {
            assert_eq!(status_bar_height(), 24.0);
            with_status_bar_height(30.0, || assert_eq!(Environment::current().status_bar_height, 30.0));
        });
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0);

        set_clock(TestClock {
            t: t0 + Duration::from_millis(250),
        });
        assert!(a.update());
        assert!((*a.get() - 2.5).abs() < 0.01);

        set_clock(TestClock {
            t: t0 + Duration::from_millis(1000),
        });
        assert!(!a.update());
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_clock_defaults_to_system_time() {
        let before = Instant::now();
        let t = crate::animation::now();
        assert!(t >= before);
        assert!(t <= SystemClock.now());
    }

    #[test]
    fn test_animation_retarget_starts_from_current() {
        let t0 = Instant::now();
        set_clock(TestClock { t: t0 });

        let mut a = AnimatedValue::new(
            100.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(0.0);
        set_clock(TestClock {
            t: t0 + Duration::from_millis(50),
        });
        a.set_target(100.0);
        assert!((*a.get() - 50.0).abs() < 0.01);

        set_clock(TestClock {
            t: t0 + Duration::from_millis(150),
        });
        assert!(!a.update());
        assert_eq!(*a.get(), 100.0);
    }

    #[test]
    fn test_view_find_by_tag() {
        let tree = View::new(0, ViewKind::Column).with_children(vec![
            View::new(0, ViewKind::Box).modifier(Modifier::new().test_tag("a")),
            View::new(0, ViewKind::Row).with_children(vec![
                View::new(0, ViewKind::Box).modifier(Modifier::new().test_tag("b").height(3.0)),
            ]),
        ]);
        assert!(tree.find_by_tag("a").is_some());
        assert_eq!(tree.find_by_tag("b").and_then(|v| v.modifier.height), Some(3.0));
        assert!(tree.find_by_tag("c").is_none());
        assert_eq!(tree.find_all(|v| matches!(v.kind, ViewKind::Box)).len(), 2);
    }
}
