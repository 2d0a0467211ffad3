#[cfg(test)]
mod tests {
    use crate::config::NotificationConfig;
    use crate::models::SubmissionResult;
    use crate::notification::{Animation, InMemorySurface, Notifier, Severity};
    use serde_json::json;
    use std::time::Duration;
    use tokio::time::sleep;

    fn notifier() -> Notifier<InMemorySurface> {
        Notifier::new(InMemorySurface::new(), NotificationConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_mounts_element_immediately() {
        let notifier = notifier();

        let handle = notifier.show("Saved", Severity::Success);

        let element = notifier.surface().get(handle.id()).expect("mounted");
        assert_eq!(element.message, "Saved");
        assert_eq!(element.class_name(), "notification notification-success");
        assert_eq!(element.animation, Animation::SlideIn);
        assert!(notifier.surface().render_html().contains(">Saved</div>"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_then_remove_timeline() {
        let notifier = notifier();
        let handle = notifier.show("Saved", Severity::Success);
        let id = handle.id();

        sleep(Duration::from_millis(3990)).await;
        let element = notifier.surface().get(id).expect("still mounted");
        assert_eq!(element.animation, Animation::SlideIn);

        sleep(Duration::from_millis(20)).await;
        let element = notifier.surface().get(id).expect("still mounted while dismissing");
        assert!(element.is_dismissing());
        assert!(element.style_css().contains("animation: slideOut 0.3s ease"));

        sleep(Duration::from_millis(280)).await;
        assert!(notifier.surface().get(id).is_some());

        sleep(Duration::from_millis(30)).await;
        assert!(notifier.surface().get(id).is_none());
        assert!(notifier.surface().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_resolves_after_total_duration() {
        let notifier = notifier();
        let start = tokio::time::Instant::now();

        let handle = notifier.show("Saved", Severity::Success);
        handle.dismissed().await;

        let total = NotificationConfig::default().total_duration();
        assert!(start.elapsed() >= total);
        assert!(start.elapsed() < total + Duration::from_millis(10));
        assert!(notifier.surface().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_notifications_stack() {
        let notifier = notifier();

        let first = notifier.success("One");
        let second = notifier.error("Two");
        let third = notifier.success("One");

        assert_eq!(notifier.surface().len(), 3);
        let classes: Vec<String> = notifier
            .surface()
            .elements()
            .iter()
            .map(|n| n.class_name())
            .collect();
        assert_eq!(
            classes,
            vec![
                "notification notification-success",
                "notification notification-error",
                "notification notification-success",
            ]
        );

        first.dismissed().await;
        second.dismissed().await;
        third.dismissed().await;
        assert!(notifier.surface().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_staggered_notifications_are_removed_independently() {
        let notifier = notifier();

        let early = notifier.success("early");
        sleep(Duration::from_millis(1000)).await;
        let late = notifier.success("late");

        sleep(Duration::from_millis(3400)).await;
        assert!(notifier.surface().get(early.id()).is_none());
        assert!(notifier.surface().get(late.id()).is_some());

        late.dismissed().await;
        assert!(notifier.surface().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_durations() {
        let config = NotificationConfig {
            display_ms: 100,
            transition_ms: 50,
        };
        let notifier = Notifier::new(InMemorySurface::new(), config);
        let start = tokio::time::Instant::now();

        let handle = notifier.error("quick");
        let element = notifier.surface().get(handle.id()).unwrap();
        assert!(element.style_css().contains("animation: slideIn 0.05s ease"));

        handle.dismissed().await;
        assert!(start.elapsed() >= Duration::from_millis(150));
        assert!(start.elapsed() < Duration::from_millis(160));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_result() {
        let notifier = notifier();

        let ok = notifier.show_result(&SubmissionResult::success(json!({"id": 1})), "Pitch sent");
        let failed = notifier.show_result(
            &SubmissionResult::failure("HTTP error! status: 500"),
            "Pitch sent",
        );

        let ok = notifier.surface().get(ok.id()).unwrap();
        assert_eq!(ok.severity, Severity::Success);
        assert_eq!(ok.message, "Pitch sent");

        let failed = notifier.surface().get(failed.id()).unwrap();
        assert_eq!(failed.severity, Severity::Error);
        assert_eq!(failed.message, "HTTP error! status: 500");
    }

    #[tokio::test(start_paused = true)]
    async fn test_removed_surface_element_tolerates_late_timers() {
        let notifier = notifier();
        let handle = notifier.success("gone early");

        crate::notification::NotificationSurface::remove(notifier.surface(), handle.id());
        handle.dismissed().await;

        assert!(notifier.surface().is_empty());
    }
}
