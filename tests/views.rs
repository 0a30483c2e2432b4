



/// Plays every scenario on a freshly seeded inbox, and checks what the user would see afterwards
#[test]
fn test_scenarii() {
    let _ = env_logger::builder().is_test(true).try_init();

    for scenario in scenarii::basic_scenarii() {
        log::info!("Running scenario \"{}\"", scenario.name);
        let mut inbox = scenarii::populate_inbox(&scenario);
        scenarii::apply_steps(&mut inbox, &scenario);
        scenarii::check_outcome(&inbox, &scenario);
    }
}

#[test]
fn test_filtered_view_is_restartable() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut inbox = dashboard_views::data::inbox().unwrap();
    inbox.set_filter("starred");

    let first: Vec<_> = inbox.filtered_view().collect();
    let second: Vec<_> = inbox.filtered_view().collect();
    assert_eq!(first, second);

    // A partially consumed view does not affect a new one
    let mut partial = inbox.filtered_view();
    partial.next();
    assert_eq!(inbox.filtered_view().count(), first.len());
    assert_eq!(partial.count(), first.len() - 1);
}
