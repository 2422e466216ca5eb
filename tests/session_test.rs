use restaurant_sim::config::SessionConfig;
use restaurant_sim::events::{EventKind, EventLog, SessionEvent, Staff};
use restaurant_sim::feed::read_customers;
use restaurant_sim::framework::SimTime;
use restaurant_sim::lifecycle::{ActorRole, RestaurantSession, SessionError, SessionReport};
use restaurant_sim::model::{CustomerId, CustomerSpec, WaiterId};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::time::Duration;

/// Runs one full day and collects every recorded event in recording order.
async fn run_day(
    config: SessionConfig,
    customers: Vec<CustomerSpec>,
) -> (SessionReport, Vec<SessionEvent>) {
    let (log, mut recorded) = EventLog::recording();
    let session = RestaurantSession::open(config, log).expect("Failed to open session");
    let report = session.run(customers).await.expect("Session failed");

    let mut events = Vec::new();
    while let Some(event) = recorded.recv().await {
        events.push(event);
    }
    (report, events)
}

fn kinds(events: &[SessionEvent]) -> impl Iterator<Item = EventKind> + '_ {
    events.iter().map(|event| event.kind)
}

fn seated_waiters(events: &[SessionEvent]) -> HashMap<CustomerId, WaiterId> {
    kinds(events)
        .filter_map(|kind| match kind {
            EventKind::Seated { customer_id, waiter } => Some((customer_id, waiter)),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_single_customer_is_served_and_table_returned() {
    let (report, events) = run_day(SessionConfig::default(), vec![CustomerSpec::new(1, 0, 2)]).await;

    assert_eq!(report.customers, 1);
    assert_eq!(report.served, 1);
    assert_eq!(report.free_tables, 10);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(seated_waiters(&events).get(&1), Some(&0));

    let left_at = events
        .iter()
        .find(|event| matches!(event.kind, EventKind::FinishedEating { customer_id: 1 }))
        .map(|event| event.at)
        .expect("customer never left");
    // 1 minute ordering + 10 minutes cooking + 30 minutes eating
    assert!(left_at >= SimTime(41), "left at {}", left_at);

    // restaurant stays open until 3:00 pm
    assert_eq!(report.closed_at, SimTime(240));
}

#[tokio::test(start_paused = true)]
async fn test_late_arrival_is_turned_away() {
    let (report, events) = run_day(SessionConfig::default(), vec![CustomerSpec::new(2, 245, 2)]).await;

    assert_eq!(report.left_late, 1);
    assert_eq!(report.served, 0);
    assert_eq!(report.free_tables, 10);
    assert!(kinds(&events).any(|kind| kind == EventKind::LeftLate { customer_id: 2 }));
    assert!(!kinds(&events).any(|kind| matches!(kind, EventKind::Seated { .. })));
    assert!(!kinds(&events).any(|kind| matches!(kind, EventKind::OrderTaken { .. })));
    assert_eq!(report.closed_at, SimTime(245));
}

#[tokio::test(start_paused = true)]
async fn test_eleventh_customer_finds_no_table() {
    let customers = (1..=11).map(|id| CustomerSpec::new(id, 0, 1)).collect();
    let (report, events) = run_day(SessionConfig::default(), customers).await;

    assert_eq!(report.served, 10);
    assert_eq!(report.left_no_table, 1);
    assert_eq!(report.free_tables, 10);

    let rejected: Vec<CustomerId> = kinds(&events)
        .filter_map(|kind| match kind {
            EventKind::LeftNoTable { customer_id } => Some(customer_id),
            _ => None,
        })
        .collect();
    assert_eq!(rejected.len(), 1);
    assert!(!seated_waiters(&events).contains_key(&rejected[0]));
}

#[tokio::test(start_paused = true)]
async fn test_waiters_are_assigned_round_robin() {
    let customers = (1..=6).map(|id| CustomerSpec::new(id, id * 2, 1)).collect();
    let (report, events) = run_day(SessionConfig::default(), customers).await;

    assert_eq!(report.served, 6);
    let seated = seated_waiters(&events);
    let assigned: Vec<WaiterId> = (1..=6).map(|id| seated[&id]).collect();
    assert_eq!(assigned, vec![0, 1, 2, 3, 4, 0]);
}

#[tokio::test(start_paused = true)]
async fn test_each_waiter_takes_orders_in_seating_order() {
    let config = SessionConfig {
        waiters: 2,
        ..SessionConfig::default()
    };
    let customers = (1..=8).map(|id| CustomerSpec::new(id, 0, 1)).collect();
    let (report, events) = run_day(config, customers).await;
    assert_eq!(report.served, 8);

    let per_waiter = |pick: fn(EventKind) -> Option<(WaiterId, CustomerId)>| {
        let mut lines: HashMap<WaiterId, Vec<CustomerId>> = HashMap::new();
        for (waiter, customer_id) in kinds(&events).filter_map(pick) {
            lines.entry(waiter).or_default().push(customer_id);
        }
        lines
    };
    let seated = per_waiter(|kind| match kind {
        EventKind::Seated { customer_id, waiter } => Some((waiter, customer_id)),
        _ => None,
    });
    let taken = per_waiter(|kind| match kind {
        EventKind::OrderTaken {
            waiter, customer_id, ..
        } => Some((waiter, customer_id)),
        _ => None,
    });
    assert_eq!(seated.len(), 2);
    assert_eq!(seated, taken);
}

#[tokio::test(start_paused = true)]
async fn test_admitted_customers_order_eat_and_leave_once() {
    let customers = vec![
        CustomerSpec::new(1, 0, 4),
        CustomerSpec::new(2, 0, 3),
        CustomerSpec::new(3, 5, 2),
        CustomerSpec::new(4, 12, 1),
        CustomerSpec::new(5, 12, 4),
        CustomerSpec::new(6, 250, 2),
    ];
    let (report, events) = run_day(SessionConfig::default(), customers).await;
    assert_eq!(report.served, 5);
    assert_eq!(report.left_late, 1);

    for customer_id in seated_waiters(&events).into_keys() {
        let positions = |wanted: fn(EventKind) -> bool| -> Vec<usize> {
            events
                .iter()
                .enumerate()
                .filter(|(_, event)| event.kind.customer_id() == Some(customer_id))
                .filter(|(_, event)| wanted(event.kind))
                .map(|(index, _)| index)
                .collect()
        };
        let placed = positions(|kind| matches!(kind, EventKind::OrderPlaced { .. }));
        let ready = positions(|kind| matches!(kind, EventKind::FoodReady { .. }));
        let left = positions(|kind| matches!(kind, EventKind::FinishedEating { .. }));

        assert_eq!(placed.len(), 1, "customer {}", customer_id);
        assert_eq!(ready.len(), 1, "customer {}", customer_id);
        assert_eq!(left.len(), 1, "customer {}", customer_id);
        assert!(placed[0] < left[0]);
        assert!(ready[0] < left[0]);
    }
}

#[tokio::test(start_paused = true)]
async fn test_every_staff_member_leaves_exactly_once() {
    let customers = (1..=4).map(|id| CustomerSpec::new(id, id, 2)).collect();
    let (report, events) = run_day(SessionConfig::default(), customers).await;

    assert_eq!(report.exited, 7);
    assert!(report.failures.is_empty());

    let left: Vec<Staff> = kinds(&events)
        .filter_map(|kind| match kind {
            EventKind::StaffTerminated { staff } => Some(staff),
            _ => None,
        })
        .collect();
    let distinct: HashSet<Staff> = left.iter().copied().collect();
    assert_eq!(left.len(), 7);
    assert_eq!(distinct.len(), 7);
}

#[tokio::test(start_paused = true)]
async fn test_cooks_drain_kitchen_after_closing() {
    // ordered at 239, so the ticket reaches the kitchen after 3:00 pm
    let (report, events) = run_day(SessionConfig::default(), vec![CustomerSpec::new(9, 239, 4)]).await;

    assert_eq!(report.served, 1);
    assert_eq!(report.exited, 7);

    let ready = events
        .iter()
        .position(|event| matches!(event.kind, EventKind::FoodReady { customer_id: 9, .. }))
        .expect("food never prepared");
    assert!(events[ready].at >= SimTime(240));
    for (index, event) in events.iter().enumerate() {
        if let EventKind::StaffTerminated {
            staff: Staff::Cook(_),
        } = event.kind
        {
            assert!(index > ready, "cook left before the last ticket was cooked");
        }
    }
    // 20 minutes cooking + 30 minutes eating after the order at 240
    assert!(report.finished_at >= SimTime(290));
}

#[tokio::test(start_paused = true)]
async fn test_clock_never_runs_backwards() {
    let config = SessionConfig::default();
    let expected = config.actor_count();
    let session =
        RestaurantSession::open(config.clone(), EventLog::new()).expect("Failed to open session");

    let world = session.world();
    let sampler = tokio::spawn(async move {
        let mut samples = Vec::new();
        loop {
            let snapshot = world.snapshot().await.expect("world gone");
            assert!(snapshot.free_tables <= 10);
            assert_eq!(snapshot.free_tables + snapshot.seated, 10);
            samples.push(snapshot.now);
            if snapshot.exited == expected {
                return samples;
            }
            tokio::time::sleep(config.minute / 2).await;
        }
    });

    let customers = (1..=15)
        .map(|id| CustomerSpec::new(id, id * 3, (id % 4) + 1))
        .collect();
    let report = session.run(customers).await.expect("Session failed");
    let samples = sampler.await.expect("sampler panicked");

    assert_eq!(report.exited, expected);
    assert!(samples.len() > 10);
    assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test(start_paused = true)]
async fn test_day_driven_from_feed() {
    let feed = "1 0 2\n2 3 5\n3 4 1\n0 6 2\n4 250 3\n-1 0 0\n5 7 1\n";
    let customers = read_customers(Cursor::new(feed)).expect("feed should parse");
    assert_eq!(customers.len(), 3);

    let (report, _) = run_day(SessionConfig::default(), customers).await;
    assert_eq!(report.customers, 3);
    assert_eq!(report.served, 2);
    assert_eq!(report.left_late, 1);
}

#[tokio::test(start_paused = true)]
async fn test_smaller_staff_pools() {
    let config = SessionConfig {
        waiters: 1,
        cooks: 1,
        tables: 2,
        minute: Duration::from_millis(10),
        ..SessionConfig::default()
    };
    let customers = (1..=3).map(|id| CustomerSpec::new(id, 0, 3)).collect();
    let (report, events) = run_day(config, customers).await;

    assert_eq!(report.served, 2);
    assert_eq!(report.left_no_table, 1);
    assert_eq!(report.exited, 2);
    assert!(seated_waiters(&events).values().all(|waiter| *waiter == 0));
}

#[tokio::test(start_paused = true)]
async fn test_repeated_customer_id_is_served_twice() {
    // both 7s land on waiter 0, five admissions apart
    let feed = "7 0 1\n2 0 1\n3 0 1\n4 0 1\n5 0 1\n7 0 1\n-1 0 0\n";
    let customers = read_customers(Cursor::new(feed)).expect("feed should parse");
    assert_eq!(customers.len(), 6);

    let day = run_day(SessionConfig::default(), customers);
    let (report, events) = tokio::time::timeout(Duration::from_secs(3600), day)
        .await
        .expect("session did not finish");

    assert_eq!(report.served, 6);
    assert_eq!(report.free_tables, 10);
    assert_eq!(report.exited, 7);
    let seven_left = kinds(&events)
        .filter(|kind| *kind == EventKind::FinishedEating { customer_id: 7 })
        .count();
    assert_eq!(seven_left, 2);
}

#[tokio::test(start_paused = true)]
async fn test_failed_customer_is_reported_and_others_finish() {
    let config = SessionConfig {
        waiters: 1,
        waiter_queue_capacity: 1,
        ..SessionConfig::default()
    };
    let customers = (1..=3).map(|id| CustomerSpec::new(id, 0, 1)).collect();
    let (report, _) = run_day(config, customers).await;

    assert!(!report.failures.is_empty());
    assert_eq!(report.served + report.failures.len(), 3);
    for failure in &report.failures {
        assert!(matches!(failure.actor, ActorRole::Customer(_)));
        assert_eq!(failure.exit_code, 1);
        assert!(failure.error.contains("Queue overflow"), "{}", failure.error);
    }
    assert_eq!(report.exit_code(), 1);

    // the waiter and both cooks still went home
    assert_eq!(report.exited, 3);
    assert_eq!(report.free_tables, 10);
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let config = SessionConfig {
        cooks: 0,
        ..SessionConfig::default()
    };
    let result = RestaurantSession::open(config, EventLog::new());
    assert!(matches!(result, Err(SessionError::Config(_))));
}
