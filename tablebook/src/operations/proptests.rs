//! Property-based tests for the operations module.
//!
//! These drive random booking attempts through the plan/execute path and
//! check the per-table non-overlap invariant on what ends up stored.

use chrono::Duration;
use proptest::prelude::*;

use crate::database::test_util::{at, create_test_database, sample_reservation, sample_table};
use crate::database::Database;
use crate::operations::{CreateReservationPlan, PlanExecutor};
use crate::reservation::NewReservation;

// (table index, start offset in minutes from 10:00, duration in minutes)
fn attempt_strategy() -> impl Strategy<Value = (usize, i64, u32)> {
    (0usize..2, 0i64..600, 1u32..=180)
}

fn overlaps(a: &crate::Reservation, b: &crate::Reservation) -> bool {
    a.reservation_time() < b.end_time() && b.reservation_time() < a.end_time()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn stored_reservations_never_overlap(attempts in prop::collection::vec(attempt_strategy(), 1..25)) {
        let db = create_test_database();
        let conn = db.connection();
        let tables = [
            Database::insert_table(conn, &sample_table("A")).unwrap(),
            Database::insert_table(conn, &sample_table("B")).unwrap(),
        ];

        for (index, offset, minutes) in attempts {
            let start = at(10, 0) + Duration::minutes(offset);
            let candidate = sample_reservation(tables[index].id(), start, minutes);
            let before = Database::list_reservations(conn).unwrap().len();

            match CreateReservationPlan::new(candidate).build_plan(conn) {
                Ok(plan) => {
                    PlanExecutor::new(conn).execute(&plan).unwrap();
                    prop_assert_eq!(Database::list_reservations(conn).unwrap().len(), before + 1);
                }
                Err(err) => {
                    prop_assert!(err.is_conflict());
                    prop_assert_eq!(Database::list_reservations(conn).unwrap().len(), before);
                }
            }
        }

        for table in &tables {
            let stored = Database::list_reservations_for_table(conn, table.id()).unwrap();
            for (i, a) in stored.iter().enumerate() {
                for b in &stored[i + 1..] {
                    prop_assert!(!overlaps(a, b), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    #[test]
    fn rejected_candidate_is_accepted_after_blocker_removed(
        offset in -59i64..=59,
        minutes in 1u32..=120,
    ) {
        let db = create_test_database();
        let conn = db.connection();
        let table = Database::insert_table(conn, &sample_table("T")).unwrap();
        let blocker = Database::insert_reservation(
            conn,
            &sample_reservation(table.id(), at(18, 0), 60),
        )
        .unwrap();

        let start = at(18, 0) + Duration::minutes(offset);
        let candidate = NewReservation::builder(table.id(), "guest", start)
            .duration_minutes(minutes)
            .build()
            .unwrap();
        let touches_blocker = start + Duration::minutes(i64::from(minutes)) <= at(18, 0);

        let first = CreateReservationPlan::new(candidate.clone()).build_plan(conn);
        prop_assert_eq!(first.is_ok(), touches_blocker);

        Database::delete_reservation(conn, blocker.id()).unwrap();
        prop_assert!(CreateReservationPlan::new(candidate).build_plan(conn).is_ok());
    }
}
