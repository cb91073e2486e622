use proptest::prelude::*;
use ruler_rs::core::{PlacementOutcome, RulerLedger};

const IMAGE_HEIGHT: u32 = 1_000_000;

proptest! {
    #[test]
    fn monotonic_heights_sum_to_last_position(
        deltas in prop::collection::vec(3u32..100, 1..20)
    ) {
        let mut ledger = RulerLedger::default();
        let mut y = 0u32;
        for delta in deltas {
            y += delta;
            let outcome = ledger.place(y, IMAGE_HEIGHT).expect("place");
            prop_assert!(matches!(outcome, PlacementOutcome::Placed(_)));
        }

        let total: i64 = ledger.rulers().iter().map(|r| r.height).sum();
        prop_assert_eq!(total, i64::from(ledger.last().expect("last ruler").y));
    }

    #[test]
    fn repeated_placement_never_grows_the_ledger(
        y in 0u32..=IMAGE_HEIGHT,
        attempts in 1usize..5
    ) {
        let mut ledger = RulerLedger::default();
        ledger.place(y, IMAGE_HEIGHT).expect("first placement");

        for _ in 0..attempts {
            let outcome = ledger.place(y, IMAGE_HEIGHT).expect("repeat placement");
            prop_assert_eq!(outcome, PlacementOutcome::DuplicateIgnored);
        }
        prop_assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn undo_removes_exactly_the_last_ruler(
        deltas in prop::collection::vec(3u32..100, 2..20)
    ) {
        let mut ledger = RulerLedger::default();
        let mut y = 0u32;
        for delta in &deltas {
            y += delta;
            ledger.place(y, IMAGE_HEIGHT).expect("place");
        }

        let before = ledger.rulers().to_vec();
        let removed = ledger.undo_last().expect("non-empty ledger");

        prop_assert_eq!(&removed, before.last().expect("last ruler"));
        prop_assert_eq!(ledger.rulers(), &before[..before.len() - 1]);
    }

    #[test]
    fn percentage_tracks_height(
        deltas in prop::collection::vec(3u32..10_000, 1..20)
    ) {
        let mut ledger = RulerLedger::default();
        let mut y = 0u32;
        for delta in deltas {
            y += delta;
            ledger.place(y, IMAGE_HEIGHT).expect("place");
        }

        for ruler in ledger.rulers() {
            let expected = ruler.height as f64 / f64::from(IMAGE_HEIGHT) * 100.0;
            prop_assert!((ruler.percentage - expected).abs() <= 1e-9);
        }
    }
}
