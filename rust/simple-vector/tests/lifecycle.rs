//! Element lifecycle accounting.

use simple_vector::{SimpleVector, reserve_hint};
use simple_vector_testkit::tracked::{self, Tracked};

fn tracked_values(range: std::ops::Range<i64>) -> Vec<Tracked> {
    range.map(Tracked::new).collect()
}

fn values(v: &SimpleVector<Tracked>) -> Vec<i64> {
    v.iter().map(Tracked::value).collect()
}

#[test]
fn test_every_slot_dropped_exactly_once() {
    tracked::reset();
    {
        let mut v = SimpleVector::new();
        for i in 0..50 {
            v.push_back(Tracked::new(i)).unwrap();
        }
        v.insert(v.begin() + 10, Tracked::new(-1)).unwrap();
        v.erase(v.begin());
        v.resize(80).unwrap();
        v.reserve(500).unwrap();
        v.pop_back();
        v.clear();
        assert_eq!(tracked::stats().live(), v.capacity());
    }
    assert_eq!(tracked::stats().live(), 0);
}

#[test]
fn test_growth_moves_instead_of_cloning() {
    tracked::reset();
    let mut v = SimpleVector::new();
    for i in 0..100 {
        v.push_back(Tracked::new(i)).unwrap();
    }
    v.insert(v.begin(), Tracked::new(-1)).unwrap();
    v.resize(300).unwrap();
    assert_eq!(tracked::stats().cloned, 0);
}

#[test]
fn test_copy_clones_live_elements_only() {
    let mut v = SimpleVector::with_capacity_hint(reserve_hint(32)).unwrap();
    for i in 0..5 {
        v.push_back(Tracked::new(i)).unwrap();
    }
    tracked::reset();
    let copy = v.clone();
    let stats = tracked::stats();
    assert_eq!(stats.cloned, 5);
    assert_eq!(stats.defaulted, 0);
    assert_eq!(copy.capacity(), 5);
    assert_eq!(values(&copy), values(&v));
}

#[test]
fn test_assignment_and_failed_reserve() {
    let mut target = SimpleVector::from_sequence(tracked_values(0..3)).unwrap();
    let source = SimpleVector::from_sequence(tracked_values(10..14)).unwrap();
    target.try_assign(&source).unwrap();
    assert_eq!(values(&target), vec![10, 11, 12, 13]);

    let mut huge = SimpleVector::<Tracked>::new();
    assert!(huge.reserve(usize::MAX / 8).is_err());
    assert!(huge.is_empty());
    assert_eq!(huge.capacity(), 0);
}

#[test]
fn test_take_transfers_without_copy() {
    let mut v = SimpleVector::from_sequence(tracked_values(0..4)).unwrap();
    tracked::reset();
    let moved = v.take();
    assert_eq!(tracked::stats(), tracked::TrackedStats::default());
    assert_eq!(values(&moved), vec![0, 1, 2, 3]);
    assert!(v.is_empty());
    v.push_back(Tracked::new(9)).unwrap();
    assert_eq!(values(&v), vec![9]);
}

#[test]
fn test_into_iter_drops_unused_tail() {
    tracked::reset();
    {
        let mut v = SimpleVector::with_capacity_hint(reserve_hint(8)).unwrap();
        v.push_back(Tracked::new(1)).unwrap();
        v.push_back(Tracked::new(2)).unwrap();
        let collected: Vec<i64> = v.into_iter().map(|t| t.value()).collect();
        assert_eq!(collected, vec![1, 2]);
    }
    assert_eq!(tracked::stats().live(), 0);
}
