use std::cell::Cell;
use std::rc::Rc;

use crate::OwnedBuffer;

#[test]
fn test_zero_capacity() {
    let b = OwnedBuffer::<u64>::new();
    assert_eq!(b.capacity(), 0);
    assert!(b.is_empty());

    let b = OwnedBuffer::<u64>::try_new(0).unwrap();
    assert_eq!(b.capacity(), 0);
    assert!(b.as_slice().is_empty());

    let b = OwnedBuffer::<String>::default();
    assert!(b.is_empty());
}

#[test]
fn test_default_filled() {
    let b = OwnedBuffer::<i32>::try_new(5).unwrap();
    assert_eq!(b.capacity(), 5);
    assert_eq!(b.as_slice(), &[0; 5]);

    let b = OwnedBuffer::<String>::try_new(3).unwrap();
    assert!(b.as_slice().iter().all(String::is_empty));
}

#[test]
fn test_indexed_access() {
    let mut b = OwnedBuffer::<i32>::try_new(4).unwrap();
    for i in 0..4 {
        b[i] = i as i32 * 10;
    }
    assert_eq!(b[3], 30);
    b.as_mut_slice()[0] = -1;
    assert_eq!(b.as_slice(), &[-1, 10, 20, 30]);
}

#[test]
#[should_panic]
fn test_index_past_capacity() {
    let b = OwnedBuffer::<i32>::try_new(2).unwrap();
    let _value = b[2];
}

#[test]
fn test_take_leaves_zero_state() {
    let mut a = OwnedBuffer::<i32>::try_new(3).unwrap();
    a[1] = 7;
    let b = a.take();
    assert_eq!(a.capacity(), 0);
    assert_eq!(b.capacity(), 3);
    assert_eq!(b[1], 7);
}

#[test]
fn test_swap() {
    let mut a = OwnedBuffer::from_boxed_slice(vec![1, 2, 3].into_boxed_slice());
    let mut b = OwnedBuffer::<i32>::new();
    a.swap(&mut b);
    assert_eq!(a.capacity(), 0);
    assert_eq!(b.as_slice(), &[1, 2, 3]);

    let mut c = OwnedBuffer::from_boxed_slice(vec![9].into_boxed_slice());
    b.swap(&mut c);
    assert_eq!(b.as_slice(), &[9]);
    assert_eq!(c.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_try_new_with() {
    let mut next = 0;
    let b = OwnedBuffer::try_new_with(4, || {
        next += 1;
        next
    })
    .unwrap();
    assert_eq!(b.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(b.into_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_allocation_failure() {
    let err = OwnedBuffer::<u64>::try_new(usize::MAX / 4).unwrap_err();
    assert!(err.is_allocation_failure());
}

#[test]
fn test_drop_releases_every_slot_once() {
    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    let drops = Rc::new(Cell::new(0));
    {
        let mut a = OwnedBuffer::try_new_with(6, || Counted(drops.clone())).unwrap();
        let mut b = OwnedBuffer::new();
        a.swap(&mut b);
        let _c = b.take();
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 6);
}

#[test]
fn test_debug_shows_capacity() {
    let b = OwnedBuffer::<u8>::try_new(2).unwrap();
    assert_eq!(format!("{b:?}"), "OwnedBuffer { capacity: 2 }");
}
