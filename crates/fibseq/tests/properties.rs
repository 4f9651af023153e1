use fibseq::{Algorithm, Error, MAX_INDEX, const_fibonacci, recursive_fibonacci, tail_recursive_fibonacci};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_negative_input_is_rejected(n in i64::MIN..0) {
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.compute(n), Err(Error::Domain { n }));
        }
    }

    #[test]
    fn prop_large_input_overflows(n in (MAX_INDEX as i64 + 1)..=i64::MAX) {
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.compute(n), Err(Error::Overflow { n, max: MAX_INDEX }));
        }
    }

    #[test]
    fn prop_recurrence_holds(n in 2..=MAX_INDEX as i64) {
        let value = tail_recursive_fibonacci(n).unwrap();
        let previous = tail_recursive_fibonacci(n - 1).unwrap();
        let before = tail_recursive_fibonacci(n - 2).unwrap();
        prop_assert_eq!(value, previous + before);
    }

    #[test]
    fn prop_const_fn_agrees(n in 0..=MAX_INDEX) {
        prop_assert_eq!(const_fibonacci(n), tail_recursive_fibonacci(n as i64).ok());
    }

    #[test]
    fn prop_recursive_agrees(n in 0i64..=22) {
        prop_assert_eq!(recursive_fibonacci(n), tail_recursive_fibonacci(n));
    }
}
