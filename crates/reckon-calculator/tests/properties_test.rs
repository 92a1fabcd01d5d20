use proptest::prelude::*;

use reckon_calculator::{AllowList, Calculator, ErrorKind, Number};

fn calc() -> Calculator {
    Calculator::new(AllowList::new(["user1"]))
}

fn finite() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

proptest! {
    #[test]
    fn add_is_commutative_for_integers(a in any::<i64>(), b in any::<i64>()) {
        let calc = calc();
        prop_assert_eq!(calc.add(a, b).unwrap(), calc.add(b, a).unwrap());
    }

    #[test]
    fn add_is_commutative_for_mixed(a in any::<i32>(), b in finite()) {
        let calc = calc();
        prop_assert_eq!(calc.add(a, b).unwrap(), calc.add(b, a).unwrap());
    }

    #[test]
    fn divide_by_any_zero_is_a_type_error(a in finite(), negative in any::<bool>()) {
        let zero = if negative { -0.0 } else { 0.0 };
        let calc = calc();
        prop_assert_eq!(calc.divide(a, zero).unwrap_err().kind(), ErrorKind::Type);
        prop_assert_eq!(calc.divide(a, 0).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn power_of_zero_is_one(x in finite().prop_filter("non-zero", |x| *x != 0.0), i in any::<i64>()) {
        let calc = calc();
        prop_assert_eq!(calc.power(x, 0).unwrap(), Number::Integer(1));
        prop_assume!(i != 0);
        prop_assert_eq!(calc.power(i, 0).unwrap(), Number::Integer(1));
    }

    #[test]
    fn sqrt_rejects_negatives(x in -1e12f64..-1e-12f64) {
        prop_assert_eq!(calc().sqrt(x).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn sqrt_squares_back(x in 0.0f64..1e12f64) {
        let root = calc().sqrt(x).unwrap().as_f64();
        let tolerance = 1e-9 * x.max(1.0);
        prop_assert!((root * root - x).abs() <= tolerance);
    }

    #[test]
    fn log10_rejects_non_positive(x in -1e12f64..=0.0f64) {
        prop_assert_eq!(calc().log10(x).unwrap_err().kind(), ErrorKind::Value);
    }

    #[test]
    fn is_even_rejects_every_float(x in finite()) {
        prop_assert_eq!(Calculator::is_even(x).unwrap_err().kind(), ErrorKind::Type);
    }

    #[test]
    fn is_even_matches_remainder(n in any::<i64>()) {
        prop_assert_eq!(Calculator::is_even(n).unwrap(), n % 2 == 0);
    }
}

#[test]
fn log10_of_one_is_zero() {
    assert_eq!(calc().log10(1).unwrap(), Number::Float(0.0));
    assert_eq!(calc().log10(1.0).unwrap(), Number::Integer(0));
}
