use num_radical::fraction::{self, decimal_to_fraction, Fraction, MixedNumber};
use num_radical::lcm::{lcm_of_fractions, lcm_via_gcf, lcm_via_prime_powers};
use num_radical::number_theory::{
    common_factors, gcd_binary, gcd_common_factors, gcd_euclidean, gcd_of_with, gcd_via_lcm,
    prime_factorization, GcdStrategy,
};
use num_radical::radical::{self, simplify, Radical};
use num_radical::{ArithmeticError, Canonical};
use num_rational::Ratio;
use num_traits::ToPrimitive;
use proptest::prelude::*;

const STRATEGIES: [GcdStrategy; 4] = [
    GcdStrategy::Euclidean,
    GcdStrategy::Binary,
    GcdStrategy::CommonFactors,
    GcdStrategy::LeastCommonMultiple,
];

fn small() -> impl Strategy<Value = i64> {
    -100_000i64..=100_000
}

fn denominator() -> impl Strategy<Value = i64> {
    1i64..=10_000
}

fn fraction() -> impl Strategy<Value = Fraction> {
    (-10_000i64..=10_000, denominator()).prop_map(|(n, d)| Fraction::new_raw(n, d))
}

fn mixed_number() -> impl Strategy<Value = MixedNumber> {
    (-1_000i64..=1_000, denominator())
        .prop_flat_map(|(w, d)| (Just(w), 0..d, Just(d)))
        .prop_map(|(w, n, d)| if w < 0 { MixedNumber::new_raw(w, -n, d) } else { MixedNumber::new_raw(w, n, d) })
}

fn radical() -> impl Strategy<Value = Radical> {
    (-50i64..=50, 2i64..=5, 0i64..=5_000).prop_map(|(c, n, b)| Radical::new_raw(c, n, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn gcd_algorithms_agree(a in small(), b in small()) {
        let expected = gcd_euclidean(a, b);
        prop_assert_eq!(gcd_binary(a, b), expected);
        prop_assert_eq!(gcd_common_factors(a, b), expected);
        prop_assert_eq!(gcd_via_lcm(a, b), Ok(expected));
        prop_assert_eq!(expected, num_integer::gcd(a, b).unsigned_abs());
    }

    #[test]
    fn gcd_is_largest_common_factor(a in small(), b in small()) {
        let factors = common_factors(a, b);
        prop_assert_eq!(factors.iter().copied().max().unwrap_or(0), gcd_euclidean(a, b));
        for f in factors {
            prop_assert_eq!(a.unsigned_abs() % f, 0);
            prop_assert_eq!(b.unsigned_abs() % f, 0);
        }
    }

    #[test]
    fn gcd_fold_is_strategy_independent(values in prop::collection::vec(small(), 2..6)) {
        let expected = gcd_of_with(&values, GcdStrategy::default());
        for strategy in STRATEGIES.iter() {
            prop_assert_eq!(gcd_of_with(&values, *strategy), expected);
        }
    }

    #[test]
    fn lcm_gcd_duality(a in 1i64..=100_000, b in 1i64..=100_000) {
        let lcm = lcm_via_prime_powers(&[a, b]).unwrap();
        prop_assert_eq!(lcm_via_gcf(a, b), Ok(lcm));
        prop_assert_eq!(lcm as i128 * gcd_euclidean(a, b) as i128, a as i128 * b as i128);
        prop_assert_eq!(lcm, num_integer::lcm(a, b));
    }

    #[test]
    fn factorization_multiplies_back(n in 2i64..=1_000_000) {
        let primes = prime_factorization(n);
        prop_assert!(primes.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(primes.iter().product::<i64>(), n);
    }

    #[test]
    fn reduce_matches_ratio(f in fraction()) {
        let reduced = f.canonical().unwrap();
        let (numer, denom) = reduced.parts();
        prop_assert!(denom > 0);
        prop_assert_eq!(gcd_euclidean(numer, denom), 1);
        prop_assert_eq!(reduced.canonical(), Ok(reduced));
        prop_assert_eq!(reduced, Fraction::from(Ratio::new(f.numer(), f.denom())));
    }

    #[test]
    fn fraction_arithmetic_matches_ratio(lhs in fraction(), rhs in fraction()) {
        let l = Ratio::new(lhs.numer(), lhs.denom());
        let r = Ratio::new(rhs.numer(), rhs.denom());
        prop_assert_eq!(fraction::add(lhs, rhs), Ok(Fraction::from(l + r)));
        prop_assert_eq!(fraction::subtract(lhs, rhs), Ok(Fraction::from(l - r)));
        prop_assert_eq!(fraction::multiply(lhs, rhs), Ok(Fraction::from(l * r)));
        if rhs.numer() == 0 {
            prop_assert_eq!(fraction::divide(lhs, rhs), Err(ArithmeticError::DivisionByZero));
        } else {
            prop_assert_eq!(fraction::divide(lhs, rhs), Ok(Fraction::from(l / r)));
        }
    }

    #[test]
    fn mixed_number_round_trip(f in fraction()) {
        let mixed = f.to_mixed().unwrap();
        prop_assert!(mixed.numer().unsigned_abs() < mixed.denom().unsigned_abs());
        prop_assert_eq!(MixedNumber::new(mixed.whole(), mixed.numer(), mixed.denom()), Ok(mixed));
        prop_assert_eq!(mixed.to_improper(), Ok(f));
    }

    #[test]
    fn improper_round_trip(m in mixed_number()) {
        let improper = m.to_improper().unwrap();
        prop_assert_eq!(improper.to_mixed(), Ok(m));
    }

    #[test]
    fn short_decimals_convert_exactly(n in -99_999i64..=99_999, places in 0u32..=4) {
        let denom = 10i64.pow(places);
        let x = n as f64 / denom as f64;
        prop_assert_eq!(decimal_to_fraction(x), Fraction::new(n, denom));
    }

    #[test]
    fn lcm_of_fractions_is_divisible_by_both(lhs in fraction(), rhs in fraction()) {
        let lcm = lcm_of_fractions(lhs, rhs).unwrap();
        for f in [lhs, rhs].iter() {
            if f.numer() != 0 {
                prop_assert!(fraction::divide(lcm, *f).unwrap().is_integer());
            }
        }
    }

    #[test]
    fn simplify_preserves_value(r in radical()) {
        let s = simplify(r).unwrap();
        prop_assert_eq!(simplify(s), Ok(s));
        prop_assert_eq!(s.degree(), r.degree());
        let (before, after) = (r.to_f64().unwrap(), s.to_f64().unwrap());
        prop_assert!((before - after).abs() <= 1e-9 * before.abs().max(1.));
    }

    #[test]
    fn like_radicals_add(c1 in -1000i64..=1000, c2 in -1000i64..=1000, n in 2i64..=6, b in 0i64..=1000) {
        let (lhs, rhs) = (Radical::new_raw(c1, n, b), Radical::new_raw(c2, n, b));
        prop_assert_eq!(radical::add(lhs, rhs), Ok(Radical::new_raw(c1 + c2, n, b)));
        prop_assert_eq!(radical::subtract(lhs, rhs), Ok(Radical::new_raw(c1 - c2, n, b)));
    }

    #[test]
    fn cross_degree_product_value(
        lhs in (-20i64..=20, 2i64..=4, 0i64..=200),
        rhs in (-20i64..=20, 2i64..=4, 0i64..=200),
    ) {
        let lhs = Radical::new_raw(lhs.0, lhs.1, lhs.2);
        let rhs = Radical::new_raw(rhs.0, rhs.1, rhs.2);
        let product = radical::multiply_any_degree(lhs, rhs).unwrap();
        let expected = lhs.to_f64().unwrap() * rhs.to_f64().unwrap();
        prop_assert!((product.to_f64().unwrap() - expected).abs() <= 1e-9 * expected.abs().max(1.));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(gcd_euclidean(48, 18), 6);
    assert_eq!(lcm_via_prime_powers(&[4, 6]), Ok(12));
    assert_eq!(
        fraction::add(Fraction::new_raw(1, 2), Fraction::new_raw(1, 3)),
        Ok(Fraction::new_raw(5, 6))
    );
    assert_eq!(
        fraction::multiply(Fraction::new_raw(2, 3), Fraction::new_raw(3, 4)),
        Ok(Fraction::new_raw(1, 2))
    );
    assert_eq!(
        MixedNumber::new_raw(1, 1, 2).to_improper(),
        Ok(Fraction::new_raw(3, 2))
    );
    assert_eq!(simplify(Radical::new_raw(1, 2, 72)), Ok(Radical::new_raw(6, 2, 2)));
    assert_eq!(
        radical::multiply_any_degree(Radical::new_raw(1, 2, 3), Radical::new_raw(1, 3, 5)),
        Ok(Radical::new_raw(1, 6, 675))
    );
}

#[test]
fn boundaries() {
    assert_eq!(fraction::reduce(Fraction::new_raw(5, 0)), Err(ArithmeticError::DivisionByZero));
    assert_eq!(
        fraction::add(Fraction::new_raw(1, 0), Fraction::new_raw(1, 2)),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        fraction::divide(Fraction::new_raw(1, 2), Fraction::new_raw(0, 5)),
        Err(ArithmeticError::DivisionByZero)
    );
    assert_eq!(
        lcm_via_prime_powers(&[7]),
        Err(ArithmeticError::InvalidArity { expected: 2, actual: 1 })
    );
    let (lhs, rhs) = (Radical::new_raw(1, 2, 8), Radical::new_raw(1, 3, 8));
    assert_eq!(
        radical::add(lhs, rhs),
        Err(ArithmeticError::IncompatibleRadicals { lhs, rhs })
    );
    assert_eq!(
        radical::divide_any_degree(lhs, Radical::new_raw(0, 3, 8)),
        Err(ArithmeticError::DivisionByZero)
    );
}
