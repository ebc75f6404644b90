use feltcast::error::ParseIntError;
use feltcast::primitives::U256;

use core::convert::TryFrom;

#[test]
fn u256_max_const() {
    assert_eq!(U256::MAX, U256::from([255u8; 32]));
}

#[test]
fn u256_try_from_small_ints_and_back() {
    let a = U256::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a).unwrap(), 0x0123_4567_89AB_CDEFu64);

    let mut bad = [0u8; 32];
    bad[23] = 1;
    assert!(u64::try_from(U256::from(bad)).is_err());

    let a = U256::from(0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128);
    assert_eq!(
        u128::try_from(a).unwrap(),
        0x0123_4567_89AB_CDEF_0123_4567_89AB_CDEFu128
    );

    let mut bad = [0u8; 32];
    bad[15] = 1;
    assert!(u128::try_from(U256::from(bad)).is_err());
}

#[test]
fn u256_word_conversions_are_big_endian() {
    let v = U256::from([1u64, 2, 3, 4]);
    let bytes: [u8; 32] = v.into();

    assert_eq!(bytes[7], 1);
    assert_eq!(bytes[15], 2);
    assert_eq!(bytes[23], 3);
    assert_eq!(bytes[31], 4);

    let words: [u64; 4] = v.into();
    assert_eq!(words, [1, 2, 3, 4]);
    assert_eq!(U256::from_be_bytes(bytes).to_be_bytes(), bytes);
}

#[test]
fn u256_leading_zeros() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ONE.leading_zeros(), 255);

    let mut high = [0u8; 32];
    high[0] = 0x10;
    assert_eq!(U256::from(high).leading_zeros(), 3);

    assert_eq!(U256::pow2(248).leading_zeros(), 7);
    assert_eq!(U256::MAX.leading_zeros(), 0);
}

#[test]
fn u256_pow2() {
    assert_eq!(U256::pow2(0), U256::ONE);
    assert_eq!(U256::pow2(8), U256::from(256u16));
    assert_eq!(U256::pow2(127), U256::from(1u128 << 127));

    let mut top = [0u8; 32];
    top[0] = 0x80;
    assert_eq!(U256::pow2(255), U256::from(top));
    assert_eq!(U256::pow2(256), U256::ZERO);
}

#[test]
fn u256_sub_borrows_and_wraps() {
    assert_eq!(U256::from(256u16) - U256::ONE, U256::from(255u8));
    assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
    assert_eq!(U256::ZERO.overflowing_sub(U256::ONE), (U256::MAX, true));
}

#[test]
fn u256_checked_ops_report_overflow() {
    assert_eq!(U256::MAX.checked_add(U256::ONE), None);
    assert_eq!(U256::MAX.checked_mul(U256::from(2u8)), None);
    assert_eq!(U256::pow2(128).checked_mul(U256::pow2(128)), None);

    assert_eq!(
        U256::pow2(127).checked_mul(U256::pow2(128)),
        Some(U256::pow2(255))
    );
    assert_eq!(
        U256::from(2u8).checked_add(U256::from(3u8)),
        Some(U256::from(5u8))
    );
    assert_eq!(U256::MAX.overflowing_add(U256::ONE), (U256::ZERO, true));
}

#[test]
fn u256_mul_carries_across_limbs() {
    let lo = U256::from(u64::MAX);
    assert_eq!(
        lo.checked_mul(lo),
        Some(U256::from((u64::MAX as u128) * (u64::MAX as u128)))
    );

    let (low, overflow) = U256::MAX.overflowing_mul(U256::from(2u8));
    let mut expected = [0xFFu8; 32];
    expected[31] = 0xFE;
    assert_eq!(low, U256::from(expected));
    assert!(overflow);
}

#[test]
fn u256_display_decimal() {
    assert_eq!(U256::ZERO.to_string(), "0");
    assert_eq!(U256::from(1234u16).to_string(), "1234");
    assert_eq!(U256::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(
        U256::MAX.to_string(),
        "115792089237316195423570985008687907853269984665640564039457584007913129639935"
    );
    assert_eq!(format!("{:>5}", U256::from(42u8)), "   42");
}

#[test]
fn u256_display_round_trips_through_parse() {
    for value in [U256::ZERO, U256::ONE, U256::pow2(248), U256::MAX] {
        assert_eq!(value.to_string().parse::<U256>(), Ok(value));
        assert_eq!(format!("{value:#x}").parse::<U256>(), Ok(value));
    }
}

#[test]
fn u256_lower_hex() {
    assert_eq!(format!("{:x}", U256::ZERO), "0");
    assert_eq!(format!("{:#x}", U256::from(0xABCDu16)), "0xabcd");
    assert_eq!(format!("{:x}", U256::MAX), "f".repeat(64));
}

#[test]
fn u256_parse_decimal_and_hex() {
    assert_eq!("0".parse::<U256>(), Ok(U256::ZERO));
    assert_eq!("1_000".parse::<U256>(), Ok(U256::from(1000u16)));
    assert_eq!("0xff".parse::<U256>(), Ok(U256::from(255u8)));
    assert_eq!("0XFF".parse::<U256>(), Ok(U256::from(255u8)));
    assert_eq!("0x1_0".parse::<U256>(), Ok(U256::from(16u8)));
}

#[test]
fn u256_parse_rejects_bad_input() {
    assert_eq!("".parse::<U256>(), Err(ParseIntError::Empty));
    assert_eq!("0x".parse::<U256>(), Err(ParseIntError::Empty));
    assert_eq!(
        "12a".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 2, found: 'a' })
    );
    assert_eq!(
        "0xfg".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 3, found: 'g' })
    );
    assert_eq!(
        "_1".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 0, found: '_' })
    );
    assert_eq!(
        "0x_1".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 2, found: '_' })
    );
    assert_eq!(
        "1_".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 1, found: '_' })
    );
    assert_eq!(
        "1__0".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 2, found: '_' })
    );
    assert_eq!(
        "-1".parse::<U256>(),
        Err(ParseIntError::InvalidDigit { index: 0, found: '-' })
    );
    assert_eq!(
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
            .parse::<U256>(),
        Err(ParseIntError::Overflow)
    );
    assert_eq!(
        format!("0x1{}", "0".repeat(64)).parse::<U256>(),
        Err(ParseIntError::Overflow)
    );
}
