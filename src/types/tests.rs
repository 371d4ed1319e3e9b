use super::{Amount, AmountError, TransactionId};
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1000", "1000"),
        ("12.50", "12.5"),
        ("  450  ", "450"),
        ("0.0001", "0.0001"),
        ("+7.25", "7.25"),
        ("100.000", "100"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert_eq!(Amount::from_str(""), Err(AmountError::Empty));
    assert_eq!(Amount::from_str("   "), Err(AmountError::Empty));
    assert!(matches!(Amount::from_str("abc"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("1.2.3"), Err(AmountError::InvalidFormat(_))));
    assert!(matches!(Amount::from_str("0"), Err(AmountError::NotPositive(_))));
    assert!(matches!(Amount::from_str("-5"), Err(AmountError::NotPositive(_))));
}

#[test]
fn test_amount_rejects_more_precision_than_storage_keeps() -> Result<()> {
    assert!(matches!(Amount::from_str("79228162514264337593543950335"), Err(AmountError::TooPrecise(_))));
    assert!(matches!(Amount::from_str("1.00000000000000001"), Err(AmountError::TooPrecise(_))));
    assert!(matches!(Amount::from_str("1234567890.123456"), Err(AmountError::TooPrecise(_))));

    assert_eq!(Amount::from_str("123456789012.345")?.to_string(), "123456789012.345");
    assert_eq!(Amount::from_str("79228162514264300000000000000")?.to_string(), "79228162514264300000000000000");

    Ok(())
}

#[test]
fn test_amount_reads_full_precision_doubles_from_storage() -> Result<()> {
    let amount: Amount = serde_json::from_str("0.30000000000000004")?;

    assert_eq!(amount.to_string(), "0.30000000000000004");
    assert_eq!(serde_json::to_string(&amount)?, "0.30000000000000004");

    Ok(())
}

#[test]
fn test_amount_serializes_as_json_number() -> Result<()> {
    assert_eq!(serde_json::to_string(&Amount::from_str("1000")?)?, "1000");
    assert_eq!(serde_json::to_string(&Amount::from_str("12.5")?)?, "12.5");
    assert_eq!(serde_json::to_string(&Amount::from_str("0.1")?)?, "0.1");

    Ok(())
}

#[test]
fn test_amount_deserializes_integers_and_fractions() -> Result<()> {
    let whole: Amount = serde_json::from_str("400")?;
    let fraction: Amount = serde_json::from_str("19.99")?;

    assert_eq!(whole.value(), Decimal::from(400));
    assert_eq!(fraction.value(), Decimal::from_str("19.99")?);

    Ok(())
}

#[test]
fn test_amount_rejects_non_positive_and_non_numeric_json() {
    assert!(serde_json::from_str::<Amount>("0").is_err());
    assert!(serde_json::from_str::<Amount>("-12.5").is_err());
    assert!(serde_json::from_str::<Amount>("\"12.5\"").is_err());
}

#[test]
fn test_transaction_id_is_a_plain_json_string() -> Result<()> {
    let id = TransactionId::from("48213077");

    assert_eq!(serde_json::to_string(&id)?, "\"48213077\"");
    assert_eq!(serde_json::from_str::<TransactionId>("\"48213077\"")?, id);

    Ok(())
}
