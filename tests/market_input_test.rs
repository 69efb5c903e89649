use vendor_pricing::{CompetitionLevel, MarketConditions, PricingError, month_name};

#[test]
fn test_parse_valid_form() {
    let conditions = MarketConditions::parse("6", "95", "2", "6.50").unwrap();
    assert_eq!(conditions.month(), 6);
    assert_eq!(conditions.demand(), 95);
    assert_eq!(conditions.competition(), 2);
    assert_eq!(conditions.ingredient_cost(), 6.5);
    assert_eq!(conditions.to_features(), [6.0, 95.0, 2.0, 6.5]);
}

#[test]
fn test_parse_truncates_whole_number_fields() {
    let conditions = MarketConditions::parse("3.9", "80.7", "4.2", "7.25").unwrap();
    assert_eq!(conditions.month(), 3);
    assert_eq!(conditions.demand(), 80);
    assert_eq!(conditions.competition(), 4);
    assert_eq!(conditions.ingredient_cost(), 7.25);
}

#[test]
fn test_parse_trims_whitespace() {
    let conditions = MarketConditions::parse(" 12 ", "0", " 5", "0 ").unwrap();
    assert_eq!(conditions.to_features(), [12.0, 0.0, 5.0, 0.0]);
}

#[test]
fn test_missing_field_rejected() {
    let cases = [
        ("", "80", "3", "8"),
        ("1", " ", "3", "8"),
        ("1", "80", "", "8"),
        ("1", "80", "3", ""),
    ];
    for (month, demand, competition, cost) in cases {
        let result = MarketConditions::parse(month, demand, competition, cost);
        match result {
            Err(PricingError::InvalidInput { message }) => {
                assert!(message.contains("required"), "unexpected message: {}", message);
            }
            other => panic!("expected missing-field error, got {:?}", other),
        }
    }
}

#[test]
fn test_exponent_in_whole_number_field_rejected() {
    let result = MarketConditions::parse("1e1", "80", "3", "8");
    assert!(matches!(result, Err(PricingError::InvalidInput { .. })));
    assert!(MarketConditions::parse("6", "8e1", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "80", "+3", "8").is_err());
}

#[test]
fn test_deserialize_runs_range_checks() {
    let valid = r#"{"month": 7, "demand": 90, "competition": 1, "ingredient_cost": 7.0}"#;
    let conditions: MarketConditions = serde_json::from_str(valid).unwrap();
    assert_eq!(conditions, MarketConditions::new(7, 90, 1, 7.0).unwrap());

    let bad_competition = r#"{"month": 7, "demand": 90, "competition": 9, "ingredient_cost": 7.0}"#;
    assert!(serde_json::from_str::<MarketConditions>(bad_competition).is_err());

    let bad_month = r#"{"month": 13, "demand": 90, "competition": 1, "ingredient_cost": 7.0}"#;
    assert!(serde_json::from_str::<MarketConditions>(bad_month).is_err());
}

#[test]
fn test_non_numeric_rejected() {
    assert!(MarketConditions::parse("June", "80", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "high", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "80", "3", "$8").is_err());
}

#[test]
fn test_out_of_range_rejected() {
    assert!(MarketConditions::parse("0", "80", "3", "8").is_err());
    assert!(MarketConditions::parse("13", "80", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "101", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "-1", "3", "8").is_err());
    assert!(MarketConditions::parse("6", "80", "0", "8").is_err());
    assert!(MarketConditions::parse("6", "80", "6", "8").is_err());
    assert!(MarketConditions::parse("6", "80", "3", "-0.01").is_err());
}

#[test]
fn test_new_checks_ranges() {
    assert!(MarketConditions::new(1, 100, 1, 0.0).is_ok());
    assert!(MarketConditions::new(12, 0, 5, 99.99).is_ok());
    assert!(MarketConditions::new(6, 50, 3, f64::NAN).is_err());
    assert!(MarketConditions::new(6, 50, 3, f64::INFINITY).is_err());
}

#[test]
fn test_month_names() {
    assert_eq!(month_name(1), Some("January"));
    assert_eq!(month_name(6), Some("June"));
    assert_eq!(month_name(12), Some("December"));
    assert_eq!(month_name(0), None);
    assert_eq!(month_name(13), None);
}

#[test]
fn test_competition_labels() {
    let labels: Vec<String> = CompetitionLevel::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        labels,
        vec![
            "1 - Very Low",
            "2 - Low",
            "3 - Medium",
            "4 - High",
            "5 - Very High",
        ]
    );
    assert_eq!(CompetitionLevel::from_level(4), Some(CompetitionLevel::High));
    assert_eq!(CompetitionLevel::from_level(0), None);
    assert_eq!(CompetitionLevel::from_level(6), None);
}

#[test]
fn test_conditions_display() {
    let conditions = MarketConditions::new(7, 90, 1, 7.0).unwrap();
    assert_eq!(
        conditions.to_string(),
        "July, demand 90%, competition 1 - Very Low, ingredients $7.00"
    );
}
