use crate::{PatternSettings, PhoneNumber, PhoneRecord};

#[test]
fn record_reflects_state() {
    let mut phone = PhoneNumber::from_parts(495, "1234567").unwrap();
    phone.set_pattern("+7({code})-{number}");

    let record = phone.to_record();
    assert_eq!(record.code, Some(495));
    assert_eq!(record.number.as_deref(), Some("1234567"));
    let settings = record.pattern_settings.unwrap();
    assert_eq!(settings.config.pattern.as_deref(), Some("+7({code})-{number}"));
    assert!(settings.compiled.is_some());
}

#[test]
fn record_round_trip_default_pattern() {
    let phone = PhoneNumber::from_parts(495, "1234567").unwrap();
    let mut restored = PhoneNumber::new();
    restored.apply_record(phone.to_record());

    assert_eq!(restored, phone);
    assert_eq!(restored.pattern_settings(), phone.pattern_settings());
    assert_eq!(restored.to_string(), "+74951234567");
}

#[test]
fn record_round_trip_custom_pattern() {
    let mut phone = PhoneNumber::from_parts(812, "7654321").unwrap();
    phone.set_pattern("8 ({code}) {number}");

    let restored = PhoneNumber::from(phone.to_record());
    assert_eq!(restored, phone);
    assert!(restored.has_pattern());
    assert!(restored.is_valid("8 (812) 7654321"));
    assert_eq!(restored.to_string(), "8 (812) 7654321");
}

#[test]
fn apply_record_skips_missing_parts() {
    let mut phone = PhoneNumber::from_parts(495, "1234567").unwrap();
    phone.set_pattern("{code}{number}");

    phone.apply_record(PhoneRecord {
        number: Some("7654321".to_owned()),
        ..PhoneRecord::default()
    });
    assert_eq!(phone.code(), Some(495));
    assert_eq!(phone.number(), Some("7654321"));
    assert!(phone.has_pattern());
}

#[test]
fn applied_settings_are_not_recompiled() {
    let mut settings = PatternSettings::default();
    settings.config.pattern = Some("{code}{number}".to_owned());

    let mut phone = PhoneNumber::new();
    phone.apply_record(PhoneRecord {
        pattern_settings: Some(settings),
        ..PhoneRecord::default()
    });
    assert!(!phone.has_pattern());
    assert!(!phone.is_valid("4951234567"));
    assert_eq!(phone.format(None), "");
}

#[test]
fn binary_round_trip() {
    let mut phone = PhoneNumber::from_parts(495, "0012345").unwrap();
    phone.set_pattern_with(r"\+7\s{code}\s{number}", r"\d{3}", r"\d{7}");

    let record = phone.to_record();
    let bytes = record.to_bytes().unwrap();
    let decoded = PhoneRecord::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, record);

    let restored = PhoneNumber::from(decoded);
    assert_eq!(restored.number(), Some("0012345"));
    assert!(restored.is_valid("+7 495 0012345"));
}

#[test]
fn binary_round_trip_without_pattern() {
    let mut settings = PatternSettings::default();
    settings.config.pattern = None;
    let record = PhoneRecord {
        code: Some(7),
        number: None,
        pattern_settings: Some(settings),
    };
    let decoded = PhoneRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn empty_record_round_trip() {
    let record = PhoneRecord::default();
    let decoded = PhoneRecord::from_bytes(&record.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(PhoneRecord::from_bytes(&[0xFF, 0xFF, 0xFF]).is_err());
}
