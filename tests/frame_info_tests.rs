//! Frame-info builder tests
//!
//! Exercises the tag-length-value records for every durability level with and
//! without a timeout, plus expiry preservation.

use docwire::protocol::{
    add_durability_frame_info, add_preserve_expiry_frame_info, DurabilityLevel,
    FRAME_INFO_DURABILITY, FRAME_INFO_PRESERVE_EXPIRY,
};

#[test]
fn test_level_none_emits_nothing() {
    let mut buffer = Vec::new();
    add_durability_frame_info(&mut buffer, DurabilityLevel::None, None);
    assert!(buffer.is_empty());

    add_durability_frame_info(&mut buffer, DurabilityLevel::None, Some(1500));
    assert!(buffer.is_empty());
}

#[test]
fn test_durability_without_timeout() {
    for (level, wire) in [
        (DurabilityLevel::Majority, 0x01),
        (DurabilityLevel::MajorityAndPersistToActive, 0x02),
        (DurabilityLevel::PersistToMajority, 0x03),
    ] {
        let mut buffer = Vec::new();
        add_durability_frame_info(&mut buffer, level, None);
        assert_eq!(buffer, vec![FRAME_INFO_DURABILITY, 1, wire]);
    }
}

#[test]
fn test_durability_with_timeout() {
    for (level, wire) in [
        (DurabilityLevel::Majority, 0x01),
        (DurabilityLevel::MajorityAndPersistToActive, 0x02),
        (DurabilityLevel::PersistToMajority, 0x03),
    ] {
        let mut buffer = Vec::new();
        add_durability_frame_info(&mut buffer, level, Some(0x1234));
        assert_eq!(
            buffer,
            vec![FRAME_INFO_DURABILITY, 3, wire, 0x12, 0x34]
        );
    }
}

#[test]
fn test_preserve_expiry_record() {
    let mut buffer = Vec::new();
    add_preserve_expiry_frame_info(&mut buffer);
    assert_eq!(buffer, vec![FRAME_INFO_PRESERVE_EXPIRY, 0]);
}

#[test]
fn test_records_accumulate_in_emission_order() {
    let mut buffer = Vec::new();
    add_durability_frame_info(&mut buffer, DurabilityLevel::Majority, None);
    add_preserve_expiry_frame_info(&mut buffer);
    assert_eq!(
        buffer,
        vec![
            FRAME_INFO_DURABILITY,
            1,
            0x01,
            FRAME_INFO_PRESERVE_EXPIRY,
            0,
        ]
    );
}
