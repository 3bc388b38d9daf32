/*!
 * Tests for episode numeral resolution
 */

use episplit::numeral_utils::{chinese_to_number, resolve_episode_number};

/// Test basic Chinese numeral conversion
#[test]
fn test_chinese_to_number_withBasicNumerals_shouldConvertCorrectly() {
    assert_eq!(chinese_to_number("一"), 1);
    assert_eq!(chinese_to_number("二"), 2);
    assert_eq!(chinese_to_number("九"), 9);
    assert_eq!(chinese_to_number("十"), 10);
    assert_eq!(chinese_to_number("十一"), 11);
    assert_eq!(chinese_to_number("二十"), 20);
    assert_eq!(chinese_to_number("二十三"), 23);
    assert_eq!(chinese_to_number("九十九"), 99);
}

/// Test hundred-multiplier forms
#[test]
fn test_chinese_to_number_withHundredForms_shouldConvertCorrectly() {
    assert_eq!(chinese_to_number("百"), 100);
    assert_eq!(chinese_to_number("一百"), 100);
    assert_eq!(chinese_to_number("二百"), 200);
}

/// Test that unparseable numerals fall back to 1 instead of failing
#[test]
fn test_chinese_to_number_withGarbage_shouldFallBackToOne() {
    assert_eq!(chinese_to_number(""), 1);
    assert_eq!(chinese_to_number("abc"), 1);
    assert_eq!(chinese_to_number("x"), 1);
}

/// Test resolution of full heading tokens with marker characters
#[test]
fn test_resolve_episode_number_withMarkerCharacters_shouldStripAndResolve() {
    assert_eq!(resolve_episode_number("第1集"), 1);
    assert_eq!(resolve_episode_number("第12集"), 12);
    assert_eq!(resolve_episode_number("第一集"), 1);
    assert_eq!(resolve_episode_number("第十二集"), 12);
    assert_eq!(resolve_episode_number("一集"), 1);
    assert_eq!(resolve_episode_number("第 3 集"), 3);
}

/// Test resolution of bare tokens
#[test]
fn test_resolve_episode_number_withBareTokens_shouldResolve() {
    assert_eq!(resolve_episode_number("7"), 7);
    assert_eq!(resolve_episode_number("十一"), 11);
    assert_eq!(resolve_episode_number("二十三"), 23);
    assert_eq!(resolve_episode_number("九十九"), 99);
    assert_eq!(resolve_episode_number("十"), 10);
    assert_eq!(resolve_episode_number("一"), 1);
}

/// Test that oversized decimal tokens fall back to 1 rather than erroring
#[test]
fn test_resolve_episode_number_withOverflowingDecimal_shouldFallBackToOne() {
    assert_eq!(resolve_episode_number("99999999999999999999"), 1);
}

/// Test that an empty token resolves to the fallback episode number
#[test]
fn test_resolve_episode_number_withEmptyToken_shouldFallBackToOne() {
    assert_eq!(resolve_episode_number(""), 1);
    assert_eq!(resolve_episode_number("第集"), 1);
}
