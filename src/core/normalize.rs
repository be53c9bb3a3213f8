//! Text → value cleaners for listing cells.
//!
//! Every function is total: unparseable input gives `None`, never an error.
//! Full-width digits (`０`–`９`, `．`) are folded to ASCII first, since
//! listing portals mix both.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// 1坪 = 3.305785㎡
pub const SQM_PER_TSUBO: f64 = 3.305785;

static AREA_WITH_UNIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9.]+)\s*㎡").unwrap());
static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{4})\s*年").unwrap());
static MONTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})\s*月").unwrap());
static MAN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*万").unwrap());
static MAN_REMAINDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"万\s*([0-9,]+)").unwrap());

fn fold_fullwidth(s: &str) -> Cow<'_, str> {
    if !s.chars().any(|c| matches!(c, '０'..='９' | '．')) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.chars()
            .map(|c| match c {
                '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
                '．' => '.',
                other => other,
            })
            .collect(),
    )
}

fn digits_and_dots(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

fn parse_float(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Price in 万円. `"10,980万円"` → 10980, `"109,800,000円"` → 10980.
pub fn price_man_yen(s: Option<&str>) -> Option<f64> {
    let s = fold_fullwidth(s?);
    if s.contains("万円") {
        return parse_float(&digits_and_dots(&s.replace("万円", "")));
    }
    if s.contains('円') {
        return parse_float(&digits_and_dots(&s)).map(|yen| yen / 10000.0);
    }
    parse_float(&digits_and_dots(&s))
}

/// Area in ㎡, preferring the number right before the `㎡` marker.
pub fn area_sqm(s: Option<&str>) -> Option<f64> {
    let s = fold_fullwidth(s?);
    let caps = AREA_WITH_UNIT.captures(&s);
    let number = match caps {
        Some(caps) => caps.get(1).map(|m| m.as_str()),
        None => FIRST_NUMBER.find(&s).map(|m| m.as_str()),
    };
    parse_float(number?)
}

pub fn sqm_to_tsubo(sqm: Option<f64>) -> Option<f64> {
    sqm.map(|v| v / SQM_PER_TSUBO)
}

/// `"徒歩 5 分"` → 5. All digits in the text are concatenated.
pub fn minutes(s: Option<&str>) -> Option<i64> {
    let s = fold_fullwidth(s?);
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// `"2026年（令和 8年） 2月"` → `"2026-02"`.
pub fn year_month(s: Option<&str>) -> Option<String> {
    let s = fold_fullwidth(s?);
    let year: u32 = YEAR.captures(&s)?[1].parse().ok()?;
    let month: u32 = MONTH.captures(&s)?[1].parse().ok()?;
    Some(format!("{:04}-{:02}", year, month))
}

/// Monthly fee in 円. Handles `"1万2,000円/月"` as well as plain `"12,000円/月"`.
pub fn monthly_fee_yen(s: Option<&str>) -> Option<f64> {
    let s = fold_fullwidth(s?);
    if !s.contains('万') {
        return parse_float(&digits_and_dots(&s));
    }

    let mut yen = 0.0;
    if let Some(man) = MAN_AMOUNT
        .captures(&s)
        .and_then(|caps| parse_float(&caps[1]))
    {
        yen += man * 10000.0;
    }
    if let Some(rest) = MAN_REMAINDER
        .captures(&s)
        .and_then(|caps| parse_float(&digits_and_dots(&caps[1])))
    {
        yen += rest;
    }

    if yen == 0.0 {
        let joined: String = FIRST_NUMBER.find_iter(&s).map(|m| m.as_str()).collect();
        return parse_float(&joined);
    }
    Some(yen)
}

/// A directly supplied unit price cell such as `"133.8万円"`; needs at least one digit.
pub fn unit_price(s: Option<&str>) -> Option<f64> {
    let s = fold_fullwidth(s?);
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    parse_float(&digits_and_dots(&s))
}
