//! Numbers typed in by the arbiter.

use qiyao_faction::domain::stats::Stats;
use serde::{Deserialize, Serialize};

/// A number as the arbiter entered it: a JSON number, free text, or
/// anything else the form sent.
///
/// Coercion never fails. Text is read like a leading integer (`"12 li"` is
/// 12, `"-3"` is -3); anything without leading digits, out of `i32` range,
/// `null`, or any other JSON value counts as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArbiterNumber {
    Integer(i64),
    Decimal(f64),
    Text(String),
    /// Must stay last: it matches any JSON value.
    Unreadable(serde_json::Value),
}

impl Default for ArbiterNumber {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i32> for ArbiterNumber {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for ArbiterNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

impl ArbiterNumber {
    /// The coerced value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn value(&self) -> i32 {
        let raw = match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(value) if value.is_finite() => {
                let truncated = value.trunc();
                (truncated.abs() <= f64::from(i32::MAX)).then_some(truncated as i64)
            }
            Self::Decimal(_) => None,
            Self::Text(text) => leading_integer(text),
            Self::Unreadable(_) => None,
        };
        raw.and_then(|v| i32::try_from(v).ok()).unwrap_or(0)
    }

    /// The coerced value as a distance: negative values count as 0.
    #[must_use]
    pub fn distance(&self) -> i32 {
        self.value().max(0)
    }
}

/// Stat values as the arbiter entered them, one `ArbiterNumber` per stat.
///
/// Any stat may be omitted or `null`; it then keeps the base value passed
/// to [`ArbiterStats::over`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterStats {
    pub martial: Option<ArbiterNumber>,
    pub strategy: Option<ArbiterNumber>,
    pub wealth: Option<ArbiterNumber>,
    pub prestige: Option<ArbiterNumber>,
}

impl ArbiterStats {
    /// Coerces every entered stat, taking `base` for the ones left out.
    #[must_use]
    pub fn over(&self, base: Stats) -> Stats {
        let pick = |entered: Option<&ArbiterNumber>, fallback: i32| {
            entered.map_or(fallback, ArbiterNumber::value)
        };
        Stats {
            martial: pick(self.martial.as_ref(), base.martial),
            strategy: pick(self.strategy.as_ref(), base.strategy),
            wealth: pick(self.wealth.as_ref(), base.wealth),
            prestige: pick(self.prestige.as_ref(), base.prestige),
        }
    }
}
