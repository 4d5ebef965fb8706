//! Engagement scoring functions.
//!
//! Pure arithmetic over raw counters. Each category has its own base rate and its own
//! bonus tier: every full tier of activity adds a fixed percentage on top of the base
//! points. Percentages are applied in integer arithmetic so tier boundaries are exact.

/// Points per message.
const MESSAGE_BASE: i64 = 2;
/// Messages per bonus tier.
const MESSAGE_TIER: i64 = 100;
/// Bonus percentage per message tier.
const MESSAGE_BONUS_PERCENT: i64 = 10;

const REACTION_BASE: i64 = 1;
const REACTION_TIER: i64 = 50;
const REACTION_BONUS_PERCENT: i64 = 5;

const VOICE_BASE: i64 = 3;
const VOICE_TIER: i64 = 60;
const VOICE_BONUS_PERCENT: i64 = 15;

/// Attachment base rate is 1.5, expressed in quarter points as 6.
const ATTACHMENT_BASE_QUARTERS: i128 = 6;
const ATTACHMENT_TIER: f64 = 100.0;
const ATTACHMENT_BONUS_PERCENT: i128 = 5;

/// Total points per level step before the square root is taken.
const POINTS_PER_LEVEL_UNIT: i64 = 100;

/// Computes `floor(quantity * base * (1 + floor(quantity / tier) * bonus%))`.
fn tiered_points(quantity: i64, base: i64, tier: i64, bonus_percent: i64) -> i64 {
    let quantity = i128::from(quantity);
    let tiers = quantity.div_euclid(i128::from(tier));
    let numerator = quantity * i128::from(base) * (100 + tiers * i128::from(bonus_percent));

    saturate(numerator.div_euclid(100))
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Message points: base 2, +10% per 100 messages.
pub fn message_points(count: i64) -> i64 {
    tiered_points(count, MESSAGE_BASE, MESSAGE_TIER, MESSAGE_BONUS_PERCENT)
}

/// Reaction points: base 1, +5% per 50 reactions.
pub fn reaction_points(count: i64) -> i64 {
    tiered_points(count, REACTION_BASE, REACTION_TIER, REACTION_BONUS_PERCENT)
}

/// Voice points: base 3 per minute, +15% per 60 minutes.
pub fn voice_points(minutes: i64) -> i64 {
    tiered_points(minutes, VOICE_BASE, VOICE_TIER, VOICE_BONUS_PERCENT)
}

/// Attachment points: base 1.5, +5% per 100 weighted attachments.
///
/// Stored counts move in steps of 1.5, so twice the count is a whole number and the
/// result is computed exactly. Any other value falls back to floating point.
pub fn attachment_points(count: f64) -> i64 {
    let tiers = (count / ATTACHMENT_TIER).floor();
    let doubled = count * 2.0;

    if doubled.fract() == 0.0 && doubled.abs() < 1e15 {
        // count * 1.5 == doubled * 6 / 8
        let numerator = (doubled as i128)
            * ATTACHMENT_BASE_QUARTERS
            * (100 + (tiers as i128) * ATTACHMENT_BONUS_PERCENT);
        return saturate(numerator.div_euclid(800));
    }

    let bonus = 1.0 + tiers * (ATTACHMENT_BONUS_PERCENT as f64) / 100.0;
    (count * 1.5 * bonus).floor() as i64
}

/// Sum of the already floored category points.
pub fn total_points(
    message_points: i64,
    reaction_points: i64,
    voice_points: i64,
    attachment_points: i64,
) -> i64 {
    message_points
        .saturating_add(reaction_points)
        .saturating_add(voice_points)
        .saturating_add(attachment_points)
}

/// Level for a point total: `floor(sqrt(total / 100)) + 1`, never below 1.
pub fn level(total_points: i64) -> i64 {
    if total_points <= 0 {
        return 1;
    }

    integer_sqrt(total_points / POINTS_PER_LEVEL_UNIT) + 1
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: i64) -> i64 {
    if n < 2 {
        return n.max(0);
    }

    let mut root = (n as f64).sqrt() as i64;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |square| square <= n) {
        root += 1;
    }
    root
}
