use crate::terms::Level;
use crate::terms::Level::{High, Low, Medium};

/// One Mamdani rule: IF current IS `current` AND desired IS `desired`
/// THEN power IS `power`. The AND is a minimum, per the usual min/max
/// semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub current: Level,
    pub desired: Level,
    pub power: Level,
}

/// The fixed kettle rule bank. The intuition is plain Mamdani control:
/// the closer the reading is to the target, the lower the power; a cold
/// reading against a hot target gets full power.
///
/// Note there is no (High, Low) entry, so a kettle already hotter than
/// its target fires nothing at all.
pub const RULES: [Rule; 8] = [
    Rule { current: Low, desired: High, power: High },
    Rule { current: Medium, desired: High, power: Medium },
    Rule { current: High, desired: High, power: Low },
    Rule { current: Low, desired: Medium, power: Medium },
    Rule { current: Medium, desired: Medium, power: Low },
    Rule { current: Low, desired: Low, power: Low },
    Rule { current: High, desired: Medium, power: Low },
    Rule { current: Medium, desired: Low, power: Low },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antecedent_pairs_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert!(a.current != b.current || a.desired != b.desired);
            }
        }
    }

    #[test]
    fn only_the_overheated_pair_is_uncovered() {
        for current in Level::ALL {
            for desired in Level::ALL {
                let covered = RULES
                    .iter()
                    .any(|r| r.current == current && r.desired == desired);

                assert_eq!(covered, !(current == High && desired == Low));
            }
        }
    }
}
