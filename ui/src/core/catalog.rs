//! Static option catalogs rendered as checkbox groups, and the multi-select set that
//! holds a user's picks from one of them.

use serde::{Deserialize, Serialize};

/// A closed set of selectable values, each carrying a wire value and a label key.
pub trait CatalogOption: Copy + Eq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// Wire value (snake_case) used in payloads and checkbox `value` attributes.
    fn value(self) -> &'static str;

    /// Fluent message id for the option label.
    fn label_key(self) -> &'static str;

    fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|option| option.value() == value)
    }
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $variant ),+
        }

        impl CatalogOption for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn value(self) -> &'static str {
                match self {
                    $( Self::$variant => $value ),+
                }
            }

            fn label_key(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }
    };
}

catalog! {
    /// Kinds of help a care giver offers.
    Skill {
        Shopping => ("shopping", "skill-shopping"),
        Walk => ("walk", "skill-walk"),
        MealPrep => ("meal_prep", "skill-meal-prep"),
        TechHelp => ("tech_help", "skill-tech-help"),
        Chat => ("chat", "skill-chat"),
    }
}

catalog! {
    /// Weekly windows a care giver can be reached in.
    Availability {
        WeekdayMorning => ("weekday_morning", "availability-weekday-morning"),
        WeekdayAfternoon => ("weekday_afternoon", "availability-weekday-afternoon"),
        WeekdayEvening => ("weekday_evening", "availability-weekday-evening"),
        WeekendMorning => ("weekend_morning", "availability-weekend-morning"),
        WeekendAfternoon => ("weekend_afternoon", "availability-weekend-afternoon"),
    }
}

catalog! {
    /// Support a care seeker is asking for.
    NeedCategory {
        Shopping => ("shopping", "need-shopping"),
        MealPrep => ("meal_prep", "need-meal-prep"),
        Housework => ("housework", "need-housework"),
        HospitalVisit => ("hospital_visit", "need-hospital-visit"),
        Companionship => ("companionship", "need-companionship"),
        TechHelp => ("tech_help", "need-tech-help"),
    }
}

/// Options picked from a catalog, kept in the order they were checked.
///
/// Only values of `T` can be inserted, so the selection is always a subset of
/// `T::ALL`, and an option is never present twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiSelect<T> {
    selected: Vec<T>,
}

impl<T> Default for MultiSelect<T> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<T: CatalogOption> MultiSelect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox semantics: checking appends when absent, unchecking removes.
    pub fn set(&mut self, option: T, checked: bool) {
        if checked {
            if !self.contains(option) {
                self.selected.push(option);
            }
        } else {
            self.selected.retain(|entry| *entry != option);
        }
    }

    pub fn toggle(&mut self, option: T) {
        let checked = !self.contains(option);
        self.set(option, checked);
    }

    pub fn contains(&self, option: T) -> bool {
        self.selected.contains(&option)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.selected.iter().copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl<T: CatalogOption> FromIterator<T> for MultiSelect<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut select = Self::new();
        for option in iter {
            select.set(option, true);
        }
        select
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_wire_values_match_serde<T: CatalogOption + Serialize + std::fmt::Debug>() {
        for option in T::ALL {
            let json = serde_json::to_value(option).unwrap();
            assert_eq!(json, serde_json::Value::from(option.value()));
            assert_eq!(T::from_value(option.value()), Some(*option));
        }
    }

    #[test]
    fn wire_values_match_serialized_form() {
        assert_wire_values_match_serde::<Skill>();
        assert_wire_values_match_serde::<Availability>();
        assert_wire_values_match_serde::<NeedCategory>();
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(Skill::from_value("juggling"), None);
        assert_eq!(NeedCategory::from_value(""), None);
    }

    #[test]
    fn checking_appends_once_and_keeps_order() {
        let mut skills = MultiSelect::new();
        skills.set(Skill::Chat, true);
        skills.set(Skill::Shopping, true);
        skills.set(Skill::Chat, true);
        assert_eq!(skills.as_slice(), &[Skill::Chat, Skill::Shopping]);

        skills.set(Skill::Chat, false);
        assert_eq!(skills.as_slice(), &[Skill::Shopping]);

        // Unchecking something that was never checked is harmless.
        skills.set(Skill::Walk, false);
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn serializes_as_plain_array() {
        let needs: MultiSelect<NeedCategory> =
            [NeedCategory::Shopping, NeedCategory::HospitalVisit]
                .into_iter()
                .collect();
        assert_eq!(
            serde_json::to_value(&needs).unwrap(),
            serde_json::json!(["shopping", "hospital_visit"])
        );
    }

    #[test]
    fn random_toggle_sequences_stay_within_catalog() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let mut availability = MultiSelect::<Availability>::new();
            let steps = rng.gen_range(0..40);
            for _ in 0..steps {
                let option = Availability::ALL[rng.gen_range(0..Availability::ALL.len())];
                if rng.gen_bool(0.5) {
                    availability.toggle(option);
                } else {
                    availability.set(option, rng.gen_bool(0.5));
                }
            }

            assert!(availability.iter().all(|o| Availability::ALL.contains(&o)));
            assert!(availability.len() <= Availability::ALL.len());

            let unique: HashSet<_> = availability.iter().collect();
            assert_eq!(unique.len(), availability.len());

            for option in Availability::ALL.iter().copied() {
                let before = availability.contains(option);
                let mut twice = availability.clone();
                twice.toggle(option);
                twice.toggle(option);
                assert_eq!(twice.contains(option), before);
            }
        }
    }
}
