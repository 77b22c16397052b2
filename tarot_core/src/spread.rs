use std::fmt;

use crate::catalog::DECK_SIZE;

/// A named arrangement of card positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spread {
    SingleCard,
    PastPresentFuture,
    CelticCross,
    FiveCardCross,
    Year,
    Star,
    Smart,
    FullDeck,
}

impl Spread {
    /// Picker order.
    pub const ALL: [Spread; 8] = [
        Spread::SingleCard,
        Spread::PastPresentFuture,
        Spread::CelticCross,
        Spread::FiveCardCross,
        Spread::Year,
        Spread::Star,
        Spread::Smart,
        Spread::FullDeck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Spread::SingleCard => "Single Card",
            Spread::PastPresentFuture => "Past, Present, Future",
            Spread::CelticCross => "Celtic Cross",
            Spread::FiveCardCross => "5-Card Cross",
            Spread::Year => "Year",
            Spread::Star => "STAR",
            Spread::Smart => "SMART",
            Spread::FullDeck => "Full Deck",
        }
    }

    pub fn position_count(&self) -> usize {
        match self {
            Spread::SingleCard => 1,
            Spread::PastPresentFuture => 3,
            Spread::CelticCross => 10,
            Spread::FiveCardCross => 5,
            Spread::Year => 13,
            Spread::Star => 4,
            Spread::Smart => 5,
            Spread::FullDeck => DECK_SIZE,
        }
    }

    /// Positional labels, one per slot, where the spread defines them.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Spread::PastPresentFuture => &["Past", "Present", "Future"],
            Spread::CelticCross => &[
                "Present",
                "Challenge",
                "Immediate Future",
                "Past",
                "Foundation",
                "Future",
                "Outcome",
                "Hopes & Fears",
                "External",
                "Self",
            ],
            Spread::FiveCardCross => &["Present", "Internal", "External", "Past", "Future"],
            Spread::Year => &[
                "Summary",
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            Spread::Star => &["Situation", "Action", "Task", "Result"],
            Spread::Smart => &[
                "Specific",
                "Measurable",
                "Achievable",
                "Relevant",
                "Time-bound",
            ],
            Spread::SingleCard | Spread::FullDeck => &[],
        }
    }

    pub fn label(&self, position: usize) -> Option<&'static str> {
        self.labels().get(position).copied()
    }
}

impl fmt::Display for Spread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_spreads_with_expected_counts() {
        let counts: Vec<usize> = Spread::ALL.iter().map(|s| s.position_count()).collect();
        assert_eq!(counts, vec![1, 3, 10, 5, 13, 4, 5, 78]);
    }

    #[test]
    fn test_labels_never_exceed_position_count() {
        for spread in Spread::ALL {
            assert!(spread.labels().len() <= spread.position_count(), "{}", spread);
        }
    }

    #[test]
    fn test_past_present_future_labels() {
        assert_eq!(
            Spread::PastPresentFuture.labels(),
            &["Past", "Present", "Future"]
        );
    }

    #[test]
    fn test_year_labels_cover_every_position() {
        assert_eq!(Spread::Year.labels().len(), 13);
        assert_eq!(Spread::Year.label(0), Some("Summary"));
        assert_eq!(Spread::Year.label(12), Some("December"));
        assert_eq!(Spread::Year.label(13), None);
    }
}
