use super::{Card, CardItem, Section, image_section};
use crate::data::{DatasetBundle, ImageId};

const fn item(text: &'static str) -> CardItem {
    CardItem {
        lead: None,
        text,
        children: &[],
    }
}

const fn lead(lead: &'static str, text: &'static str) -> CardItem {
    CardItem {
        lead: Some(lead),
        text,
        children: &[],
    }
}

/// Six recommendation cards, shown as two rows of three.
pub const RECOMMENDATION_CARDS: [Card; 6] = [
    Card {
        title: "Fleet Allocation",
        items: &[
            item(
                "Increase bike availability mid-week (especially Wednesday and Thursday) to \
                 avoid shortages.",
            ),
            item("Shift some maintenance/repairs to low-demand days like Sunday or Monday."),
        ],
    },
    Card {
        title: "Promotions on low-demand days",
        items: &[
            item(
                "Offer discounts or loyalty points on Sunday and Monday to encourage leisure or \
                 tourist trips. E.g., \"Sunday Fun Ride: X% Off\" could stimulate usage.",
            ),
            item(
                "Can also target tourist attractions, scenic routes, and group rides on weekend \
                 marketing campaigns.",
            ),
        ],
    },
    Card {
        title: "Seasonal Operations",
        items: &[
            item(
                "Increase operational capacities during the warmer months to handle increased demand.",
            ),
            item(
                "Reduce rebalancing resources in colder months and during forecasted heavy rain days.",
            ),
        ],
    },
    Card {
        title: "User Type and Trip Duration Recommendations",
        items: &[
            lead(
                "Casual Users",
                "Market scenic and recreational routes (Central Park, Waterfront) and provide guides.",
            ),
            lead(
                "Members",
                "Ensure stations in high-density errand zones have sufficient docking spots.",
            ),
            lead(
                "Members",
                "Push promotions for off-peak quick trips to reduce congestion in rush hours.",
            ),
        ],
    },
    Card {
        title: "Station-Level Actions",
        items: &[
            item(
                "Evaluate if the popular round-trip stations could use extra docks to handle surges.",
            ),
            item(
                "Maintain current balance-focused station management as current rebalancing is \
                 working well. Monitor and tweak the few exception stations.",
            ),
        ],
    },
    Card {
        title: "Expansion Recommendations",
        items: &[
            lead(
                "Primary Focus Areas",
                "Three new zones: one in Brooklyn, one in Queens and one in the Bronx capture the \
                 largest potential ridership increase and also serve lower income neighbourhoods.",
            ),
            lead(
                "Accessibility-based additional zone",
                "A further South Brooklyn expansionary zone targeting low-income areas with poor \
                 subway access has high potential for improving transit equity.",
            ),
            CardItem {
                lead: Some("Implementation Sequence"),
                text: "",
                children: &[
                    "Phase 1: 3 new zones with highest projected ridership.",
                    "Phase 2: Equity-focused South Brooklyn expansion.",
                    "Ensure each expansion phase is paired with awareness campaigns in those \
                     neighbourhoods.",
                ],
            },
        ],
    },
];

pub(super) fn render(bundle: &DatasetBundle) -> Vec<Section<'_>> {
    let (first_row, second_row) = RECOMMENDATION_CARDS.split_at(3);
    vec![
        Section::Title("Conclusions and Recommendations".to_string()),
        Section::Subheader(
            "Priority actions for improving Citibike performance and expansion plan".to_string(),
        ),
        Section::paragraph(
            "Based on the analysis of population density, income distribution, and ridership \
             patterns, we recommend the following strategic interventions to improve \
             accessibility, efficiency, and equity in the Citibike network. Implementation \
             should be phased, prioritising high-impact, low-cost measures first. Community \
             engagement is essential to ensure solutions align with local needs.",
        ),
        Section::Cards(first_row.to_vec()),
        Section::Cards(second_row.to_vec()),
        image_section(bundle, ImageId::ExpansionZones),
    ]
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_cards_form_two_rows_of_three() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let sections = render(&bundle);

        let rows: Vec<&Vec<Card>> = sections
            .iter()
            .filter_map(|s| match s {
                Section::Cards(cards) => Some(cards),
                _ => None,
            })
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[0][0].title, "Fleet Allocation");
        assert_eq!(rows[1][2].title, "Expansion Recommendations");
    }

    #[test]
    fn test_missing_zones_image_is_last_warning() {
        let dir = tempdir().unwrap();
        let bundle = fixtures::bundle(dir.path());
        let sections = render(&bundle);
        assert!(matches!(sections.last(), Some(Section::Warning(_))));
    }
}
