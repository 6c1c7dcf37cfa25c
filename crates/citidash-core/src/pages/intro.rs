use super::{Section, image_section};
use crate::catalog::PageId;
use crate::config::DASHBOARD_TITLE;
use crate::data::{DatasetBundle, ImageId};

pub(super) fn render(bundle: &DatasetBundle) -> Vec<Section<'_>> {
    let sections: Vec<String> = PageId::all()
        .iter()
        .filter(|page| **page != PageId::Intro)
        .map(|page| page.title().to_string())
        .collect();

    let text = vec![
        Section::Heading(
            "This dashboard provides insights for the expansion plans of Citibike and gives a \
             helpful overview of usage patterns"
                .to_string(),
        ),
        Section::paragraph(format!(
            "The dashboard is separated into {} sections:",
            sections.len()
        )),
        Section::Bullets(sections),
        Section::paragraph(
            "The selector on the left, 'Select an aspect of the analysis', will take you to the \
             different aspects of the analysis. The Previous and Next buttons step through them \
             in order.",
        ),
    ];

    vec![
        Section::Title(DASHBOARD_TITLE.to_string()),
        Section::Columns {
            ratio: (1, 2),
            left: vec![image_section(bundle, ImageId::Bikes)],
            right: text,
        },
    ]
}
