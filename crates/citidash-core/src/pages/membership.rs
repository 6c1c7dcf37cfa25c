use super::Section;
use crate::charts::{BoxPlotGroup, BoxPlotSpec, SeriesColor};
use crate::data::DatasetBundle;

fn membership_color(member_casual: &str) -> SeriesColor {
    match member_casual {
        "member" => SeriesColor::Blue,
        "casual" => SeriesColor::Orange,
        _ => SeriesColor::Gray,
    }
}

pub(super) fn render(bundle: &DatasetBundle) -> Vec<Section<'_>> {
    let groups = bundle
        .duration_boxes
        .iter()
        .map(|group| BoxPlotGroup {
            category: group.rideable_type.clone(),
            series: group.member_casual.clone(),
            color: membership_color(&group.member_casual),
            stats: group.stats.clone(),
        })
        .collect();

    vec![
        Section::Title("Membership and Vehicle Types".to_string()),
        Section::BoxPlot(BoxPlotSpec {
            title: "Trip Duration by Ride Type and Membership".to_string(),
            x_title: "Bike Type".to_string(),
            y_title: "Trip Duration (mins)".to_string(),
            legend_title: "Membership Type".to_string(),
            groups,
        }),
        Section::paragraph(
            "Regardless of ride type, we see on the box plots that members (blue) tend to have \
             shorter trips than casual users. This is likely due to members using the bikes for \
             regular activities and errands, while casual members use them for recreational \
             activities and sightseeing that are longer durations. With casual members we see \
             that their rides with classic bikes last longer than with electric bikes, but with \
             members there's virtually no difference: they're taking quick trips with either \
             type of bike.",
        ),
    ]
}
