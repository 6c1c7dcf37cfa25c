use super::{PageOptions, Section};
use crate::data::{DatasetBundle, MapId};

pub(super) fn render<'a>(bundle: &'a DatasetBundle, options: &PageOptions) -> Vec<Section<'a>> {
    vec![
        Section::Title("Most Popular Bike Routes".to_string()),
        Section::paragraph("Interactive map showing top 1000 most popular bike routes"),
        Section::Heading("Top 1000 Citibike routes in New York 2022".to_string()),
        Section::MapEmbed {
            doc: bundle.map(MapId::Routes),
            height: options.map_height,
        },
        Section::Caption(
            "First of all we can see that of the top 1000 most popular routes, the vast majority \
             are in Manhattan. We also see that there are a lot of North-South routes that are \
             popular, like those at Central Park and along the West coast of the island up until \
             the Lincoln Bridge. Around Midtown and Chelsea we see a large clustering of popular \
             short-distance routes in all directions. There is also the notable inclusion of \
             routes around the main bridges, indicating people using the bikes as part of their \
             journeys between boroughs. Another interesting fact is while only 3% of all trips \
             end at the same station they started from, 14 of the top 20 most popular routes \
             were such round trips."
                .to_string(),
        ),
    ]
}
