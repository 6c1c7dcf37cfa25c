use super::{MapLayer, PageOptions, Section};
use crate::data::DatasetBundle;

fn layer_notes(layer: MapLayer) -> Vec<String> {
    let notes: &[&str] = match layer {
        MapLayer::PopulationDensity => &[
            "This map shows population density by NTA region.",
            "Darker purple means higher population density.",
            "The three blue shapes (one in Brooklyn, one in Queens, one in the Bronx) are where \
             we would suggest expansion efforts be focussed, if reaching the most amount of \
             people is the primary consideration.",
            "Press m to view the income layer.",
        ],
        MapLayer::Income => &[
            "This map shows median household income by NTA region.",
            "Darker grey means higher income.",
            "Light colour areas (and especially those not close to a subway station) stand out \
             from an accessibility perspective as major candidates for expansion.",
            "The proposed expansion areas based on accessibility are virtually the same as the \
             previous for population density, with the addition of another area in South \
             Brooklyn with low income and limited Subway accessibility.",
        ],
    };
    notes.iter().map(|note| (*note).to_string()).collect()
}

pub(super) fn render<'a>(bundle: &'a DatasetBundle, options: &PageOptions) -> Vec<Section<'a>> {
    let layer = options.map_layer;
    vec![
        Section::Title("Citibike station locations and NY Neighbourhood information".to_string()),
        Section::Selector {
            label: "Choose map background:".to_string(),
            options: MapLayer::ALL
                .iter()
                .map(|layer| layer.label().to_string())
                .collect(),
            selected: layer.index(),
        },
        Section::Columns {
            ratio: (3, 1),
            left: vec![Section::MapEmbed {
                doc: bundle.map(layer.map_id()),
                height: options.map_height,
            }],
            right: vec![
                Section::Heading("Map Notes".to_string()),
                Section::Bullets(layer_notes(layer)),
            ],
        },
    ]
}
