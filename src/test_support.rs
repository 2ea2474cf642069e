//! Shared fixtures for unit tests.

use std::rc::Rc;

use crate::controller::Container;
use crate::model::CoordinateModel;
use crate::view::{RenderView, SharedRegistry, SharedView, ViewRegistry};

pub(crate) const PCT_VAR: [f64; 8] = [
    26.688_704_863_3,
    16.256_370_402_2,
    13.775_412_916_1,
    11.217_215_823,
    10.024_774_995,
    8.228_351_302_37,
    7.559_711_736_65,
    6.249_457_961_36,
];

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

/// Three samples with mixed numeric/text metadata.
pub(crate) fn pcoa_model() -> CoordinateModel {
    CoordinateModel::new(
        "pcoa",
        strings(&["PC.636", "PC.635", "PC.634"]),
        vec![
            vec![
                -0.276_542, -0.144_964, 0.066_647, -0.067_711, 0.176_070,
                0.072_969, -0.229_889, -0.046_599,
            ],
            vec![
                -0.237_661, 0.046_053, -0.138_136, 0.159_061, -0.247_485,
                -0.115_211, -0.112_864, 0.064_794,
            ],
            vec![
                -0.237_661, 0.046_053, -0.138_136, 0.159_061, -0.247_485,
                -0.115_211, -0.112_864, 0.064_794,
            ],
        ],
        PCT_VAR.to_vec(),
        strings(&["SampleID", "Mixed", "Treatment", "DOB"]),
        vec![
            strings(&["PC.636", "14.2", "Control", "20070314"]),
            strings(&["PC.635", "StringValue", "Fast", "20071112"]),
            strings(&["PC.634", "14.7", "Fast", "20071112"]),
        ],
    )
    .unwrap()
}

/// Two taxa sharing the PCoA coordinate space.
pub(crate) fn biplot_model() -> CoordinateModel {
    CoordinateModel::new(
        "biplot",
        strings(&["tax_1", "tax_2"]),
        vec![
            vec![
                -1.0, -0.144_964, 0.066_647, -0.067_711, 0.176_070, 0.072_969,
                -0.229_889, -0.046_599,
            ],
            vec![
                -0.237_661, 0.046_053, -0.138_136, 0.159_061, -0.247_485,
                -0.115_211, -0.112_864, 0.064_794,
            ],
        ],
        PCT_VAR.to_vec(),
        strings(&["SampleID", "Gram"]),
        vec![strings(&["tax_1", "1"]), strings(&["tax_2", "0"])],
    )
    .unwrap()
}

pub(crate) fn view_of(model: CoordinateModel) -> SharedView {
    RenderView::new(model.into_shared()).unwrap().into_shared()
}

/// Registry where both keys point at the same scatter view.
pub(crate) fn aliased_registry() -> (SharedRegistry, SharedView) {
    let scatter = view_of(pcoa_model());
    let mut registry = ViewRegistry::new();
    let _ = registry.insert("scatter", Rc::clone(&scatter));
    let _ = registry.insert("biplot", Rc::clone(&scatter));
    (registry.into_shared(), scatter)
}

/// Registry with a distinct view per model.
pub(crate) fn two_view_registry() -> (SharedRegistry, SharedView, SharedView) {
    let scatter = view_of(pcoa_model());
    let biplot = view_of(biplot_model());
    let mut registry = ViewRegistry::new();
    let _ = registry.insert("scatter", Rc::clone(&scatter));
    let _ = registry.insert("biplot", Rc::clone(&biplot));
    (registry.into_shared(), scatter, biplot)
}

pub(crate) fn container() -> Container {
    Container::new("does-not-exist", 400.0, 500.0)
}
