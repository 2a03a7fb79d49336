//! Sample DDS documents and their expected trees

use crate::dds::ast::elements::composite::CompositeDeclaration;
use crate::dds::ast::elements::dataset::Dataset;
use crate::dds::ast::elements::declaration::Declaration;
use crate::dds::ast::elements::dimension::ArrayDimension;
use crate::dds::ast::elements::grid::GridDeclaration;
use crate::dds::ast::elements::variable::VariableDeclaration;
use crate::dds::ast::types::{BaseType, StructureKind};

/// A CMIP6 near-surface air temperature aggregation: flat variables plus
/// one grid, with a dotted dataset name.
pub const CMIP6_TAS: &str = "\
Dataset {
    Float64 lat[lat = 160];
    Float64 lat_bnds[lat = 160][bnds = 2];
    Float64 lon[lon = 320];
    Float64 lon_bnds[lon = 320][bnds = 2];
    Float64 height;
    Float64 time[time = 8412];
    Float64 time_bnds[time = 8412][bnds = 2];
    Grid {
     ARRAY:
        Float32 tas[time = 8412][lat = 160][lon = 320];
     MAPS:
        Float64 time[time = 8412];
        Float64 lat[lat = 160];
        Float64 lon[lon = 320];
    } tas;
} CMIP6.CMIP.MRI.MRI-ESM2-0.piControl.r1i1p1f1.Amon.tas.gn.tas.20190222.aggregation.1;
";

/// The tree [`CMIP6_TAS`] parses into.
pub fn cmip6_tas_dataset() -> Dataset {
    fn f64_var(name: &str, dims: Vec<ArrayDimension>) -> Declaration {
        Declaration::Variable(VariableDeclaration::new(name, BaseType::Float64, dims))
    }

    Dataset::new(
        "CMIP6.CMIP.MRI.MRI-ESM2-0.piControl.r1i1p1f1.Amon.tas.gn.tas.20190222.aggregation.1",
        vec![
            f64_var("lat", vec![ArrayDimension::new("lat", 160)]),
            f64_var(
                "lat_bnds",
                vec![ArrayDimension::new("lat", 160), ArrayDimension::new("bnds", 2)],
            ),
            f64_var("lon", vec![ArrayDimension::new("lon", 320)]),
            f64_var(
                "lon_bnds",
                vec![ArrayDimension::new("lon", 320), ArrayDimension::new("bnds", 2)],
            ),
            f64_var("height", Vec::new()),
            f64_var("time", vec![ArrayDimension::new("time", 8412)]),
            f64_var(
                "time_bnds",
                vec![ArrayDimension::new("time", 8412), ArrayDimension::new("bnds", 2)],
            ),
            Declaration::Grid(GridDeclaration::new(
                "tas",
                VariableDeclaration::new(
                    "tas",
                    BaseType::Float32,
                    vec![
                        ArrayDimension::new("time", 8412),
                        ArrayDimension::new("lat", 160),
                        ArrayDimension::new("lon", 320),
                    ],
                ),
                vec![
                    VariableDeclaration::new(
                        "time",
                        BaseType::Float64,
                        vec![ArrayDimension::new("time", 8412)],
                    ),
                    VariableDeclaration::new(
                        "lat",
                        BaseType::Float64,
                        vec![ArrayDimension::new("lat", 160)],
                    ),
                    VariableDeclaration::new(
                        "lon",
                        BaseType::Float64,
                        vec![ArrayDimension::new("lon", 320)],
                    ),
                ],
            )),
        ],
    )
}

/// An oceanographic station: sequences and structures nested three levels
/// deep, no grids.
pub const STATION: &str = "\
Dataset {
  Int32 catalog_number;
  Sequence {
    String experimenter;
    Int32 time;
    Structure {
      Float64 latitude;
      Float64 longitude;
    } location;
    Sequence {
      Float64 depth;
      Float64 salinity;
      Float64 oxygen;
      Float64 temperature;
    } cast;
  } station;
} data;
";

/// The tree [`STATION`] parses into.
pub fn station_dataset() -> Dataset {
    fn f64_scalar(name: &str) -> Declaration {
        Declaration::Variable(VariableDeclaration::scalar(name, BaseType::Float64))
    }

    Dataset::new(
        "data",
        vec![
            Declaration::Variable(VariableDeclaration::scalar(
                "catalog_number",
                BaseType::Int32,
            )),
            Declaration::Composite(CompositeDeclaration::new(
                "station",
                StructureKind::Sequence,
                vec![
                    Declaration::Variable(VariableDeclaration::scalar(
                        "experimenter",
                        BaseType::String,
                    )),
                    Declaration::Variable(VariableDeclaration::scalar("time", BaseType::Int32)),
                    Declaration::Composite(CompositeDeclaration::new(
                        "location",
                        StructureKind::Structure,
                        vec![f64_scalar("latitude"), f64_scalar("longitude")],
                    )),
                    Declaration::Composite(CompositeDeclaration::new(
                        "cast",
                        StructureKind::Sequence,
                        vec![
                            f64_scalar("depth"),
                            f64_scalar("salinity"),
                            f64_scalar("oxygen"),
                            f64_scalar("temperature"),
                        ],
                    )),
                ],
            )),
        ],
    )
}

/// An XBT station: anonymous array dimensions and a hyphenated dataset
/// name.
pub const XBT_STATION: &str = "\
Dataset {
    Structure {
        Float64 lat;
        Float64 lon;
    } location;
    Structure {
        Int32 minutes;
        Int32 day;
        Int32 year;
    } time;
    Float64 depth[500];
    Float64 temperature[500];
} xbt-station;
";

/// The tree [`XBT_STATION`] parses into.
pub fn xbt_station_dataset() -> Dataset {
    Dataset::new(
        "xbt-station",
        vec![
            Declaration::Composite(CompositeDeclaration::new(
                "location",
                StructureKind::Structure,
                vec![
                    Declaration::Variable(VariableDeclaration::scalar("lat", BaseType::Float64)),
                    Declaration::Variable(VariableDeclaration::scalar("lon", BaseType::Float64)),
                ],
            )),
            Declaration::Composite(CompositeDeclaration::new(
                "time",
                StructureKind::Structure,
                vec![
                    Declaration::Variable(VariableDeclaration::scalar("minutes", BaseType::Int32)),
                    Declaration::Variable(VariableDeclaration::scalar("day", BaseType::Int32)),
                    Declaration::Variable(VariableDeclaration::scalar("year", BaseType::Int32)),
                ],
            )),
            Declaration::Variable(VariableDeclaration::new(
                "depth",
                BaseType::Float64,
                vec![ArrayDimension::anonymous(500)],
            )),
            Declaration::Variable(VariableDeclaration::new(
                "temperature",
                BaseType::Float64,
                vec![ArrayDimension::anonymous(500)],
            )),
        ],
    )
}
