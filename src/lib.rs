//! # dds
//!
//! A parser for the OPeNDAP DDS (Dataset Descriptor Structure) format.
//!
//! A DDS document is a compact, brace-delimited description of a remote
//! dataset's variables, their scalar types, array dimensions, and composite
//! groupings (structures, sequences, and grids):
//!
//! Dataset {
//!     Float64 lat[lat = 160];
//!     Float64 height;
//!     Grid {
//!      ARRAY:
//!         Float32 tas[time = 8412][lat = 160][lon = 320];
//!      MAPS:
//!         Float64 time[time = 8412];
//!         Float64 lat[lat = 160];
//!         Float64 lon[lon = 320];
//!     } tas;
//! } CMIP6.CMIP.MRI.MRI-ESM2-0.piControl.r1i1p1f1.Amon.tas.gn.tas.20190222.aggregation.1;
//!
//! The library turns such text into a typed tree (see the [ast](dds::ast)
//! module) and reconstructs canonical text from a tree (see
//! [formats](dds::formats)). Obtaining the text in the first place (HTTP
//! against an OPeNDAP server, catalog traversal) is the caller's concern;
//! this crate is text-in/tree-out and tree-in/text-out only.

pub mod dds;
