//! # QuickJoint Core
//!
//! Core types and utilities for QuickJoint.
//! Provides the planar vector arithmetic, edge and path representations,
//! and length units shared by the joint generators and their hosts.

pub mod error;
pub mod geometry;
pub mod path;
pub mod units;

pub use error::{GeometryError, GeometryResult, UnitError, UnitResult};
pub use geometry::{magnitude, offset_along, offset_perpendicular, Point};
pub use path::{Edge, Path, PathCommand};
pub use units::{convert, parse_length, LengthUnit};
