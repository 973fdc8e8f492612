mod doc;
mod error;
pub mod fixtures;
mod options;
mod path;
mod render;
mod rendering;
mod snapshot;
mod value;

/// JSON document model and loader.
pub use doc::{Document, FieldDoc, IntLiteral, LoadedDocument, NodeDoc, TerminatorDoc, ValueDoc, VariantDoc};
/// Error and result aliases.
pub use error::{InspectError, Result};
/// Rendering configuration.
pub use options::{FloatFormat, InspectOptions, Layout, MAX_DEPTH_LIMIT};
/// Node path used in diagnostics.
pub use path::{NodePath, PathStep};
/// Cycle-safe inspector entry points.
pub use render::{Inspector, render_value};
/// Rendering output types.
pub use rendering::{Fragment, FragmentKind, Marker, Rendering};
/// Frozen memory image for pointer resolution.
pub use snapshot::Snapshot;
/// Value model.
pub use value::{
	Address, ArrayValue, CharValue, EnumValue, EnumVariant, FieldValue, FloatValue, FloatWidth, IntWidth, IntegerValue, Ownership, PointerValue,
	StringValue, StructValue, Terminator, Value, enum_variants,
};
