//! Generic JSON mapping shared by every record type.
//!
//! Records derive serde and describe their fields once in a static
//! [`RecordSchema`]. The schema drives structural validation and the
//! ordered trial parsing behind [`OneOf`] union fields.

mod enums;
mod field;
mod record;
mod schema;
mod timestamp;
mod union;

pub(crate) use enums::wire_enum;
pub use enums::{to_symbol, to_wire, EnumValue, WireEnum};
pub use field::Field;
pub use record::Record;
pub use schema::{FieldSchema, FieldType, RecordSchema};
pub use timestamp::Timestamp;
pub use union::{resolve_union, IdOr, OneOf, Resolution, Shape};
