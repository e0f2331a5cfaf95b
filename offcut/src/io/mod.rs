/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for exporting internal representations into external ones
pub mod export;
