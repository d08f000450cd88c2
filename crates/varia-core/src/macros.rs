/// Wrap an enum declaration with the crate's standard derive set: Debug,
/// Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord.
///
/// The `no_ord` form stops at PartialEq for types carrying f64 fields.
#[macro_export]
macro_rules! common_enum {
    ($(#[$attr:meta])* pub enum $name:ident { $($body:tt)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name { $($body)* }
    };
    (no_ord $(#[$attr:meta])* pub enum $name:ident { $($body:tt)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
        pub enum $name { $($body)* }
    };
}

/// Struct counterpart of [`common_enum`], with the same derive set and the
/// same `no_ord` escape hatch.
#[macro_export]
macro_rules! common_struct {
    ($(#[$attr:meta])* pub struct $name:ident { $($body:tt)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name { $($body)* }
    };
    (no_ord $(#[$attr:meta])* pub struct $name:ident { $($body:tt)* }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
        pub struct $name { $($body)* }
    };
}
