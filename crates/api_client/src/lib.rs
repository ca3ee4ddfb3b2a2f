#![allow(
    clippy::derive_partial_eq_without_eq,
    clippy::empty_docs,
    clippy::to_string_trait_impl,
    clippy::too_many_arguments,
    clippy::uninlined_format_args,
    clippy::needless_return,
    clippy::derivable_impls,
    unused_imports,
)]

pub mod apis;
pub mod models;

pub mod manual_additions;
