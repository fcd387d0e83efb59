//! `ts-policy`: the rider exchange decided at every docking event.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`model`]        | `TransportPolicy` trait: the pluggable decision      |
//! | [`context`]      | `DockContext`: read-only snapshot handed to a policy |
//! | [`plan`]         | `DockPlan`: the three disjoint rider sets            |
//! | [`reachability`] | `ReachabilityPolicy`: the default, graph-driven rule |
//! | [`noop`]         | `NoopPolicy`: exchanges nobody                       |
//!
//! A policy only *decides*.  It reads a pre-mutation snapshot and returns
//! rider ids; `ts-mobility` applies the plan afterwards, so a rider can
//! never land in two sets of the same event.

pub mod context;
pub mod model;
pub mod noop;
pub mod plan;
pub mod reachability;


pub use context::DockContext;
pub use model::TransportPolicy;
pub use noop::NoopPolicy;
pub use plan::DockPlan;
pub use reachability::ReachabilityPolicy;
